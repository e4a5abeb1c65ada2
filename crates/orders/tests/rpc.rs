//! Integration tests for [`RpcReader`] against a mocked transport.
use alloy::{
    primitives::{Bytes, U256},
    sol_types::SolValue,
};
use gelato_constants::{GelatoConstants, Handler};
use gelato_orders::{AllowanceSource, OrderError, OrderKey, OrderRegistry, StopLimitOrders};
use gelato_test_utils::{
    orders::{mock_rpc_reader, TestOrderBuilder},
    test_constants::{ERC20_ORDER_ROUTER, HANDLER_ADDRESS, LIMIT_ORDERS, STOP_LIMIT_MODULE, TOKEN_A},
    users::TEST_USERS,
};

#[tokio::test]
async fn exists_decodes_bool() {
    let (reader, asserter) = mock_rpc_reader(LIMIT_ORDERS);
    let order = TestOrderBuilder::new().build();
    let key = OrderKey::try_from_order(&order.order).unwrap();

    asserter.push_success(&Bytes::from(true.abi_encode()));
    asserter.push_success(&Bytes::from(false.abi_encode()));

    assert!(reader.exists(&key).await.unwrap());
    assert!(!reader.exists(&key).await.unwrap());
}

#[tokio::test]
async fn allowance_decodes_uint() {
    let (reader, asserter) = mock_rpc_reader(LIMIT_ORDERS);
    asserter.push_success(&Bytes::from(U256::from(500).abi_encode()));

    let allowance = reader.allowance(TOKEN_A, TEST_USERS[0], ERC20_ORDER_ROUTER).await.unwrap();
    assert_eq!(allowance, U256::from(500));
}

#[tokio::test]
async fn transport_failure_surfaces_as_remote() {
    let (reader, asserter) = mock_rpc_reader(LIMIT_ORDERS);
    asserter.push_failure_msg("node unavailable");

    let orders =
        StopLimitOrders::new(GelatoConstants::test(), STOP_LIMIT_MODULE).with_provider(reader);
    let order = TestOrderBuilder::new().build();
    let err = orders.encode_cancellation(&order, true).await.unwrap_err();
    assert!(matches!(err, OrderError::Remote(_)));
}

#[tokio::test]
async fn submission_through_rpc_reader() {
    let (reader, asserter) = mock_rpc_reader(LIMIT_ORDERS);
    asserter.push_success(&Bytes::from(U256::from(10).abi_encode()));

    let orders = StopLimitOrders::new(GelatoConstants::test(), STOP_LIMIT_MODULE)
        .with_handler(Handler::Uniswap, HANDLER_ADDRESS)
        .unwrap()
        .with_provider(reader);
    let order = TestOrderBuilder::new().build();

    let params = gelato_orders::SubmissionParams {
        input_token: TOKEN_A,
        output_token: order.order.output_token.unwrap(),
        owner: TEST_USERS[0],
        witness: order.order.witness.unwrap(),
        amount: U256::from(11),
        max_return: U256::from(100),
        min_return: U256::from(90),
        secret: Default::default(),
        check_allowance: true,
    };
    let err = orders.encode_submission(&params).await.unwrap_err();
    assert!(matches!(err, OrderError::InsufficientAllowance { .. }));
}
