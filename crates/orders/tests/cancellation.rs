//! Integration tests for order cancellation encoding.
use alloy::{
    primitives::{Address, U256},
    sol_types::SolCall,
};
use gelato_bindings::GelatoLimitOrders;
use gelato_constants::GelatoConstants;
use gelato_orders::{OrderError, OrderKey, StopLimitOrders};
use gelato_test_utils::{
    orders::{MockOrderRegistry, TestOrderBuilder},
    test_constants::{LIMIT_ORDERS, STOP_LIMIT_MODULE, TOKEN_A},
    users::TEST_USERS,
};
use gelato_types::StopLimitOrder;

fn orders(registry: MockOrderRegistry) -> StopLimitOrders<MockOrderRegistry> {
    StopLimitOrders::new(GelatoConstants::test(), STOP_LIMIT_MODULE).with_provider(registry)
}

#[tokio::test]
async fn cancellation_targets_core_with_key_tuple() {
    let order = TestOrderBuilder::new().build();
    let orders = orders(MockOrderRegistry::new(true));

    let tx = orders.encode_cancellation(&order, true).await.unwrap();
    assert_eq!(tx.to(), LIMIT_ORDERS);
    assert_eq!(tx.value(), U256::ZERO);

    let call = GelatoLimitOrders::cancelOrderCall::abi_decode(tx.data()).unwrap();
    assert_eq!(call._module, STOP_LIMIT_MODULE);
    assert_eq!(call._inputToken, TOKEN_A);
    assert_eq!(call._owner, TEST_USERS[0]);
    assert_eq!(call._witness, order.order.witness.unwrap());
    assert_eq!(call._data, order.order.data.clone().unwrap());

    let queries = orders.provider().unwrap().queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].hash(), order.order.id.unwrap());
}

#[tokio::test]
async fn missing_order_short_circuits() {
    let order = TestOrderBuilder::new().build();
    let orders = orders(MockOrderRegistry::new(false));

    let err = orders.encode_cancellation(&order, true).await.unwrap_err();
    assert!(matches!(err, OrderError::OrderNotFound));
    assert_eq!(orders.provider().unwrap().queries().len(), 1);
}

#[tokio::test]
async fn unchecked_cancellation_makes_no_lookup() {
    let order = TestOrderBuilder::new().build();
    let orders = orders(MockOrderRegistry::new(false));

    orders.encode_cancellation(&order, false).await.unwrap();
    assert!(orders.provider().unwrap().queries().is_empty());

    // no provider is fine when nothing needs checking
    let bare = StopLimitOrders::new(GelatoConstants::test(), STOP_LIMIT_MODULE);
    bare.encode_cancellation(&order, false).await.unwrap();
    let err = bare.encode_cancellation(&order, true).await.unwrap_err();
    assert!(matches!(err, OrderError::MissingProvider));
}

#[tokio::test]
async fn missing_fields_are_reported_in_order() {
    let orders = orders(MockOrderRegistry::new(true));
    let full = TestOrderBuilder::new().build();

    let strip = |f: fn(&mut StopLimitOrder)| {
        let mut order = full.clone();
        f(&mut order);
        order
    };

    let cases: [(StopLimitOrder, &str); 6] = [
        (strip(|o| o.order.input_token = None), "input token"),
        (strip(|o| o.order.witness = None), "witness"),
        (strip(|o| o.order.output_token = None), "output token"),
        (strip(|o| o.order.min_return = None), "minReturn"),
        (strip(|o| o.order.owner = None), "owner"),
        (strip(|o| o.order.data = None), "data"),
    ];

    for (order, field) in cases {
        let err = orders.encode_cancellation(&order, true).await.unwrap_err();
        assert!(
            matches!(err, OrderError::MissingField(missing) if missing == field),
            "expected missing {field}, got {err}"
        );
    }

    // validation happens before any lookup
    assert!(orders.provider().unwrap().queries().is_empty());

    let err = orders.encode_cancellation(&strip(|o| o.order.witness = None), false).await;
    assert!(matches!(err, Err(OrderError::MissingField("witness"))));
}

#[tokio::test]
async fn failing_registry_is_remote_error() {
    let order = TestOrderBuilder::new().build();
    let err = orders(MockOrderRegistry::failing())
        .encode_cancellation(&order, true)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Remote(_)));
}

#[tokio::test]
async fn is_active_order_uses_order_module() {
    let other_module = Address::repeat_byte(0xab);
    let order = TestOrderBuilder::new().with_module(other_module).build();
    let orders = orders(MockOrderRegistry::new(true));

    assert!(orders.is_active_order(&order.order).await.unwrap());
    let key: OrderKey = orders.provider().unwrap().queries().remove(0);
    assert_eq!(key.module, other_module);
    assert_eq!(key.hash(), order.order.id.unwrap());
}

#[tokio::test]
async fn cancel_request_checks_signer_and_sets_gas() {
    let order = TestOrderBuilder::new().build();
    let orders = orders(MockOrderRegistry::new(true));

    let err = orders.cancel_request(&order, false, TEST_USERS[1]).await.unwrap_err();
    assert!(matches!(
        err,
        OrderError::OwnerMismatch { owner, signer } if owner == TEST_USERS[0] && signer == TEST_USERS[1]
    ));

    let request = orders.cancel_request(&order, false, TEST_USERS[0]).await.unwrap();
    assert_eq!(request.from, Some(TEST_USERS[0]));
    // the test chain is not an Ethereum network
    assert_eq!(request.gas, Some(1_500_000));

    let mainnet = GelatoConstants::new(
        1,
        20,
        50,
        LIMIT_ORDERS,
        Address::repeat_byte(0x22),
        "http://localhost:8000".into(),
    );
    let request = StopLimitOrders::new(mainnet, STOP_LIMIT_MODULE)
        .cancel_request(&order, false, TEST_USERS[0])
        .await
        .unwrap();
    assert_eq!(request.gas, Some(500_000));
    assert_eq!(request.to, Some(LIMIT_ORDERS.into()));
}
