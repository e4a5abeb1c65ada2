//! Mock implementations and test helpers for gelato-orders traits.
use crate::users::TEST_USERS;
use alloy::{
    primitives::{Address, B256, U256},
    providers::{Provider, ProviderBuilder},
    transports::mock::Asserter,
};
use gelato_constants::test_utils::{HANDLER_ADDRESS, STOP_LIMIT_MODULE, TOKEN_A, TOKEN_B};
use gelato_orders::{
    encode_output_constraints, order_key, AllowanceSource, OrderKey, OrderRegistry, RpcReader,
};
use gelato_types::{Order, OrderStatus, StopLimitOrder, WitnessAndSecret};
use std::sync::{Arc, Mutex};

/// Error returned by mocks configured to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("mock collaborator failure")]
pub struct MockError;

/// A mock [`OrderRegistry`] with a fixed answer that records every key it
/// is asked about.
#[derive(Debug, Clone, Default)]
pub struct MockOrderRegistry {
    exists: bool,
    fail: bool,
    queries: Arc<Mutex<Vec<OrderKey>>>,
}

impl MockOrderRegistry {
    /// Create a registry that answers `exists` to every lookup.
    pub fn new(exists: bool) -> Self {
        Self { exists, ..Default::default() }
    }

    /// Create a registry whose lookups fail with [`MockError`].
    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    /// Get all keys looked up so far.
    pub fn queries(&self) -> Vec<OrderKey> {
        self.queries.lock().unwrap().clone()
    }
}

impl OrderRegistry for MockOrderRegistry {
    type Error = MockError;

    async fn exists(&self, key: &OrderKey) -> Result<bool, Self::Error> {
        self.queries.lock().unwrap().push(key.clone());
        if self.fail {
            return Err(MockError);
        }
        Ok(self.exists)
    }
}

/// A single allowance lookup, as `(token, owner, spender)`.
pub type AllowanceQuery = (Address, Address, Address);

/// A mock [`AllowanceSource`] with a fixed allowance that records every
/// lookup.
#[derive(Debug, Clone, Default)]
pub struct MockAllowanceSource {
    allowance: U256,
    fail: bool,
    queries: Arc<Mutex<Vec<AllowanceQuery>>>,
}

impl MockAllowanceSource {
    /// Create a source that reports `allowance` for every lookup.
    pub fn new(allowance: U256) -> Self {
        Self { allowance, ..Default::default() }
    }

    /// Create a source whose lookups fail with [`MockError`].
    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }

    /// Get all lookups made so far.
    pub fn queries(&self) -> Vec<AllowanceQuery> {
        self.queries.lock().unwrap().clone()
    }
}

impl AllowanceSource for MockAllowanceSource {
    type Error = MockError;

    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, Self::Error> {
        self.queries.lock().unwrap().push((token, owner, spender));
        if self.fail {
            return Err(MockError);
        }
        Ok(self.allowance)
    }
}

/// Create an [`RpcReader`] backed by a mocked transport.
///
/// Responses are pushed to the returned [`Asserter`] as ABI-encoded return
/// data, one per `eth_call`.
pub fn mock_rpc_reader(limit_orders: Address) -> (RpcReader<impl Provider>, Asserter) {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new()
        .disable_recommended_fillers()
        .connect_mocked_client(asserter.clone());
    (RpcReader::new(provider, limit_orders), asserter)
}

/// Secret of the witness used by [`TestOrderBuilder`] unless overridden.
pub const TEST_WITNESS_SECRET: B256 = B256::repeat_byte(0x42);

/// Builder for stop-limit order records, as the subgraph would return
/// them.
#[derive(Debug, Clone)]
pub struct TestOrderBuilder {
    module: Address,
    input_token: Address,
    output_token: Address,
    owner: Address,
    witness: WitnessAndSecret,
    input_amount: U256,
    min_return: U256,
    max_return: U256,
    status: OrderStatus,
    updated_at: u64,
    is_expired: bool,
}

impl Default for TestOrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestOrderBuilder {
    /// Create a new builder for an open TOKEN_A to TOKEN_B order owned by
    /// the first test user.
    pub fn new() -> Self {
        Self {
            module: STOP_LIMIT_MODULE,
            input_token: TOKEN_A,
            output_token: TOKEN_B,
            owner: TEST_USERS[0],
            witness: WitnessAndSecret::from_secret(TEST_WITNESS_SECRET).unwrap(),
            input_amount: U256::from(1_000_000),
            min_return: U256::from(993_000),
            max_return: U256::from(1_100_000),
            status: OrderStatus::Open,
            updated_at: 1_650_000_000,
            is_expired: false,
        }
    }

    /// Set the module.
    pub const fn with_module(mut self, module: Address) -> Self {
        self.module = module;
        self
    }

    /// Set the input token.
    pub const fn with_input_token(mut self, token: Address) -> Self {
        self.input_token = token;
        self
    }

    /// Set the output token.
    pub const fn with_output_token(mut self, token: Address) -> Self {
        self.output_token = token;
        self
    }

    /// Set the owner.
    pub const fn with_owner(mut self, owner: Address) -> Self {
        self.owner = owner;
        self
    }

    /// Set the status.
    pub const fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the last update timestamp.
    pub const fn with_updated_at(mut self, updated_at: u64) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Mark the order as expired.
    pub const fn expired(mut self) -> Self {
        self.is_expired = true;
        self
    }

    /// Build the order record. The id is the derived order key.
    pub fn build(self) -> StopLimitOrder {
        let data = encode_output_constraints(
            self.output_token,
            self.min_return,
            HANDLER_ADDRESS,
            self.max_return,
        );
        let id = order_key(self.module, self.input_token, self.owner, self.witness.witness, &data);

        StopLimitOrder {
            order: Order {
                id: Some(id),
                owner: Some(self.owner),
                input_token: Some(self.input_token),
                output_token: Some(self.output_token),
                min_return: Some(self.min_return),
                module: Some(self.module),
                witness: Some(self.witness.witness),
                input_amount: Some(self.input_amount),
                status: self.status,
                updated_at: Some(self.updated_at),
                data: Some(data),
                handler: Some("uniswap".to_owned()),
                ..Default::default()
            },
            max_return: Some(self.max_return),
            is_expired: self.is_expired,
        }
    }
}
