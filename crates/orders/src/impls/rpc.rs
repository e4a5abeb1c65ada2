use crate::{AllowanceSource, OrderKey, OrderRegistry};
use alloy::{
    primitives::{Address, U256},
    providers::Provider,
};
use gelato_bindings::{GelatoLimitOrders, IERC20};
use tracing::{instrument, warn};

/// Reads order and allowance state over JSON-RPC.
///
/// Wraps any alloy [`Provider`] and implements both [`OrderRegistry`], via
/// `existOrder` on the limit orders core, and [`AllowanceSource`], via
/// ERC20 `allowance`.
#[derive(Debug, Clone)]
pub struct RpcReader<P> {
    provider: P,
    limit_orders: Address,
}

impl<P> RpcReader<P> {
    /// Create a new reader against the given limit orders core.
    pub const fn new(provider: P, limit_orders: Address) -> Self {
        Self { provider, limit_orders }
    }

    /// Get a reference to the provider.
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Get the limit orders core address.
    pub const fn limit_orders(&self) -> Address {
        self.limit_orders
    }
}

impl<P: Provider> OrderRegistry for RpcReader<P> {
    type Error = alloy::contract::Error;

    #[instrument(skip_all, fields(owner = %key.owner, witness = %key.witness))]
    async fn exists(&self, key: &OrderKey) -> Result<bool, Self::Error> {
        GelatoLimitOrders::new(self.limit_orders, &self.provider)
            .existOrder(key.module, key.input_token, key.owner, key.witness, key.data.clone())
            .call()
            .await
            .inspect_err(|e| warn!(%e, "existOrder call failed"))
    }
}

impl<P: Provider> AllowanceSource for RpcReader<P> {
    type Error = alloy::contract::Error;

    #[instrument(skip(self))]
    async fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, Self::Error> {
        IERC20::new(token, &self.provider)
            .allowance(owner, spender)
            .call()
            .await
            .inspect_err(|e| warn!(%e, "allowance call failed"))
    }
}
