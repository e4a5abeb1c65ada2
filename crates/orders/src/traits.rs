use crate::OrderKey;
use alloy::primitives::{Address, U256};
use core::future::Future;

/// A source of truth for which orders are registered in the limit orders
/// core.
///
/// Implementors answer whether an order identified by its key tuple is
/// still resting, typically by calling `existOrder` on the core contract.
pub trait OrderRegistry {
    /// The error type returned by lookups.
    type Error: core::error::Error + Send + Sync + 'static;

    /// True if the order exists and has neither been executed nor
    /// cancelled.
    fn exists(&self, key: &OrderKey) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}

/// A source of ERC20 allowances.
///
/// Implementors report how much of `token` the `spender` may pull from
/// `owner`, typically by calling `allowance` on the token contract.
pub trait AllowanceSource {
    /// The error type returned by lookups.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Fetch the current allowance.
    fn allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> impl Future<Output = Result<U256, Self::Error>> + Send;
}
