use crate::{AllowanceSource, OrderKey, OrderRegistry};
use alloy::primitives::{Address, U256};
use core::convert::Infallible;

/// Placeholder for a [`StopLimitOrders`] with no network collaborator.
///
/// Uninhabited: operations that need a collaborator fail with
/// [`OrderError::MissingProvider`] before any call would be made.
///
/// [`StopLimitOrders`]: crate::StopLimitOrders
/// [`OrderError::MissingProvider`]: crate::OrderError::MissingProvider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoProvider {}

impl OrderRegistry for NoProvider {
    type Error = Infallible;

    async fn exists(&self, _key: &OrderKey) -> Result<bool, Self::Error> {
        match *self {}
    }
}

impl AllowanceSource for NoProvider {
    type Error = Infallible;

    async fn allowance(
        &self,
        _token: Address,
        _owner: Address,
        _spender: Address,
    ) -> Result<U256, Self::Error> {
        match *self {}
    }
}
