use alloy::primitives::{Address, U256};
use gelato_constants::Handler;

/// Errors returned while encoding or pricing orders.
///
/// Every fallible builder either succeeds completely or returns one of
/// these without producing any transaction data.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OrderError {
    /// The operation needs a network collaborator and none is configured.
    #[error("no provider configured")]
    MissingProvider,
    /// No handler address is configured.
    #[error("no handler address configured")]
    MissingHandlerAddress,
    /// The handler has no deployment on the configured chain.
    #[error("handler {handler} is not available on chain {chain_id}")]
    InvalidHandler {
        /// The rejected handler.
        handler: Handler,
        /// The configured chain.
        chain_id: u64,
    },
    /// A required order field is missing.
    #[error("no {0} in order")]
    MissingField(&'static str),
    /// The order would swap a token for itself.
    #[error("input token and output token can not be equal")]
    SameToken,
    /// The slippage override leaves nothing of the output amount.
    #[error("slippage of {0} bps is too large for the configured fee")]
    InvalidSlippage(u32),
    /// A divisor was zero.
    #[error("{0} must be non-zero")]
    ZeroAmount(&'static str),
    /// Fee and slippage together exceed the output amount.
    #[error("fee and slippage exceed the output amount")]
    Underflow,
    /// An intermediate value does not fit in 256 bits.
    #[error("arithmetic overflow")]
    Overflow,
    /// The order is not registered on chain.
    #[error("order not found, please review your order data")]
    OrderNotFound,
    /// The owner has not approved the router for the order amount.
    #[error("insufficient token allowance for placing order: approved {allowance}, need {required}")]
    InsufficientAllowance {
        /// Current allowance of the router.
        allowance: U256,
        /// Order amount.
        required: U256,
    },
    /// The order owner is not the account signing the transaction.
    #[error("owner {owner} and signer {signer} mismatch")]
    OwnerMismatch {
        /// Owner of the order.
        owner: Address,
        /// Account that would sign.
        signer: Address,
    },
    /// A remote read failed.
    #[error("remote call failed: {0}")]
    Remote(#[source] Box<dyn core::error::Error + Send + Sync>),
}

impl OrderError {
    /// Wrap a collaborator error.
    pub fn remote<E>(error: E) -> Self
    where
        E: core::error::Error + Send + Sync + 'static,
    {
        Self::Remote(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            OrderError::SameToken.to_string(),
            "input token and output token can not be equal"
        );
        assert_eq!(OrderError::MissingField("witness").to_string(), "no witness in order");
        let err =
            OrderError::InsufficientAllowance { allowance: U256::from(1), required: U256::from(2) };
        assert!(err.to_string().contains("approved 1, need 2"));
    }

    #[test]
    fn remote_keeps_source() {
        let io = std::io::Error::other("connection refused");
        let err = OrderError::remote(io);
        let source = core::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "connection refused");
    }
}
