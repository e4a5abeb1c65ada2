mod error;
pub use error::ConfigError;

mod chains;
pub use chains::{KnownChains, ParseChainError};

mod handler;
pub use handler::{Handler, ParseHandlerError};

use crate::{is_network_gas_token, load_address, load_u16, load_u64, load_url};
use alloy::primitives::Address;
use std::borrow::Cow;

/// Denominator for basis-point arithmetic.
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Gelato limit-order constants for a single chain.
///
/// These values are supplied per deployment, never computed. They fix the
/// protocol fee and default slippage applied to every order, the contracts
/// that calldata is addressed to, and the subgraph that indexes order
/// lifecycle events.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GelatoConstants {
    /// Chain ID.
    chain_id: u64,
    /// Protocol fee, in basis points of the output amount.
    fee_bps: u16,
    /// Default slippage tolerance, in basis points of the output amount.
    slippage_bps: u16,
    /// Address of the limit orders core contract.
    limit_orders: Address,
    /// Address of the ERC20 order router.
    erc20_order_router: Address,
    /// URL of the order subgraph.
    subgraph_url: Cow<'static, str>,
}

impl GelatoConstants {
    /// Create a new set of constants.
    pub const fn new(
        chain_id: u64,
        fee_bps: u16,
        slippage_bps: u16,
        limit_orders: Address,
        erc20_order_router: Address,
        subgraph_url: Cow<'static, str>,
    ) -> Self {
        Self { chain_id, fee_bps, slippage_bps, limit_orders, erc20_order_router, subgraph_url }
    }

    /// Get the hard-coded local test constants.
    #[cfg(any(test, feature = "test-utils"))]
    pub const fn test() -> Self {
        crate::test_utils::TEST
    }

    /// Parse and validate constants from a JSON document.
    pub fn try_from_json(json: &str) -> Result<Self, ConfigError> {
        let constants: Self = serde_json::from_str(json)?;
        constants.validate()
    }

    /// Load and validate constants from the environment.
    ///
    /// Reads `GELATO_CHAIN_ID`, `GELATO_FEE_BPS`, `GELATO_SLIPPAGE_BPS`,
    /// `GELATO_CORE_ADDRESS`, `GELATO_ROUTER_ADDRESS` and
    /// `GELATO_SUBGRAPH_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(
            load_u64("GELATO_CHAIN_ID")?,
            load_u16("GELATO_FEE_BPS")?,
            load_u16("GELATO_SLIPPAGE_BPS")?,
            load_address("GELATO_CORE_ADDRESS")?,
            load_address("GELATO_ROUTER_ADDRESS")?,
            load_url("GELATO_SUBGRAPH_URL")?,
        )
        .validate()
    }

    /// Check that fee and slippage leave a non-empty share of the output.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if u32::from(self.fee_bps) + u32::from(self.slippage_bps) >= u32::from(BPS_DENOMINATOR) {
            return Err(ConfigError::InvalidBps {
                fee_bps: self.fee_bps,
                slippage_bps: self.slippage_bps,
            });
        }
        Ok(self)
    }

    /// Replace the protocol fee.
    pub const fn with_fee_bps(mut self, fee_bps: u16) -> Self {
        self.fee_bps = fee_bps;
        self
    }

    /// Replace the default slippage.
    pub const fn with_slippage_bps(mut self, slippage_bps: u16) -> Self {
        self.slippage_bps = slippage_bps;
        self
    }

    /// Get the chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the known chain for the chain ID, if any.
    pub const fn known_chain(&self) -> Option<KnownChains> {
        KnownChains::from_chain_id(self.chain_id)
    }

    /// Get the protocol fee in basis points.
    pub const fn fee_bps(&self) -> u16 {
        self.fee_bps
    }

    /// Get the default slippage in basis points.
    pub const fn slippage_bps(&self) -> u16 {
        self.slippage_bps
    }

    /// Get the limit orders core address.
    pub const fn limit_orders(&self) -> Address {
        self.limit_orders
    }

    /// Get the ERC20 order router address.
    pub const fn erc20_order_router(&self) -> Address {
        self.erc20_order_router
    }

    /// Get the subgraph URL.
    pub fn subgraph_url(&self) -> &str {
        &self.subgraph_url
    }

    /// True for Ethereum mainnet and its testnets.
    pub fn is_ethereum_chain(&self) -> bool {
        self.known_chain().is_some_and(|chain| chain.is_ethereum())
    }

    /// True if the chain supports flashbots submission.
    pub fn is_flashbots_compatible(&self) -> bool {
        self.known_chain().is_some_and(|chain| chain.is_flashbots_compatible())
    }

    /// True if the handler has a deployed integration on this chain.
    pub fn is_valid_handler(&self, handler: Handler) -> bool {
        self.known_chain().is_some_and(|chain| chain.supports_handler(handler))
    }

    /// Get the wrapped native token, if the chain is known.
    pub fn wrapped_native_token(&self) -> Option<Address> {
        self.known_chain().map(|chain| chain.wrapped_native_token())
    }

    /// True if the address is the native token marker or the wrapped
    /// native token of this chain.
    pub fn is_eth_or_weth(&self, token: Address) -> bool {
        is_network_gas_token(token) || self.wrapped_native_token() == Some(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_utils, NATIVE_TOKEN_ADDRESS};

    #[test]
    fn validate_rejects_saturated_bps() {
        let err = GelatoConstants::test().with_fee_bps(9_000).with_slippage_bps(1_000).validate();
        assert!(matches!(
            err,
            Err(ConfigError::InvalidBps { fee_bps: 9_000, slippage_bps: 1_000 })
        ));
        assert!(GelatoConstants::test()
            .with_fee_bps(9_000)
            .with_slippage_bps(999)
            .validate()
            .is_ok());
    }

    #[test]
    fn json_uses_camel_case() {
        let json = serde_json::json!({
            "chainId": 137,
            "feeBps": 10,
            "slippageBps": 40,
            "limitOrders": "0x1111111111111111111111111111111111111111",
            "erc20OrderRouter": "0x2222222222222222222222222222222222222222",
            "subgraphUrl": "https://example.invalid/subgraphs/name/limit-orders",
        });
        let constants = GelatoConstants::try_from_json(&json.to_string()).unwrap();
        assert_eq!(constants.chain_id(), 137);
        assert_eq!(constants.fee_bps(), 10);
        assert_eq!(constants.slippage_bps(), 40);
        assert_eq!(constants.limit_orders(), Address::repeat_byte(0x11));
        assert_eq!(constants.erc20_order_router(), Address::repeat_byte(0x22));
        assert_eq!(constants.known_chain(), Some(KnownChains::Matic));
        assert!(!constants.is_ethereum_chain());
        assert!(constants.is_valid_handler(Handler::Quickswap));
    }

    #[test]
    fn json_with_bad_bps_is_rejected() {
        let json = r#"{"chainId":1,"feeBps":5000,"slippageBps":5000,
            "limitOrders":"0x1111111111111111111111111111111111111111",
            "erc20OrderRouter":"0x2222222222222222222222222222222222222222",
            "subgraphUrl":"http://localhost"}"#;
        assert!(matches!(
            GelatoConstants::try_from_json(json),
            Err(ConfigError::InvalidBps { .. })
        ));
    }

    // The only test touching `GELATO_*` variables; keep it that way so
    // parallel tests never observe a partial environment.
    #[test]
    fn loads_from_env() {
        const VARS: [(&str, &str); 6] = [
            ("GELATO_CHAIN_ID", "250"),
            ("GELATO_FEE_BPS", "15"),
            ("GELATO_SLIPPAGE_BPS", "45"),
            ("GELATO_CORE_ADDRESS", "0x1111111111111111111111111111111111111111"),
            ("GELATO_ROUTER_ADDRESS", "0x2222222222222222222222222222222222222222"),
            ("GELATO_SUBGRAPH_URL", "https://example.invalid/subgraphs/name/limit-orders"),
        ];
        let set_all = || VARS.iter().for_each(|(key, value)| std::env::set_var(key, value));

        set_all();
        let constants = GelatoConstants::from_env().unwrap();
        assert_eq!(constants.chain_id(), 250);
        assert_eq!(constants.fee_bps(), 15);
        assert_eq!(constants.slippage_bps(), 45);
        assert_eq!(constants.limit_orders(), Address::repeat_byte(0x11));
        assert_eq!(constants.erc20_order_router(), Address::repeat_byte(0x22));
        assert_eq!(constants.subgraph_url(), VARS[5].1);
        assert_eq!(constants.known_chain(), Some(KnownChains::Fantom));

        // every key is required
        for (key, _) in VARS {
            set_all();
            std::env::remove_var(key);
            assert!(
                matches!(GelatoConstants::from_env(), Err(ConfigError::Var(ref k)) if k == key),
                "{key} should be required"
            );
        }

        set_all();
        std::env::set_var("GELATO_CORE_ADDRESS", "0x11zz");
        assert!(matches!(GelatoConstants::from_env(), Err(ConfigError::Hex(_))));

        set_all();
        std::env::set_var("GELATO_FEE_BPS", "fifteen");
        assert!(matches!(GelatoConstants::from_env(), Err(ConfigError::Parse(_))));

        set_all();
        std::env::set_var("GELATO_SLIPPAGE_BPS", "9985");
        assert!(matches!(
            GelatoConstants::from_env(),
            Err(ConfigError::InvalidBps { fee_bps: 15, slippage_bps: 9985 })
        ));

        VARS.iter().for_each(|(key, _)| std::env::remove_var(key));
    }

    #[test]
    fn eth_or_weth() {
        let constants = GelatoConstants::test();
        assert!(constants.is_eth_or_weth(NATIVE_TOKEN_ADDRESS));
        assert!(constants.is_eth_or_weth(test_utils::WRAPPED_NATIVE_TOKEN));
        assert!(!constants.is_eth_or_weth(test_utils::TOKEN_A));
    }
}
