use crate::Handler;
use alloy::primitives::{address, Address};
use std::str::FromStr;

/// The list of known chains as a string.
#[cfg(any(test, feature = "test-utils"))]
const KNOWN_CHAINS: &str = "mainnet, ropsten, goerli, bsc, matic, fantom, avalanche, test";
/// The list of known chains as a string.
#[cfg(not(any(test, feature = "test-utils")))]
const KNOWN_CHAINS: &str = "mainnet, ropsten, goerli, bsc, matic, fantom, avalanche";

/// Error type for parsing struct from a chain name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseChainError {
    /// The chain name is not supported.
    #[error("chain name {0} is not parseable. supported chains: {KNOWN_CHAINS}")]
    ChainNotSupported(String),
}

/// Chains on which the Gelato limit-order protocol is deployed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum KnownChains {
    /// Ethereum mainnet.
    Mainnet,
    /// Ropsten testnet.
    Ropsten,
    /// Goerli testnet.
    Goerli,
    /// BNB Smart Chain.
    Bsc,
    /// Polygon PoS.
    Matic,
    /// Fantom Opera.
    Fantom,
    /// Avalanche C-Chain.
    Avalanche,
    /// Local test chain.
    #[cfg(any(test, feature = "test-utils"))]
    Test,
}

impl KnownChains {
    /// Get the chain id.
    pub const fn chain_id(&self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Ropsten => 3,
            Self::Goerli => 5,
            Self::Bsc => 56,
            Self::Matic => 137,
            Self::Fantom => 250,
            Self::Avalanche => 43114,
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => crate::test_utils::CHAIN_ID,
        }
    }

    /// Look up a known chain by its chain id.
    pub const fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            1 => Some(Self::Mainnet),
            3 => Some(Self::Ropsten),
            5 => Some(Self::Goerli),
            56 => Some(Self::Bsc),
            137 => Some(Self::Matic),
            250 => Some(Self::Fantom),
            43114 => Some(Self::Avalanche),
            #[cfg(any(test, feature = "test-utils"))]
            crate::test_utils::CHAIN_ID => Some(Self::Test),
            _ => None,
        }
    }

    /// True for Ethereum mainnet and its testnets.
    pub const fn is_ethereum(&self) -> bool {
        matches!(self, Self::Mainnet | Self::Ropsten | Self::Goerli)
    }

    /// True if transactions on this chain can be routed through flashbots.
    pub const fn is_flashbots_compatible(&self) -> bool {
        matches!(self, Self::Mainnet | Self::Goerli)
    }

    /// Address of the wrapped native token (WETH, WBNB, WMATIC, ...).
    pub const fn wrapped_native_token(&self) -> Address {
        match self {
            Self::Mainnet => address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            Self::Ropsten => address!("0xc778417E063141139Fce010982780140Aa0cD5Ab"),
            Self::Goerli => address!("0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6"),
            Self::Bsc => address!("0xbb4CdB9CBd36B01bD1cBaEBF2De08d9173bc095c"),
            Self::Matic => address!("0x0d500B1d8E8eF31E21C99d1Db9A6444d3ADf1270"),
            Self::Fantom => address!("0x21be370D5312f44cB42ce377BC9b8a0cEF1A4C83"),
            Self::Avalanche => address!("0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7"),
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => crate::test_utils::WRAPPED_NATIVE_TOKEN,
        }
    }

    /// The DEX handlers with deployed integrations on this chain.
    pub const fn handlers(&self) -> &'static [Handler] {
        match self {
            Self::Mainnet | Self::Ropsten | Self::Goerli => &[Handler::Uniswap],
            Self::Bsc => &[Handler::Pancakeswap],
            Self::Matic => &[Handler::Quickswap, Handler::Polydex, Handler::Cafeswap],
            Self::Fantom => {
                &[Handler::Spookyswap, Handler::Spiritswap, Handler::Bombswap, Handler::Defyswap]
            }
            Self::Avalanche => &[Handler::Traderjoe, Handler::Pangolin],
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => &[Handler::Uniswap],
        }
    }

    /// True if the handler is deployed on this chain.
    pub fn supports_handler(&self, handler: Handler) -> bool {
        self.handlers().contains(&handler)
    }
}

impl FromStr for KnownChains {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        if let Ok(chain_id) = s.parse::<u64>() {
            return Self::from_chain_id(chain_id).ok_or(ParseChainError::ChainNotSupported(s));
        }
        match s.as_str() {
            "mainnet" | "ethereum" => Ok(Self::Mainnet),
            "ropsten" => Ok(Self::Ropsten),
            "goerli" => Ok(Self::Goerli),
            "bsc" => Ok(Self::Bsc),
            "matic" | "polygon" => Ok(Self::Matic),
            "fantom" => Ok(Self::Fantom),
            "avalanche" | "avax" => Ok(Self::Avalanche),
            #[cfg(any(test, feature = "test-utils"))]
            "test" => Ok(Self::Test),
            _ => Err(ParseChainError::ChainNotSupported(s)),
        }
    }
}
