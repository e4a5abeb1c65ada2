use core::fmt;
use std::str::FromStr;

/// Error type for parsing a [`Handler`] from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown handler: {0}")]
pub struct ParseHandlerError(String);

/// The DEX integration that executes the swap once an order triggers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handler {
    /// SpookySwap (Fantom).
    Spookyswap,
    /// Uniswap (Ethereum).
    Uniswap,
    /// QuickSwap (Polygon).
    Quickswap,
    /// SpiritSwap (Fantom).
    Spiritswap,
    /// BombSwap (Fantom).
    Bombswap,
    /// Polydex (Polygon).
    Polydex,
    /// CafeSwap (Polygon).
    Cafeswap,
    /// PancakeSwap (BSC).
    Pancakeswap,
    /// Trader Joe (Avalanche).
    Traderjoe,
    /// DefySwap (Fantom).
    Defyswap,
    /// Pangolin (Avalanche).
    Pangolin,
}

impl Handler {
    /// All known handlers.
    pub const ALL: [Handler; 11] = [
        Self::Spookyswap,
        Self::Uniswap,
        Self::Quickswap,
        Self::Spiritswap,
        Self::Bombswap,
        Self::Polydex,
        Self::Cafeswap,
        Self::Pancakeswap,
        Self::Traderjoe,
        Self::Defyswap,
        Self::Pangolin,
    ];

    /// The lowercase name of the handler.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Spookyswap => "spookyswap",
            Self::Uniswap => "uniswap",
            Self::Quickswap => "quickswap",
            Self::Spiritswap => "spiritswap",
            Self::Bombswap => "bombswap",
            Self::Polydex => "polydex",
            Self::Cafeswap => "cafeswap",
            Self::Pancakeswap => "pancakeswap",
            Self::Traderjoe => "traderjoe",
            Self::Defyswap => "defyswap",
            Self::Pangolin => "pangolin",
        }
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handler {
    type Err = ParseHandlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|handler| handler.as_str() == s)
            .ok_or(ParseHandlerError(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_through_display() {
        for handler in Handler::ALL {
            assert_eq!(handler.to_string().parse::<Handler>().unwrap(), handler);
        }
        assert_eq!(" QuickSwap ".parse::<Handler>().unwrap(), Handler::Quickswap);
        assert!("sushiswap".parse::<Handler>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Handler::Traderjoe).unwrap();
        assert_eq!(json, "\"traderjoe\"");
        let back: Handler = serde_json::from_str("\"pancakeswap\"").unwrap();
        assert_eq!(back, Handler::Pancakeswap);
    }
}
