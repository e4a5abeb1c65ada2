/// Error type for loading [`GelatoConstants`] from the environment or other
/// sources.
///
/// [`GelatoConstants`]: crate::GelatoConstants
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error loading from environment variable
    #[error("missing or non-unicode environment variable: {0}")]
    Var(String),
    /// Error parsing environment variable
    #[error("failed to parse environment variable: {0}")]
    Parse(#[from] std::num::ParseIntError),
    /// Error parsing hex from environment variable
    #[error("failed to parse hex: {0}")]
    Hex(#[from] alloy::primitives::hex::FromHexError),
    /// Error parsing JSON
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Fee and slippage together consume the whole output amount.
    #[error("fee bps ({fee_bps}) plus slippage bps ({slippage_bps}) must be below 10000")]
    InvalidBps {
        /// Configured protocol fee, in basis points.
        fee_bps: u16,
        /// Configured slippage, in basis points.
        slippage_bps: u16,
    },
}

impl ConfigError {
    /// Missing or non-unicode env var.
    pub fn missing(s: &str) -> Self {
        ConfigError::Var(s.to_string())
    }
}
