//! Constants for local test chains.

use crate::GelatoConstants;
use alloy::primitives::Address;
use std::borrow::Cow;

/// Test chain id. Matches the default anvil chain id.
pub const CHAIN_ID: u64 = 31337;
/// Test protocol fee, in basis points.
pub const FEE_BPS: u16 = 20;
/// Test default slippage, in basis points.
pub const SLIPPAGE_BPS: u16 = 50;
/// Test address for the limit orders core.
pub const LIMIT_ORDERS: Address = Address::repeat_byte(0x11);
/// Test address for the ERC20 order router.
pub const ERC20_ORDER_ROUTER: Address = Address::repeat_byte(0x22);
/// Test address for the stop-limit order module.
pub const STOP_LIMIT_MODULE: Address = Address::repeat_byte(0x33);
/// Test address for the uniswap handler.
pub const HANDLER_ADDRESS: Address = Address::repeat_byte(0x44);
/// Test address for the wrapped native token.
pub const WRAPPED_NATIVE_TOKEN: Address = Address::repeat_byte(0x55);
/// Test ERC20 token.
pub const TOKEN_A: Address = Address::repeat_byte(0x66);
/// Test ERC20 token.
pub const TOKEN_B: Address = Address::repeat_byte(0x77);
/// Test subgraph endpoint.
pub const SUBGRAPH_URL: &str = "http://localhost:8000/subgraphs/name/gelato-limit-orders";

/// Gelato constants for the local test chain.
pub const TEST: GelatoConstants = GelatoConstants::new(
    CHAIN_ID,
    FEE_BPS,
    SLIPPAGE_BPS,
    LIMIT_ORDERS,
    ERC20_ORDER_ROUTER,
    Cow::Borrowed(SUBGRAPH_URL),
);
