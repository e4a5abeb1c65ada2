//! Gelato limit-order protocol constants.
//!
//! This crate contains the per-chain configuration consumed by the order
//! encoding core: fee and slippage basis points, the addresses of the limit
//! orders core and the ERC20 order router, and the subgraph endpoint used for
//! historical order queries. It also carries the chain metadata that does not
//! need to be supplied, such as which DEX handlers a chain supports.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod chains;
pub use chains::test_utils;

mod env;
pub use env::{
    load_address, load_string, load_string_opt, load_u16, load_u16_opt, load_u64, load_url,
    load_url_opt,
};

mod types;
pub use types::{
    ConfigError, GelatoConstants, Handler, KnownChains, ParseChainError, ParseHandlerError,
    BPS_DENOMINATOR,
};

use alloy::primitives::Address;

/// Placeholder address for the native token of the current chain. By
/// convention this is `0xee...`. The same marker is used for MATIC, BNB, FTM
/// and AVAX on their respective chains.
pub const NATIVE_TOKEN_ADDRESS: Address = Address::repeat_byte(0xee);

/// True if the address is the native gas token marker.
pub const fn is_network_gas_token(address: Address) -> bool {
    address.const_eq(&NATIVE_TOKEN_ADDRESS)
}
