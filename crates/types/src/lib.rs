//! Order, transaction and secret types used throughout the Gelato SDK.

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
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod config;
pub use config::{
    load_address, load_string, load_string_opt, load_u16, load_u16_opt, load_u64, load_url,
    load_url_opt, ConfigError, GelatoConstants, Handler, NATIVE_TOKEN_ADDRESS,
};

mod order;
pub use order::{Order, OrderStatus, StopLimitOrder};

pub mod serde_helpers;

mod transaction;
pub use transaction::{TransactionData, TransactionDataWithSecret};

mod witness;
pub use witness::WitnessAndSecret;
