//! Gelato Stop-Limit Orders Library
//!
//! Contains the order encoding and pricing core for placing and cancelling
//! Gelato stop-limit orders: order key derivation, calldata builders for
//! both deposit paths, cancellation encoding, and fee and slippage
//! arithmetic. Nothing here signs or broadcasts; every builder returns an
//! unsigned [`TransactionData`].
//!
//! [`TransactionData`]: gelato_types::TransactionData

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

mod encoding;
pub use encoding::{
    encode_deposit_eth, encode_deposit_token, encode_eth_order, encode_output_constraints,
    SubmissionStrategy,
};

mod error;
pub use error::OrderError;

mod impls;
pub use impls::{NoProvider, RpcReader};

mod key;
pub use key::{order_key, OrderKey};

mod math;
pub use math::{
    adjusted_min_return, exchange_rate, execution_price, fee_and_slippage_adjusted_min_return,
    MinReturn,
};

mod stop_limit;
pub use stop_limit::{StopLimitOrders, StopLimitParams, SubmissionParams};

mod traits;
pub use traits::{AllowanceSource, OrderRegistry};
