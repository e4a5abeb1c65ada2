//! Contract bindings for the Gelato limit-order protocol.
//!
//! The ABIs here are those of the deployed limit orders core, the ERC20
//! order router, and the standard ERC20 token interface. They are an
//! external contract and must not drift from the deployed bytecode.

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

mod bindings;
pub use bindings::{ERC20OrderRouter, GelatoLimitOrders, IERC20};
