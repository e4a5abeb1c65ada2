//! Gelato limit-order subgraph client.
//!
//! Queries the order history of an owner from the subgraph that indexes the
//! limit orders core, and classifies it into open, cancelled, executed and
//! expired orders.

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

mod client;
pub use client::SubgraphClient;

mod error;
pub use error::SubgraphError;

mod history;
pub use history::OrderHistory;

/// GraphQL request and response types.
pub mod types;

/// Result type for [`SubgraphClient`] operations.
pub type Result<T> = std::result::Result<T, SubgraphError>;
