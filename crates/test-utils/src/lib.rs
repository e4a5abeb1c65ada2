//! Test helpers for the Gelato SDK crates: mock collaborators, a mocked
//! JSON-RPC reader, order fixtures and test accounts.

pub mod orders;
pub mod users;

pub use gelato_constants::test_utils as test_constants;

use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber filtered by `RUST_LOG`. Safe to call from
/// every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
