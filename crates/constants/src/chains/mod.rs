/// Test utilities for chains.
pub mod test_utils;
