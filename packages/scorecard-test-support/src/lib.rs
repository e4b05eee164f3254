//! Scorecard test support utilities
//!
//! Shared helpers for the scorecard integration tests: unified logging
//! initialization and the project-wide proptest configuration.

pub mod proptest_config;
pub mod test_logging;

pub use proptest_config::proptest_prelude_config;
