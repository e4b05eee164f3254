#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod bin_support;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::Config;
pub use domain::{DerivedRound, Field, GameSession, GameSummary, Leader, Round, SessionSnapshot, Team};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
