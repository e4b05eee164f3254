//! Logging for integration test binaries.
//!
//! Same rules as the crate's unit-test bootstrap: `TEST_LOG`, then
//! `RUST_LOG`, then `"warn"`.

/// Runs once per integration test binary before any test.
#[ctor::ctor]
fn _auto_init_for_integration_tests() {
    scorecard_test_support::test_logging::init();
}
