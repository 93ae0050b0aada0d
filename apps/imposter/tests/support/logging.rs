//! Logging for integration test binaries.
//!
//! Level precedence matches the crate's unit tests: `TEST_LOG`, then
//! `RUST_LOG`, then `"warn"`.

#[ctor::ctor]
fn _auto_init_for_integration_tests() {
    imposter_test_support::logging::init();
}
