//! Test logging shared by unit and integration tests.
//!
//! The `imposter` crate calls [`init`] from a `ctor` hook in its library root,
//! and every integration test binary does the same from `tests/support`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

/// Level used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LEVEL: &str = "warn";

static INITIALIZED: OnceCell<()> = OnceCell::new();

fn filter_from_env() -> EnvFilter {
    ["TEST_LOG", "RUST_LOG"]
        .into_iter()
        .find_map(|var| std::env::var(var).ok())
        .map(EnvFilter::new)
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install a compact subscriber captured by the test harness.
///
/// Safe to call from every test; only the first call does anything.
///
/// ```bash
/// TEST_LOG=imposter=debug cargo test -p imposter
/// ```
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(filter_from_env())
            .with_test_writer()
            .without_time()
            .with_target(false)
            .compact()
            .try_init()
            .ok(); // another subscriber may already be installed
    });
}
