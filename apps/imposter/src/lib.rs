#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod console;
pub mod domain;
pub mod engine;
pub mod error;
pub mod errors;
pub mod topic;

// Re-exports for public API
pub use config::GameConfig;
pub use engine::{RoundAdapter, RoundEngine, RoundEvent, RoundReport};
pub use error::AppError;
pub use errors::{DomainError, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    imposter_test_support::logging::init();
}
