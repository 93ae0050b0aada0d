//! Error handling for the imposter game.

pub mod domain;

#[cfg(test)]
mod tests_error_mapping;

pub use domain::{DomainError, ValidationKind};
