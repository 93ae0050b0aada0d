//! Test support utilities for the imposter workspace.
//!
//! Integration tests install logging through this crate so that every test
//! binary shares the same subscriber configuration.

pub mod logging;
