//! AI configuration handling.

/// Standard configuration for AI players.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AiConfig {
    /// Optional RNG seed for deterministic AI behavior.
    pub seed: Option<u64>,
}

impl AiConfig {
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Seed offset for one of several players.
    ///
    /// Keeps automated players sharing a base seed from making identical
    /// choices.
    pub fn for_seat(&self, seat: usize) -> Self {
        Self {
            seed: self.seed.map(|s| s.wrapping_add(seat as u64)),
        }
    }
}
