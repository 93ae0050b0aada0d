//! Random AI player - role-blind baseline.
//!
//! [`RandomPlayer`] ignores its role: it says any usable word from all pools
//! and accuses any other participant. The round simulator pits it against
//! [`PoolPlayer`](super::PoolPlayer) to show what the role-aware policies add.

use std::sync::Mutex;

use rand::prelude::*;

use super::pools::{synthesize_word, usable, WordPools};
use super::trait_def::{AiError, AiPlayer, ClueContext, VoteContext};
use crate::domain::participant::ParticipantId;

pub struct RandomPlayer {
    pools: WordPools,
    /// Wrapped in `Mutex` since trait methods take `&self`.
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";

    /// `Some(seed)` for reproducible play, `None` for OS entropy.
    pub fn new(pools: WordPools, seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            pools,
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_clue(&self, ctx: &ClueContext<'_>) -> Result<String, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let vocabulary: Vec<String> = self
            .pools
            .insider
            .iter()
            .chain(&self.pools.impostor)
            .chain(&self.pools.generic)
            .cloned()
            .collect();
        let word = match usable(&vocabulary, ctx.topic_word, ctx.used).choose(&mut *rng) {
            Some(word) => (*word).clone(),
            None => synthesize_word(ctx.topic_word, ctx.used, &mut *rng),
        };
        Ok(word)
    }

    fn choose_vote(&self, ctx: &VoteContext<'_>) -> Result<ParticipantId, AiError> {
        let others = ctx.others();
        if others.is_empty() {
            return Err(AiError::InvalidMove("No other participant to accuse".into()));
        }

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        others
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random target".into()))
    }
}
