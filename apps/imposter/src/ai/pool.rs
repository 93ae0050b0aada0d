//! Pool-based AI: the role-aware clue and vote policies.
//!
//! Clues come from the role's word pool. Insiders skip words that share the
//! topic's first letter so they do not give the answer away; impostors draw
//! from a pool of safe generic words. When the role pool is used up the
//! generic pool is tried, and as a last resort a `Word<NNN>` token is made up.
//!
//! Votes: insiders accuse anyone else uniformly (they are not told who the
//! impostor is, so this can land on the impostor). The impostor accuses an
//! insider.

use std::sync::Mutex;

use rand::prelude::*;
use tracing::warn;

use super::pools::{synthesize_word, usable, WordPools};
use super::trait_def::{AiError, AiPlayer, ClueContext, VoteContext};
use crate::domain::participant::{ParticipantId, Role};

pub struct PoolPlayer {
    pools: WordPools,
    rng: Mutex<StdRng>,
}

impl PoolPlayer {
    pub const NAME: &'static str = "PoolPlayer";

    pub fn new(pools: WordPools, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            pools,
            rng: Mutex::new(rng),
        }
    }

    fn role_candidates<'p>(&'p self, ctx: &ClueContext<'_>) -> Vec<&'p String> {
        let pool = self.pools.for_role(ctx.role);
        let candidates = usable(pool, ctx.topic_word, ctx.used);
        match (ctx.role, first_letter(ctx.topic_word)) {
            (Role::Insider, Some(initial)) => candidates
                .into_iter()
                .filter(|w| first_letter(w) != Some(initial))
                .collect(),
            _ => candidates,
        }
    }
}

fn first_letter(word: &str) -> Option<char> {
    word.trim()
        .chars()
        .next()
        .and_then(|c| c.to_lowercase().next())
}

impl AiPlayer for PoolPlayer {
    fn choose_clue(&self, ctx: &ClueContext<'_>) -> Result<String, AiError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        if let Some(word) = self.role_candidates(ctx).choose(&mut *rng) {
            return Ok((*word).clone());
        }

        let generic = usable(&self.pools.generic, ctx.topic_word, ctx.used);
        if let Some(word) = generic.choose(&mut *rng) {
            return Ok((*word).clone());
        }

        let word = synthesize_word(ctx.topic_word, ctx.used, &mut *rng);
        warn!(participant = ctx.name, %word, "word pools exhausted, using emergency clue");
        Ok(word)
    }

    fn choose_vote(&self, ctx: &VoteContext<'_>) -> Result<ParticipantId, AiError> {
        let role = ctx
            .voter_role()
            .ok_or_else(|| AiError::InvalidMove(format!("voter {} not in lineup", ctx.voter)))?;
        let others = ctx.others();

        let targets = match role {
            Role::Insider => others,
            Role::Impostor => {
                let insiders: Vec<ParticipantId> = others
                    .iter()
                    .copied()
                    .filter(|&i| i != ctx.impostor)
                    .collect();
                if insiders.is_empty() {
                    others
                } else {
                    insiders
                }
            }
        };

        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;
        targets
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::InvalidMove("No other participant to accuse".into()))
    }
}
