//! AI player module - automated clue and vote decisions.
//!
//! This module provides:
//! - AI trait and the views it decides from
//! - PoolPlayer: role-aware clue and vote policies
//! - RandomPlayer: role-blind baseline (seedable for tests)
//! - Word pools shared by the policies and the hint extractor

mod config;
mod pool;
mod pools;
mod random;
mod trait_def;

pub use config::AiConfig;
pub use pool::PoolPlayer;
pub use pools::{synthesize_word, WordPools};
pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer, ClueContext, VoteContext};

/// AI types accepted by [`create_ai`].
pub const AI_TYPES: [&str; 2] = ["pool", "random"];

/// Create an AI player from an ai_type string.
///
/// Currently supports:
/// - "pool": PoolPlayer
/// - "random": RandomPlayer
///
/// Returns None if ai_type is unrecognized.
pub fn create_ai(ai_type: &str, pools: &WordPools, config: &AiConfig) -> Option<Box<dyn AiPlayer>> {
    match ai_type {
        "pool" => Some(Box::new(PoolPlayer::new(pools.clone(), config.seed()))),
        "random" => Some(Box::new(RandomPlayer::new(pools.clone(), config.seed()))),
        _ => None,
    }
}
