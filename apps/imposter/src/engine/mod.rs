//! Round driver, adapter seam and lineup helpers.

mod adapter;
pub mod lineup;
mod round_engine;

pub use adapter::{BallotView, ClueAction, RoundAdapter, RoundEvent, TurnView};
pub use round_engine::{RoundEngine, RoundReport};

use crate::ai::{create_ai, AiConfig};
use crate::config::{GameConfig, TopicSourceKind};
use crate::error::AppError;
use crate::topic::{CatalogProvider, TopicProvider, TopicSource, WikipediaProvider};

/// Topic source selected by configuration.
pub fn topic_source_from_config(config: &GameConfig) -> Result<TopicSource, AppError> {
    let provider: Box<dyn TopicProvider> = match config.topic_source {
        TopicSourceKind::Wikipedia => Box::new(WikipediaProvider::new(
            &config.topic_url,
            config.topic_timeout,
            config.topic_attempts,
        )?),
        TopicSourceKind::Offline => Box::new(CatalogProvider::new(config.seed)),
    };
    Ok(TopicSource::new(provider))
}

/// Engine with pool AIs for both roles, wired from configuration.
pub fn engine_from_config(config: &GameConfig) -> Result<RoundEngine, AppError> {
    let base = AiConfig { seed: config.seed };
    let pools = &config.word_pools;
    let insider_ai = create_ai("pool", pools, &base.for_seat(1))
        .ok_or_else(|| AppError::internal("pool AI unavailable"))?;
    let impostor_ai = create_ai("pool", pools, &base.for_seat(2))
        .ok_or_else(|| AppError::internal("pool AI unavailable"))?;

    Ok(RoundEngine::new(
        topic_source_from_config(config)?,
        insider_ai,
        impostor_ai,
        pools.filler.clone(),
        config.seed,
    ))
}
