//! Engine builders and misbehaving collaborators.

use imposter::ai::{create_ai, AiConfig, AiError, AiPlayer, ClueContext, VoteContext, WordPools};
use imposter::engine::RoundEngine;
use imposter::topic::{CatalogProvider, TopicError, TopicProvider, TopicSource};

pub const NETFLIX_DESCRIPTION: &str = "A popular streaming platform for movies.";

/// Catalogue holding only Netflix, so tests know the topic up front.
pub fn netflix_only() -> TopicSource {
    TopicSource::new(Box::new(CatalogProvider::with_entries(
        vec![("Netflix".to_string(), NETFLIX_DESCRIPTION.to_string())],
        Some(0),
    )))
}

pub fn engine_with(
    topics: TopicSource,
    insider_ai: Box<dyn AiPlayer>,
    impostor_ai: Box<dyn AiPlayer>,
    seed: u64,
) -> RoundEngine {
    RoundEngine::new(
        topics,
        insider_ai,
        impostor_ai,
        WordPools::default().filler,
        Some(seed),
    )
}

/// Offline catalogue with the named AI type for both roles.
pub fn catalog_engine(ai_type: &str, seed: u64) -> RoundEngine {
    let pools = WordPools::default();
    let base = AiConfig::with_seed(seed);
    engine_with(
        TopicSource::new(Box::new(CatalogProvider::new(Some(seed)))),
        create_ai(ai_type, &pools, &base.for_seat(1)).expect("known ai type"),
        create_ai(ai_type, &pools, &base.for_seat(2)).expect("known ai type"),
        seed,
    )
}

/// AI whose every decision fails.
pub struct FailingAi;

impl AiPlayer for FailingAi {
    fn choose_clue(&self, _ctx: &ClueContext<'_>) -> Result<String, AiError> {
        Err(AiError::Internal("no idea".into()))
    }

    fn choose_vote(&self, _ctx: &VoteContext<'_>) -> Result<usize, AiError> {
        Err(AiError::Internal("no idea".into()))
    }
}

/// AI that always answers with illegal moves: the topic word and itself.
pub struct StubbornAi;

impl AiPlayer for StubbornAi {
    fn choose_clue(&self, ctx: &ClueContext<'_>) -> Result<String, AiError> {
        Ok(ctx.topic_word.to_string())
    }

    fn choose_vote(&self, ctx: &VoteContext<'_>) -> Result<usize, AiError> {
        Ok(ctx.voter)
    }
}

/// Provider that is always down.
pub struct FailingProvider;

impl TopicProvider for FailingProvider {
    fn fetch_topic(&self) -> Result<String, TopicError> {
        Err(TopicError::BadUrl("offline".into()))
    }

    fn fetch_description(&self, topic: &str) -> Result<String, TopicError> {
        Err(TopicError::UnknownTopic(topic.to_string()))
    }
}
