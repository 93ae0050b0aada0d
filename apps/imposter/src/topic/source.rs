//! Fallback-wrapping topic source used by the round engine.

use std::sync::LazyLock;

use rand::prelude::*;
use regex::Regex;
use tracing::{info, warn};

use super::{TopicError, TopicProvider};
use crate::domain::Topic;

/// Sampled when the provider answers with nothing usable.
pub const EMPTY_FALLBACK_TOPICS: [&str; 5] = ["Tesla", "Netflix", "ChatGPT", "Fortnite", "Starbucks"];
/// Sampled when the provider fails outright.
pub const ERROR_FALLBACK_TOPICS: [&str; 5] = ["Disney", "Amazon", "YouTube", "Apple", "Spotify"];
/// Used when the description lookup fails.
pub const GENERIC_DESCRIPTION: &str = "A popular entity or concept recently mentioned online.";
/// Used when the description lookup returns blank text.
pub const NO_DESCRIPTION: &str = "No specific description found.";

const MAX_DESCRIPTION_CHARS: usize = 200;

fn first_sentence() -> &'static Regex {
    static FIRST_SENTENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.]*\.").unwrap());
    &FIRST_SENTENCE
}

/// Reduce provider text to one short line.
///
/// The first sentence wins when it is longer than 10 and shorter than 200
/// characters; otherwise the first 200 characters are kept, newlines
/// flattened, with `...` appended.
pub fn clean_description(text: &str) -> String {
    if text.trim().is_empty() {
        return NO_DESCRIPTION.to_string();
    }

    if let Some(found) = first_sentence().find(text) {
        let sentence = found.as_str().trim();
        let len = sentence.chars().count();
        if len > 10 && len < MAX_DESCRIPTION_CHARS {
            return sentence.to_string();
        }
    }

    let chunk: String = text.chars().take(MAX_DESCRIPTION_CHARS).collect();
    format!("{}...", chunk.replace('\n', " ").trim())
}

/// Provider plus fallbacks. Never fails.
pub struct TopicSource {
    provider: Box<dyn TopicProvider>,
}

impl TopicSource {
    pub fn new(provider: Box<dyn TopicProvider>) -> Self {
        Self { provider }
    }

    /// Topic word, or a sampled fallback when the provider cannot supply one.
    pub fn topic_word<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let fallbacks = match self.provider.fetch_topic() {
            Ok(word) if !word.trim().is_empty() => return word.trim().to_string(),
            Ok(_) | Err(TopicError::Empty) => {
                warn!("topic provider returned nothing usable, using fallback topic");
                &EMPTY_FALLBACK_TOPICS
            }
            Err(e) => {
                warn!(error = %e, "topic provider failed, using fallback topic");
                &ERROR_FALLBACK_TOPICS
            }
        };
        fallbacks
            .choose(rng)
            .copied()
            .unwrap_or(EMPTY_FALLBACK_TOPICS[0])
            .to_string()
    }

    /// Cleaned one-line description, or the generic sentence on failure.
    pub fn description(&self, topic: &str) -> String {
        match self.provider.fetch_description(topic) {
            Ok(text) => clean_description(&text),
            Err(e) => {
                warn!(topic, error = %e, "description lookup failed, using generic description");
                GENERIC_DESCRIPTION.to_string()
            }
        }
    }

    /// Draw the round's topic and description.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Topic {
        let word = self.topic_word(rng);
        let description = self.description(&word);
        info!(topic = %word, "topic drawn");
        Topic::new(word, description)
    }
}
