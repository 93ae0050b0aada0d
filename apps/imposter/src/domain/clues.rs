//! Clue log, used-word bookkeeping and clue validation.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::participant::ParticipantId;
use crate::domain::topic::Topic;
use crate::errors::domain::{DomainError, ValidationKind};

/// One accepted clue. Never mutated once logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clue {
    pub participant: ParticipantId,
    pub name: String,
    pub word: String,
    /// 1-based subround the clue was given in.
    pub subround: u8,
}

/// Lower-cased words already spoken this round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedWords(BTreeSet<String>);

impl UsedWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.contains(&word.to_lowercase())
    }

    /// Returns false if the word was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        self.0.insert(word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for UsedWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut used = UsedWords::new();
        for word in iter {
            used.insert(word.as_ref());
        }
        used
    }
}

/// Validate a clue against the round rules and return the accepted token.
///
/// The same rules apply to human and automated clues: exactly one token, not
/// the topic word, not already used (all case-insensitive).
pub fn validate_clue(raw: &str, topic: &Topic, used: &UsedWords) -> Result<String, DomainError> {
    let mut tokens = raw.split_whitespace();
    let word = match (tokens.next(), tokens.next()) {
        (Some(word), None) => word,
        _ => {
            return Err(DomainError::validation(
                ValidationKind::NotOneWord,
                "You must enter exactly ONE word.",
            ))
        }
    };

    if topic.matches(word) {
        return Err(DomainError::validation(
            ValidationKind::TopicWord,
            "You cannot say the secret word!",
        ));
    }

    if used.contains(word) {
        return Err(DomainError::validation(
            ValidationKind::WordAlreadyUsed,
            format!("The word '{word}' has already been used this round."),
        ));
    }

    Ok(word.to_string())
}

/// Convenience check used by the automated policies.
pub fn is_valid_clue(raw: &str, topic_word: &str, used: &UsedWords) -> bool {
    let topic = Topic::new(topic_word, "");
    validate_clue(raw, &topic, used).is_ok()
}
