use serde::{Deserialize, Serialize};

/// The secret word for a round and its one-sentence description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    word: String,
    description: String,
}

impl Topic {
    pub fn new(word: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            word: word.into().trim().to_string(),
            description: description.into().trim().to_string(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Case-insensitive comparison against the topic word.
    pub fn matches(&self, text: &str) -> bool {
        text.trim().to_lowercase() == self.word.to_lowercase()
    }
}
