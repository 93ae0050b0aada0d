//! Word pools handed to the automated policies.

use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::domain::clues::is_valid_clue;
use crate::domain::participant::Role;
use crate::domain::UsedWords;
use crate::error::AppError;

const INSIDER_WORDS: &[&str] = &[
    "Digital",
    "Social",
    "Video",
    "Global",
    "Fashion",
    "Tech",
    "Food",
    "Sport",
    "Stream",
    "Trendy",
    "Viral",
    "Modern",
    "Iconic",
    "Online",
    "Casual",
    "Luxury",
    "Creative",
    "Experience",
    "Service",
    "Platform",
    "Entertainment",
    "Fast",
    "Popular",
];

const IMPOSTOR_WORDS: &[&str] = &[
    "Product", "Concept", "Thing", "Place", "Service", "Company", "Media", "Item", "Expensive",
    "Famous", "Blue", "Yellow", "Red", "Green", "Big", "Small", "Abstract", "Object", "Noun",
    "Business", "Name", "Idea", "Culture",
];

const GENERIC_WORDS: &[&str] = &[
    "Great", "Cool", "Fun", "Shiny", "New", "Old", "Everyday", "Unique",
];

const FILLER_WORDS: &[&str] = &["Internet", "Popular", "Famous", "Recent", "Concept", "Brand"];

/// Immutable vocabulary for automated clues and hint padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordPools {
    /// Vague-but-related words for players who know the topic.
    pub insider: Vec<String>,
    /// Safe generic words for the impostor.
    pub impostor: Vec<String>,
    /// Last resort when a role pool is used up.
    pub generic: Vec<String>,
    /// Padding for hint extraction.
    pub filler: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl Default for WordPools {
    fn default() -> Self {
        Self {
            insider: owned(INSIDER_WORDS),
            impostor: owned(IMPOSTOR_WORDS),
            generic: owned(GENERIC_WORDS),
            filler: owned(FILLER_WORDS),
        }
    }
}

impl WordPools {
    /// Load pools from a JSON file. Missing keys keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("cannot read word pools {}: {e}", path.display()))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            AppError::config(format!("invalid word pools {}: {e}", path.display()))
        })
    }

    pub fn for_role(&self, role: Role) -> &[String] {
        match role {
            Role::Insider => &self.insider,
            Role::Impostor => &self.impostor,
        }
    }
}

/// Pool entries that would be accepted as clues right now.
pub fn usable<'p>(pool: &'p [String], topic_word: &str, used: &UsedWords) -> Vec<&'p String> {
    pool.iter()
        .filter(|w| is_valid_clue(w, topic_word, used))
        .collect()
}

/// Emergency clue `Word<NNN>`: random three-digit start, stepped until unused.
pub fn synthesize_word<R: Rng + ?Sized>(topic_word: &str, used: &UsedWords, rng: &mut R) -> String {
    let mut n: u32 = rng.random_range(100..=999);
    loop {
        let word = format!("Word{n}");
        if is_valid_clue(&word, topic_word, used) {
            return word;
        }
        n += 1;
    }
}
