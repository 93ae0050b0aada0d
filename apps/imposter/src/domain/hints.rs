//! Hint extraction for insiders who ask for help.
//!
//! Hints are drawn from the topic description: punctuation is stripped, the
//! text is lower-cased and split on whitespace, short tokens and the topic
//! itself are dropped, and the survivors are capitalized and de-duplicated.
//! Exactly [`HINT_COUNT`] words are always returned; filler words make up any
//! shortfall.

use std::sync::LazyLock;

use rand::prelude::*;
use regex::Regex;

use crate::domain::rules::{HINT_COUNT, MIN_HINT_LEN};

fn punctuation() -> &'static Regex {
    // Literal pattern; compiles unconditionally.
    static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());
    &PUNCTUATION
}

/// Upper-case the first letter, lower-case the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Candidate hint words in order of first appearance.
pub fn description_words(description: &str, topic_word: &str) -> Vec<String> {
    let cleaned = punctuation().replace_all(description, "").to_lowercase();
    let topic_lower = topic_word.trim().to_lowercase();

    let mut words: Vec<String> = Vec::new();
    for token in cleaned.split_whitespace() {
        if token == topic_lower || token.chars().count() < MIN_HINT_LEN {
            continue;
        }
        let word = capitalize(token);
        if !words.contains(&word) {
            words.push(word);
        }
    }
    words
}

/// Pick exactly [`HINT_COUNT`] distinct capitalized hint words.
pub fn extract_hints<R: Rng + ?Sized>(
    description: &str,
    topic_word: &str,
    filler: &[String],
    rng: &mut R,
) -> Vec<String> {
    let candidates = description_words(description, topic_word);

    if candidates.len() > HINT_COUNT {
        return candidates
            .choose_multiple(rng, HINT_COUNT)
            .cloned()
            .collect();
    }

    let topic_lower = topic_word.trim().to_lowercase();
    let mut hints = candidates;
    let missing = HINT_COUNT - hints.len();
    let spare: Vec<String> = filler
        .iter()
        .map(|w| capitalize(w.trim()))
        .filter(|w| !w.is_empty() && w.to_lowercase() != topic_lower)
        .filter(|w| !hints.contains(w))
        .fold(Vec::new(), |mut acc, w| {
            if !acc.contains(&w) {
                acc.push(w);
            }
            acc
        });
    hints.extend(spare.choose_multiple(rng, missing).cloned());

    let mut n = 1;
    while hints.len() < HINT_COUNT {
        let word = format!("Hint{n}");
        if !hints.contains(&word) {
            hints.push(word);
        }
        n += 1;
    }
    hints
}
