//! Topics from random Wikipedia article summaries.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use reqwest::blocking::Client;
use reqwest::Url;
use serde::Deserialize;
use tracing::debug;

use super::{TopicError, TopicProvider};

#[derive(Debug, Deserialize)]
struct PageSummary {
    title: String,
    #[serde(default)]
    extract: String,
}

fn parenthetical() -> &'static Regex {
    static PARENTHETICAL: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"\s*\([^)]*\)").unwrap());
    &PARENTHETICAL
}

/// Keep short, specific titles: qualifiers like "(film)" removed, fewer than
/// three words, more than three characters.
pub fn accept_title(title: &str) -> Option<String> {
    let cleaned = parenthetical().replace_all(title, "");
    let cleaned = cleaned.trim();
    let words = cleaned.split_whitespace().count();
    if words > 0 && words < 3 && cleaned.chars().count() > 3 {
        Some(cleaned.to_string())
    } else {
        None
    }
}

/// Blocking client for the Wikipedia REST summary endpoints.
pub struct WikipediaProvider {
    client: Client,
    base_url: Url,
    attempts: u32,
}

impl WikipediaProvider {
    pub fn new(base_url: &str, timeout: Duration, attempts: u32) -> Result<Self, TopicError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("imposter/", env!("CARGO_PKG_VERSION")))
            .build()?;
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| TopicError::BadUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(TopicError::BadUrl(base_url.to_string()));
        }
        Ok(Self {
            client,
            base_url,
            attempts: attempts.max(1),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, TopicError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TopicError::BadUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn summary(&self, url: Url) -> Result<PageSummary, TopicError> {
        let summary = self
            .client
            .get(url)
            .send()?
            .error_for_status()?
            .json::<PageSummary>()?;
        Ok(summary)
    }
}

impl TopicProvider for WikipediaProvider {
    fn fetch_topic(&self) -> Result<String, TopicError> {
        let url = self.endpoint(&["page", "random", "summary"])?;
        for attempt in 1..=self.attempts {
            let summary = self.summary(url.clone())?;
            if let Some(topic) = accept_title(&summary.title) {
                return Ok(topic);
            }
            debug!(attempt, title = %summary.title, "skipping unsuitable topic title");
        }
        Err(TopicError::Empty)
    }

    fn fetch_description(&self, topic: &str) -> Result<String, TopicError> {
        let page = topic.trim().replace(' ', "_");
        let url = self.endpoint(&["page", "summary", &page])?;
        Ok(self.summary(url)?.extract)
    }
}
