//! Game configuration from `IMPOSTER_*` environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::ai::WordPools;
use crate::error::AppError;

pub const DEFAULT_TOPIC_URL: &str = "https://en.wikipedia.org/api/rest_v1";
const DEFAULT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_ATTEMPTS: u32 = 3;

/// Where round topics come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicSourceKind {
    /// Random Wikipedia articles over HTTP.
    Wikipedia,
    /// Built-in catalogue, no network.
    Offline,
}

impl FromStr for TopicSourceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wikipedia" => Ok(TopicSourceKind::Wikipedia),
            "offline" => Ok(TopicSourceKind::Offline),
            other => Err(AppError::config(format!(
                "IMPOSTER_TOPIC_SOURCE must be 'wikipedia' or 'offline' (got '{other}')"
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub topic_source: TopicSourceKind,
    pub topic_url: String,
    pub topic_timeout: Duration,
    pub topic_attempts: u32,
    /// Base seed for reproducible rounds.
    pub seed: Option<u64>,
    pub word_pools: WordPools,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            topic_source: TopicSourceKind::Wikipedia,
            topic_url: DEFAULT_TOPIC_URL.to_string(),
            topic_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            topic_attempts: DEFAULT_ATTEMPTS,
            seed: None,
            word_pools: WordPools::default(),
        }
    }
}

impl GameConfig {
    /// Read configuration from the environment. Unset variables keep defaults;
    /// set but invalid ones are an error.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let topic_source = match opt_var("IMPOSTER_TOPIC_SOURCE") {
            Some(v) => v.parse()?,
            None => defaults.topic_source,
        };
        let topic_url = opt_var("IMPOSTER_TOPIC_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or(defaults.topic_url);
        let topic_timeout = parse_var::<u64>("IMPOSTER_TOPIC_TIMEOUT_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.topic_timeout);
        let topic_attempts =
            parse_var::<u32>("IMPOSTER_TOPIC_ATTEMPTS")?.unwrap_or(defaults.topic_attempts);
        if topic_attempts == 0 {
            return Err(AppError::config("IMPOSTER_TOPIC_ATTEMPTS must be at least 1"));
        }
        let seed = parse_var::<u64>("IMPOSTER_SEED")?;
        let word_pools = match opt_var("IMPOSTER_WORD_POOLS") {
            Some(path) => WordPools::from_json_file(&PathBuf::from(path))?,
            None => defaults.word_pools,
        };

        Ok(Self {
            topic_source,
            topic_url,
            topic_timeout,
            topic_attempts,
            seed,
            word_pools,
        })
    }
}

/// Set and non-blank environment variable.
fn opt_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match opt_var(name) {
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!("Environment variable '{name}' has invalid value '{raw}'"))
        }),
        None => Ok(None),
    }
}
