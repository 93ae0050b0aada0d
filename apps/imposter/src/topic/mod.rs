//! Topic provider: where the secret word and its description come from.
//!
//! Providers may fail; [`TopicSource`] wraps one and always produces a
//! usable [`Topic`](crate::domain::Topic) by falling back to built-in values.

mod catalog;
mod source;
mod wikipedia;

pub use catalog::CatalogProvider;
pub use source::{
    clean_description, TopicSource, EMPTY_FALLBACK_TOPICS, ERROR_FALLBACK_TOPICS,
    GENERIC_DESCRIPTION, NO_DESCRIPTION,
};
pub use wikipedia::{accept_title, WikipediaProvider};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TopicError {
    /// The provider answered but nothing usable came back.
    #[error("provider returned no usable topic")]
    Empty,
    #[error("unknown topic '{0}'")]
    UnknownTopic(String),
    #[error("invalid provider url: {0}")]
    BadUrl(String),
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// External collaborator that supplies topics and descriptions.
pub trait TopicProvider: Send + Sync {
    /// A topic word or short phrase.
    fn fetch_topic(&self) -> Result<String, TopicError>;

    /// Raw descriptive text for `topic`. Cleanup happens in [`TopicSource`].
    fn fetch_description(&self, topic: &str) -> Result<String, TopicError>;
}
