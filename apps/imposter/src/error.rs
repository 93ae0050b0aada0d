use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::topic::TopicError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: &'static str, detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Topic provider error: {0}")]
    Topic(#[from] TopicError),
    #[error("Input/output error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Input closed: {detail}")]
    InputClosed { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Stable machine-readable code for logs and metrics.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::Config { .. } => "CONFIG_ERROR",
            AppError::Topic(_) => "TOPIC_ERROR",
            AppError::Io(_) => "IO_ERROR",
            AppError::InputClosed { .. } => "INPUT_CLOSED",
            AppError::Internal { .. } => "INTERNAL",
        }
    }

    pub fn invalid(code: &'static str, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn input_closed(detail: impl Into<String>) -> Self {
        Self::InputClosed {
            detail: detail.into(),
        }
    }

    /// Whether the player's input source went away (EOF, broken pipe).
    pub fn is_input_closed(&self) -> bool {
        matches!(self, AppError::InputClosed { .. })
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => AppError::invalid(kind.as_str(), detail),
            DomainError::Invariant(detail) => {
                AppError::internal(format!("invariant violated: {detail}"))
            }
        }
    }
}
