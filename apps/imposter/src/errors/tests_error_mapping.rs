// Unit tests for error mapping - pure domain errors into AppError
use crate::ai::AiError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::topic::TopicError;
use crate::AppError;

#[test]
fn maps_validation_kind_to_code() {
    let de = DomainError::validation(ValidationKind::SelfVote, "You cannot vote for yourself (1).");
    let app: AppError = de.into();
    assert_eq!(app.code(), "SELF_VOTE");
    assert_eq!(
        app.to_string(),
        "Validation error: You cannot vote for yourself (1)."
    );
}

#[test]
fn maps_invariant_to_internal() {
    let app: AppError = DomainError::invariant("turn must be set").into();
    assert_eq!(app.code(), "INTERNAL");
    assert!(app.to_string().contains("turn must be set"));
}

#[test]
fn maps_ai_error_to_internal() {
    let app: AppError = AiError::InvalidMove("no target".into()).into();
    assert_eq!(app.code(), "INTERNAL");
    assert!(app.to_string().contains("AI invalid move: no target"));
}

#[test]
fn maps_topic_error() {
    let app: AppError = TopicError::Empty.into();
    assert_eq!(app.code(), "TOPIC_ERROR");
}

#[test]
fn maps_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
    let app: AppError = io.into();
    assert_eq!(app.code(), "IO_ERROR");
    assert!(!app.is_input_closed());
    assert!(AppError::input_closed("stdin").is_input_closed());
}

#[test]
fn every_validation_code_is_unique() {
    let kinds = [
        ValidationKind::NotOneWord,
        ValidationKind::TopicWord,
        ValidationKind::WordAlreadyUsed,
        ValidationKind::GuessNotAllowed,
        ValidationKind::GuessAlreadyUsed,
        ValidationKind::HelpNotAllowed,
        ValidationKind::SelfVote,
        ValidationKind::VoteOutOfRange,
        ValidationKind::OutOfTurn,
        ValidationKind::PhaseMismatch,
        ValidationKind::TooFewParticipants,
        ValidationKind::ImpostorOutOfRange,
        ValidationKind::Other,
    ];
    let codes: std::collections::HashSet<&str> = kinds.iter().map(|k| k.as_str()).collect();
    assert_eq!(codes.len(), kinds.len());
}
