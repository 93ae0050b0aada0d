//! Domain-level error type used by the round state machine and its callers.
//!
//! This error type is presentation-agnostic. Adapters decide how a rejection
//! is shown; the round itself is never left in a partially-applied state when
//! one of these is returned.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation error kinds for rejected player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Clue was empty or contained more than one token.
    NotOneWord,
    /// Clue matched the secret topic.
    TopicWord,
    /// Clue was already spoken this round.
    WordAlreadyUsed,
    /// Only the impostor may guess.
    GuessNotAllowed,
    /// The impostor already guessed during this turn.
    GuessAlreadyUsed,
    /// Only insiders may ask for hints.
    HelpNotAllowed,
    /// Voter accused themselves.
    SelfVote,
    /// Vote target does not exist.
    VoteOutOfRange,
    /// Action came from someone other than the participant whose turn it is.
    OutOfTurn,
    /// Action does not belong to the current phase.
    PhaseMismatch,
    /// Lineup is too small for a meaningful round.
    TooFewParticipants,
    /// Impostor seat is not part of the lineup.
    ImpostorOutOfRange,
    Other,
}

impl ValidationKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValidationKind::NotOneWord => "NOT_ONE_WORD",
            ValidationKind::TopicWord => "TOPIC_WORD",
            ValidationKind::WordAlreadyUsed => "WORD_ALREADY_USED",
            ValidationKind::GuessNotAllowed => "GUESS_NOT_ALLOWED",
            ValidationKind::GuessAlreadyUsed => "GUESS_ALREADY_USED",
            ValidationKind::HelpNotAllowed => "HELP_NOT_ALLOWED",
            ValidationKind::SelfVote => "SELF_VOTE",
            ValidationKind::VoteOutOfRange => "VOTE_OUT_OF_RANGE",
            ValidationKind::OutOfTurn => "OUT_OF_TURN",
            ValidationKind::PhaseMismatch => "PHASE_MISMATCH",
            ValidationKind::TooFewParticipants => "TOO_FEW_PARTICIPANTS",
            ValidationKind::ImpostorOutOfRange => "IMPOSTOR_OUT_OF_RANGE",
            ValidationKind::Other => "VALIDATION_ERROR",
        }
    }
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A player action or setup request broke a game rule
    Validation(ValidationKind, String),
    /// Internal bookkeeping disagreed with itself
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(_, d) => write!(f, "{d}"),
            DomainError::Invariant(d) => write!(f, "invariant violated: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other, detail.into())
    }

    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// Validation kind, if this is a validation failure.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Invariant(_) => None,
        }
    }
}
