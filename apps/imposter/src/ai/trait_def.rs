//! AI player trait definition.

use std::fmt;

use crate::domain::clues::UsedWords;
use crate::domain::participant::{Participant, ParticipantId, Role};
use crate::error::AppError;

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI produced an invalid move
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("AI error: {err}"))
    }
}

/// What an automated participant sees when it must give a clue.
#[derive(Debug, Clone, Copy)]
pub struct ClueContext<'a> {
    pub name: &'a str,
    pub role: Role,
    /// Secret word. Impostor policies may only use it to avoid saying it.
    pub topic_word: &'a str,
    pub used: &'a UsedWords,
}

/// What an automated participant sees when it must vote.
#[derive(Debug, Clone, Copy)]
pub struct VoteContext<'a> {
    pub participants: &'a [Participant],
    pub impostor: ParticipantId,
    pub voter: ParticipantId,
}

impl VoteContext<'_> {
    pub fn voter_role(&self) -> Option<Role> {
        self.participants.get(self.voter).map(Participant::role)
    }

    /// Every index except the voter's own.
    pub fn others(&self) -> Vec<ParticipantId> {
        (0..self.participants.len())
            .filter(|&i| i != self.voter)
            .collect()
    }
}

/// Trait for AI players.
///
/// Implementations must return a clue that passes the round's clue rules and
/// a vote target other than the voter. The engine validates both anyway and
/// falls back on its own when an AI misbehaves.
pub trait AiPlayer: Send + Sync {
    /// Choose a one-word clue.
    fn choose_clue(&self, ctx: &ClueContext<'_>) -> Result<String, AiError>;

    /// Choose the participant to accuse.
    fn choose_vote(&self, ctx: &VoteContext<'_>) -> Result<ParticipantId, AiError>;
}
