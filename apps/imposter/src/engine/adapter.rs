//! Presentation seam between the round engine and whoever plays it.

use crate::domain::participant::{Participant, ParticipantId, Role};
use crate::domain::{Clue, RoundOutcome, Topic, VoteResolution, VoteTally};
use crate::error::AppError;
use crate::errors::domain::ValidationKind;

/// What a human may do on a clue turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueAction {
    Clue(String),
    /// Impostor only: name the topic.
    Guess(String),
    /// Insider only: ask for hint words.
    Help,
}

/// Snapshot handed to the adapter when a human must act during the clue phase.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    pub participant: ParticipantId,
    pub name: &'a str,
    pub role: Role,
    pub subround: u8,
    /// Only set for insiders.
    pub topic: Option<&'a Topic>,
    pub clues: &'a [Clue],
    /// Whether a guess is still available this turn.
    pub can_guess: bool,
}

/// Snapshot handed to the adapter when a human must vote.
#[derive(Debug, Clone, Copy)]
pub struct BallotView<'a> {
    pub voter: ParticipantId,
    pub name: &'a str,
    pub role: Role,
    pub participants: &'a [Participant],
    pub clues: &'a [Clue],
}

/// Everything the engine reports while a round runs, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum RoundEvent {
    /// Roles are dealt. Adapters decide who may see the topic.
    RoundStarted {
        participants: Vec<Participant>,
        topic: Topic,
    },
    SubroundStarted {
        subround: u8,
    },
    /// Automated participant is about to act.
    Thinking {
        participant: ParticipantId,
    },
    ClueAccepted(Clue),
    /// A human action broke a rule; the same participant is asked again.
    ActionRejected {
        participant: ParticipantId,
        kind: Option<ValidationKind>,
        reason: String,
    },
    GuessMissed {
        participant: ParticipantId,
        guess: String,
    },
    /// Shown to the insider who asked; the turn is not used up.
    Hints {
        participant: ParticipantId,
        words: Vec<String>,
    },
    VotingStarted {
        participants: Vec<Participant>,
        clues: Vec<Clue>,
    },
    VoteCast {
        voter: ParticipantId,
        target: ParticipantId,
    },
    VotesTallied {
        tally: VoteTally,
        resolution: VoteResolution,
    },
    Resolved(RoundOutcome),
}

/// Narrow interface the engine drives. Implemented by the console, the
/// simulator and test scripts.
pub trait RoundAdapter {
    /// Next action for a human clue turn. Called again after a rejection.
    fn get_clue(&mut self, view: &TurnView<'_>) -> Result<ClueAction, AppError>;

    /// Accusation target for a human voter. Called again after a rejection.
    fn get_vote(&mut self, view: &BallotView<'_>) -> Result<ParticipantId, AppError>;

    fn show_state(&mut self, event: &RoundEvent);
}
