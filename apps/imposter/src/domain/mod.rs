//! Domain layer: pure round logic types and helpers.

pub mod clues;
pub mod hints;
pub mod outcome;
pub mod participant;
pub mod rules;
pub mod setup;
pub mod state;
pub mod topic;
pub mod turns;
pub mod voting;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_clues;
#[cfg(test)]
mod tests_props_round;
#[cfg(test)]
mod tests_round;
#[cfg(test)]
mod tests_voting;

// Re-exports for ergonomics
pub use clues::{is_valid_clue, validate_clue, Clue, UsedWords};
pub use hints::extract_hints;
pub use outcome::{OutcomeKind, RoundOutcome};
pub use participant::{Participant, ParticipantId, ParticipantKind, Role, Seat};
pub use setup::{assign_roles, pick_impostor};
pub use state::{Phase, RoundState};
pub use topic::Topic;
pub use turns::{authorize_hints, submit_clue, submit_guess, ClueResult, GuessResult};
pub use voting::{cast_vote, resolve_tally, VoteResolution, VoteResult, VoteTally};
