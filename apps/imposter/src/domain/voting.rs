//! Vote tallying and elimination resolution.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::domain::outcome::{OutcomeKind, RoundOutcome};
use crate::domain::participant::ParticipantId;
use crate::domain::state::{require_actor, Phase, RoundState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Votes received per participant index. Built fresh for each vote phase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    counts: BTreeMap<ParticipantId, u32>,
}

impl VoteTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally from raw accusation targets.
    pub fn from_targets(targets: impl IntoIterator<Item = ParticipantId>) -> Self {
        let mut tally = Self::new();
        for target in targets {
            tally.record(target);
        }
        tally
    }

    /// Tally from explicit `(index, count)` pairs. Zero counts are dropped.
    pub fn from_counts(counts: impl IntoIterator<Item = (ParticipantId, u32)>) -> Self {
        Self {
            counts: counts.into_iter().filter(|(_, c)| *c > 0).collect(),
        }
    }

    pub fn record(&mut self, target: ParticipantId) {
        *self.counts.entry(target).or_insert(0) += 1;
    }

    pub fn count(&self, target: ParticipantId) -> u32 {
        self.counts.get(&target).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn max_count(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Indices holding the maximum count, ascending.
    pub fn leaders(&self) -> Vec<ParticipantId> {
        let max = self.max_count();
        if max == 0 {
            return Vec::new();
        }
        self.counts
            .iter()
            .filter(|(_, &c)| c == max)
            .map(|(&id, _)| id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParticipantId, u32)> + '_ {
        self.counts.iter().map(|(&id, &c)| (id, c))
    }
}

/// What the tally says about elimination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteResolution {
    /// Nobody voted. Treated as a tie.
    NoVotes,
    /// The top count is shared; nobody is eliminated.
    Tie {
        leaders: Vec<ParticipantId>,
        votes: u32,
    },
    /// A single participant holds the top count and is voted out.
    Accused {
        participant: ParticipantId,
        votes: u32,
    },
}

impl VoteResolution {
    pub fn eliminated(&self) -> Option<ParticipantId> {
        match self {
            VoteResolution::Accused { participant, .. } => Some(*participant),
            _ => None,
        }
    }
}

pub fn resolve_tally(tally: &VoteTally) -> VoteResolution {
    let leaders = tally.leaders();
    match leaders.as_slice() {
        [] => VoteResolution::NoVotes,
        [only] => VoteResolution::Accused {
            participant: *only,
            votes: tally.max_count(),
        },
        _ => VoteResolution::Tie {
            votes: tally.max_count(),
            leaders,
        },
    }
}

/// Outcome implied by a vote resolution.
pub fn outcome_for(resolution: &VoteResolution, impostor: ParticipantId) -> OutcomeKind {
    match resolution {
        VoteResolution::NoVotes | VoteResolution::Tie { .. } => OutcomeKind::TiedVoteInnocentWin,
        VoteResolution::Accused { participant, .. } if *participant == impostor => {
            OutcomeKind::InnocentCaughtWin
        }
        VoteResolution::Accused { .. } => OutcomeKind::ImposterSurvivedWin,
    }
}

/// Check an accusation: the target must exist and must not be the voter.
pub fn validate_vote(
    voter: ParticipantId,
    target: ParticipantId,
    participant_count: usize,
) -> Result<(), DomainError> {
    if target >= participant_count {
        return Err(DomainError::validation(
            ValidationKind::VoteOutOfRange,
            format!("Invalid number. Choose a player from 1 to {participant_count}."),
        ));
    }
    if target == voter {
        return Err(DomainError::validation(
            ValidationKind::SelfVote,
            format!("You cannot vote for yourself ({}).", voter + 1),
        ));
    }
    Ok(())
}

/// Result of an accepted vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteResult {
    pub voter: ParticipantId,
    pub target: ParticipantId,
    /// Set once the last ballot is in and the round resolves.
    pub resolution: Option<VoteResolution>,
}

/// Record an accusation from the participant on turn.
///
/// Voters act in lineup order. The last ballot resolves the round.
pub fn cast_vote(
    state: &mut RoundState,
    voter: ParticipantId,
    target: ParticipantId,
) -> Result<VoteResult, DomainError> {
    if state.phase != Phase::Vote {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Votes can only be cast during the vote phase.",
        ));
    }
    require_actor(state, voter, "cast_vote")?;
    validate_vote(voter, target, state.participants.len())?;

    let slot = state
        .ballots
        .get_mut(voter)
        .ok_or_else(|| DomainError::invariant(format!("no ballot slot for voter {voter}")))?;
    *slot = Some(target);
    debug!(voter, target, "vote cast");

    let next = voter + 1;
    if next < state.participants.len() {
        state.turn = Some(next);
        return Ok(VoteResult {
            voter,
            target,
            resolution: None,
        });
    }

    let resolution = resolve_round(state);
    Ok(VoteResult {
        voter,
        target,
        resolution: Some(resolution),
    })
}

/// Close the vote: tally ballots, set the outcome and enter `Resolved`.
fn resolve_round(state: &mut RoundState) -> VoteResolution {
    let tally = state.tally();
    let resolution = resolve_tally(&tally);
    let kind = outcome_for(&resolution, state.impostor);

    state.outcome = Some(RoundOutcome {
        kind,
        topic: state.topic.clone(),
        impostor: state.impostor,
        impostor_name: state.impostor_name().to_string(),
        eliminated: resolution.eliminated(),
        human_role: state.human_role(),
    });
    state.phase = Phase::Resolved;
    state.turn = None;
    resolution
}
