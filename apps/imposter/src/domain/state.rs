use crate::domain::clues::{Clue, UsedWords};
use crate::domain::outcome::RoundOutcome;
use crate::domain::participant::{Participant, ParticipantId, Role};
use crate::domain::rules::SUBROUNDS;
use crate::domain::setup::require_lineup_size;
use crate::domain::topic::Topic;
use crate::domain::voting::VoteTally;
use crate::errors::domain::{DomainError, ValidationKind};

/// Round progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Phase {
    /// Roles dealt and topic drawn; nobody has acted yet.
    Setup,
    /// Clue pass; `subround` is 1-based.
    Clue { subround: u8 },
    /// Every participant accuses someone else once.
    Vote,
    /// Terminal; `RoundState::outcome` is set.
    Resolved,
}

/// Entire state of one round, sufficient for pure domain operations.
///
/// A fresh value is built for every round, so the clue log, used words and
/// ballots never leak between rounds.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub phase: Phase,
    /// Ordered lineup; positions are participant ids.
    pub participants: Vec<Participant>,
    /// Index of the single impostor.
    pub impostor: ParticipantId,
    pub topic: Topic,
    /// Participant expected to act.
    /// - Some(id) during Clue and Vote
    /// - None in Setup and Resolved
    pub turn: Option<ParticipantId>,
    /// Accepted clues in the order they were given.
    pub clues: Vec<Clue>,
    pub used_words: UsedWords,
    /// Accusation per voter, by voter index.
    pub ballots: Vec<Option<ParticipantId>>,
    /// Whether the participant on turn already spent their guess.
    pub guessed_this_turn: bool,
    pub outcome: Option<RoundOutcome>,
}

impl RoundState {
    /// Build a round in `Setup`. The lineup must hold at least three
    /// participants and exactly one impostor.
    pub fn new(participants: Vec<Participant>, topic: Topic) -> Result<Self, DomainError> {
        require_lineup_size(participants.len())?;

        let mut impostors = participants
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_impostor())
            .map(|(i, _)| i);
        let impostor = match (impostors.next(), impostors.next()) {
            (Some(i), None) => i,
            _ => {
                return Err(DomainError::validation_other(
                    "A round needs exactly one impostor.",
                ))
            }
        };

        let count = participants.len();
        Ok(Self {
            phase: Phase::Setup,
            participants,
            impostor,
            topic,
            turn: None,
            clues: Vec::new(),
            used_words: UsedWords::new(),
            ballots: vec![None; count],
            guessed_this_turn: false,
            outcome: None,
        })
    }

    /// Leave `Setup` and hand the first turn of subround 1 to seat 0.
    pub fn start(&mut self) -> Result<(), DomainError> {
        if self.phase != Phase::Setup {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Round has already started.",
            ));
        }
        self.phase = Phase::Clue { subround: 1 };
        self.turn = Some(0);
        self.guessed_this_turn = false;
        Ok(())
    }

    pub fn participant(&self, id: ParticipantId) -> Result<&Participant, DomainError> {
        self.participants.get(id).ok_or_else(|| {
            DomainError::invariant(format!(
                "participant {id} is outside a lineup of {}",
                self.participants.len()
            ))
        })
    }

    pub fn impostor_name(&self) -> &str {
        self.participants
            .get(self.impostor)
            .map(Participant::name)
            .unwrap_or_default()
    }

    /// Role of the first human in the lineup, if any.
    pub fn human_role(&self) -> Option<Role> {
        self.participants
            .iter()
            .find(|p| p.is_human())
            .map(Participant::role)
    }

    /// Tally of the ballots cast so far.
    pub fn tally(&self) -> VoteTally {
        VoteTally::from_targets(self.ballots.iter().flatten().copied())
    }

    /// Clues given by one participant, in order.
    pub fn clues_by(&self, id: ParticipantId) -> impl Iterator<Item = &Clue> {
        self.clues.iter().filter(move |c| c.participant == id)
    }

    /// Terminal phase reached; `outcome` is set.
    pub fn is_resolved(&self) -> bool {
        self.phase == Phase::Resolved
    }
}

pub fn require_turn(state: &RoundState, ctx: &'static str) -> Result<ParticipantId, DomainError> {
    state
        .turn
        .ok_or_else(|| DomainError::invariant(format!("turn must be set ({ctx})")))
}

/// Current subround, or a phase mismatch outside the clue phase.
pub fn require_clue_phase(state: &RoundState) -> Result<u8, DomainError> {
    match state.phase {
        Phase::Clue { subround } if (1..=SUBROUNDS).contains(&subround) => Ok(subround),
        Phase::Clue { subround } => Err(DomainError::invariant(format!(
            "subround {subround} outside 1..={SUBROUNDS}"
        ))),
        _ => Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Clues can only be given during the clue phase.",
        )),
    }
}

/// Enforce that `who` is the participant on turn.
pub fn require_actor(
    state: &RoundState,
    who: ParticipantId,
    ctx: &'static str,
) -> Result<(), DomainError> {
    let turn = require_turn(state, ctx)?;
    if turn != who {
        let name = state
            .participants
            .get(who)
            .map(Participant::name)
            .unwrap_or("That player");
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            format!("It is not {name}'s turn."),
        ));
    }
    Ok(())
}
