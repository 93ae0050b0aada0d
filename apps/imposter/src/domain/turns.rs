//! Clue-phase actions: giving a clue, guessing the topic, asking for hints.

use tracing::debug;

use crate::domain::clues::{validate_clue, Clue};
use crate::domain::outcome::{OutcomeKind, RoundOutcome};
use crate::domain::participant::{ParticipantId, Role};
use crate::domain::rules::SUBROUNDS;
use crate::domain::state::{require_actor, require_clue_phase, Phase, RoundState};
use crate::errors::domain::{DomainError, ValidationKind};

/// Result of an accepted clue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueResult {
    pub clue: Clue,
    /// Phase entered because of this clue, if any (next subround or Vote).
    pub phase_transitioned: Option<Phase>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessResult {
    /// Topic named; the round is resolved.
    Correct(RoundOutcome),
    /// Wrong guess; the impostor still owes a clue this turn.
    Missed,
}

/// Give a clue for the participant on turn, enforcing phase, turn and word rules.
pub fn submit_clue(
    state: &mut RoundState,
    who: ParticipantId,
    raw: &str,
) -> Result<ClueResult, DomainError> {
    let subround = require_clue_phase(state)?;
    require_actor(state, who, "submit_clue")?;

    let word = validate_clue(raw, &state.topic, &state.used_words)?;
    let name = state.participant(who)?.name().to_string();

    state.used_words.insert(&word);
    let clue = Clue {
        participant: who,
        name,
        word,
        subround,
    };
    state.clues.push(clue.clone());

    let phase_transitioned = advance_clue_turn(state, who, subround);
    debug!(
        participant = who,
        subround,
        word = %clue.word,
        "clue accepted"
    );

    Ok(ClueResult {
        clue,
        phase_transitioned,
    })
}

/// Move the turn to the next participant, opening the next subround or the
/// vote after the last seat has spoken.
fn advance_clue_turn(state: &mut RoundState, who: ParticipantId, subround: u8) -> Option<Phase> {
    state.guessed_this_turn = false;
    let next = who + 1;
    if next < state.participants.len() {
        state.turn = Some(next);
        return None;
    }

    let phase = if subround < SUBROUNDS {
        Phase::Clue {
            subround: subround + 1,
        }
    } else {
        Phase::Vote
    };
    state.phase = phase;
    state.turn = Some(0);
    Some(phase)
}

/// Impostor-only: try to name the topic instead of (before) giving a clue.
///
/// A correct guess resolves the round immediately. One guess per turn.
pub fn submit_guess(
    state: &mut RoundState,
    who: ParticipantId,
    guess: &str,
) -> Result<GuessResult, DomainError> {
    require_clue_phase(state)?;
    require_actor(state, who, "submit_guess")?;

    let participant = state.participant(who)?;
    if participant.role() != Role::Impostor {
        return Err(DomainError::validation(
            ValidationKind::GuessNotAllowed,
            "Only the Imposter can use the 'guess' command!",
        ));
    }
    if state.guessed_this_turn {
        return Err(DomainError::validation(
            ValidationKind::GuessAlreadyUsed,
            "You already guessed this turn. Now provide a word description.",
        ));
    }

    if !state.topic.matches(guess) {
        state.guessed_this_turn = true;
        debug!(participant = who, "impostor guess missed");
        return Ok(GuessResult::Missed);
    }

    let outcome = RoundOutcome {
        kind: OutcomeKind::ImposterGuessWin,
        topic: state.topic.clone(),
        impostor: state.impostor,
        impostor_name: participant.name().to_string(),
        eliminated: None,
        human_role: state.human_role(),
    };
    state.phase = Phase::Resolved;
    state.turn = None;
    state.outcome = Some(outcome.clone());
    Ok(GuessResult::Correct(outcome))
}

/// Insider-only: permission check for a hint request. Does not use up the turn.
pub fn authorize_hints(state: &RoundState, who: ParticipantId) -> Result<(), DomainError> {
    require_clue_phase(state)?;
    require_actor(state, who, "authorize_hints")?;

    if state.participant(who)?.role() != Role::Insider {
        return Err(DomainError::validation(
            ValidationKind::HelpNotAllowed,
            "Only Innocent players can use the 'help' command!",
        ));
    }
    Ok(())
}
