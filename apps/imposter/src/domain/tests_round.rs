use crate::domain::outcome::OutcomeKind;
use crate::domain::participant::{Participant, ParticipantKind, Role};
use crate::domain::rules::SUBROUNDS;
use crate::domain::setup::{assign_roles, pick_impostor};
use crate::domain::state::{Phase, RoundState};
use crate::domain::test_state_helpers::{lineup, make_round, play_clue_phase, started_round};
use crate::domain::topic::Topic;
use crate::domain::turns::{authorize_hints, submit_clue, submit_guess, GuessResult};
use crate::domain::Seat;
use crate::errors::domain::ValidationKind;

#[test]
fn new_round_starts_in_setup_with_no_turn() {
    let state = make_round(3, 1);
    assert_eq!(state.phase, Phase::Setup);
    assert_eq!(state.turn, None);
    assert_eq!(state.impostor, 1);
    assert_eq!(state.impostor_name(), "P1");
    assert_eq!(state.human_role(), Some(Role::Insider));
}

#[test]
fn start_opens_subround_one_once() {
    let mut state = make_round(3, 0);
    state.start().unwrap();
    assert_eq!(state.phase, Phase::Clue { subround: 1 });
    assert_eq!(state.turn, Some(0));

    let err = state.start().unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));
}

#[test]
fn fewer_than_three_participants_is_rejected() {
    let seats = vec![Seat::human("A"), Seat::automated("B")];
    let err = assign_roles(seats, 0).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::TooFewParticipants));

    let mut rng = rand::rng();
    let err = pick_impostor(2, &mut rng).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::TooFewParticipants));
}

#[test]
fn impostor_seat_outside_lineup_is_rejected() {
    let seats = (0..3).map(|i| Seat::automated(format!("P{i}"))).collect();
    let err = assign_roles(seats, 3).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::ImpostorOutOfRange));
}

#[test]
fn lineup_without_exactly_one_impostor_is_rejected() {
    let topic = Topic::new("Tesla", "Electric cars.");
    let none: Vec<Participant> = (0..3)
        .map(|i| Participant::new(format!("P{i}"), ParticipantKind::Automated, Role::Insider))
        .collect();
    assert!(RoundState::new(none, topic.clone()).is_err());

    let mut two = lineup(3, 0);
    two[1] = Participant::new("P1", ParticipantKind::Automated, Role::Impostor);
    assert!(RoundState::new(two, topic).is_err());
}

#[test]
fn clue_phase_runs_three_passes_in_lineup_order() {
    let mut state = started_round(3, 2);
    play_clue_phase(&mut state);

    assert_eq!(state.phase, Phase::Vote);
    assert_eq!(state.turn, Some(0));
    assert_eq!(state.clues.len(), 3 * SUBROUNDS as usize);

    for (i, clue) in state.clues.iter().enumerate() {
        assert_eq!(clue.participant, i % 3);
        assert_eq!(clue.subround as usize, i / 3 + 1);
    }
    assert_eq!(state.clues_by(1).count(), SUBROUNDS as usize);
}

#[test]
fn subround_advances_after_last_seat() {
    let mut state = started_round(3, 2);
    assert!(submit_clue(&mut state, 0, "Digital")
        .unwrap()
        .phase_transitioned
        .is_none());
    submit_clue(&mut state, 1, "Video").unwrap();
    let result = submit_clue(&mut state, 2, "Thing").unwrap();
    assert_eq!(result.phase_transitioned, Some(Phase::Clue { subround: 2 }));
    assert_eq!(state.turn, Some(0));
}

#[test]
fn rejected_clue_leaves_state_untouched() {
    let mut state = started_round(3, 2);
    submit_clue(&mut state, 0, "Red").unwrap();

    let before_clues = state.clues.clone();
    let before_used = state.used_words.clone();
    let err = submit_clue(&mut state, 1, "RED").unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::WordAlreadyUsed));
    assert_eq!(state.clues, before_clues);
    assert_eq!(state.used_words, before_used);
    assert_eq!(state.turn, Some(1));

    let err = submit_clue(&mut state, 1, "netflix").unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::TopicWord));
}

#[test]
fn out_of_turn_clue_is_rejected() {
    let mut state = started_round(4, 3);
    let err = submit_clue(&mut state, 2, "Digital").unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::OutOfTurn));
    assert_eq!(err.to_string(), "It is not P2's turn.");
}

#[test]
fn correct_guess_resolves_immediately() {
    let mut state = started_round(3, 0);
    let result = submit_guess(&mut state, 0, "  netflix ").unwrap();
    let GuessResult::Correct(outcome) = result else {
        panic!("expected a correct guess");
    };
    assert_eq!(outcome.kind, OutcomeKind::ImposterGuessWin);
    assert_eq!(outcome.human_role, Some(Role::Impostor));
    assert_eq!(
        outcome.headline(),
        "CONGRATULATIONS, YOU WIN! You correctly guessed the word!"
    );
    assert_eq!(state.phase, Phase::Resolved);
    assert!(state.is_resolved());
    assert_eq!(state.turn, None);
    assert!(state.clues.is_empty());

    let err = submit_clue(&mut state, 0, "Late").unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));
}

#[test]
fn wrong_guess_keeps_the_turn_and_allows_only_one_per_turn() {
    let mut state = started_round(3, 0);
    assert_eq!(
        submit_guess(&mut state, 0, "Hulu").unwrap(),
        GuessResult::Missed
    );
    assert_eq!(state.turn, Some(0));

    let err = submit_guess(&mut state, 0, "Netflix").unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::GuessAlreadyUsed));

    submit_clue(&mut state, 0, "Media").unwrap();
    assert!(!state.guessed_this_turn);
}

#[test]
fn insiders_cannot_guess() {
    let mut state = started_round(3, 1);
    let err = submit_guess(&mut state, 0, "Netflix").unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::GuessNotAllowed));
    assert_eq!(state.phase, Phase::Clue { subround: 1 });
}

#[test]
fn help_is_for_insiders_and_keeps_the_turn() {
    let mut state = started_round(3, 1);
    authorize_hints(&state, 0).unwrap();
    assert_eq!(state.turn, Some(0));

    submit_clue(&mut state, 0, "Stream").unwrap();
    let err = authorize_hints(&state, 1).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::HelpNotAllowed));
    assert_eq!(
        err.to_string(),
        "Only Innocent players can use the 'help' command!"
    );
}
