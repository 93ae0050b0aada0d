use crate::domain::outcome::OutcomeKind;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{play_clue_phase, started_round};
use crate::domain::voting::{
    cast_vote, outcome_for, resolve_tally, validate_vote, VoteResolution, VoteTally,
};
use crate::errors::domain::ValidationKind;

#[test]
fn unique_leader_who_is_impostor_means_insiders_win() {
    let tally = VoteTally::from_counts([(0, 1), (1, 1), (2, 2)]);
    let resolution = resolve_tally(&tally);
    assert_eq!(
        resolution,
        VoteResolution::Accused {
            participant: 2,
            votes: 2
        }
    );
    assert_eq!(outcome_for(&resolution, 2), OutcomeKind::InnocentCaughtWin);
}

#[test]
fn unique_leader_who_is_insider_means_impostor_survives() {
    let tally = VoteTally::from_counts([(0, 3), (1, 1)]);
    let resolution = resolve_tally(&tally);
    assert_eq!(resolution.eliminated(), Some(0));
    assert_eq!(outcome_for(&resolution, 1), OutcomeKind::ImposterSurvivedWin);
}

#[test]
fn shared_top_count_is_a_tie_and_nobody_is_eliminated() {
    let tally = VoteTally::from_counts([(0, 2), (3, 2)]);
    let resolution = resolve_tally(&tally);
    assert_eq!(
        resolution,
        VoteResolution::Tie {
            leaders: vec![0, 3],
            votes: 2
        }
    );
    assert_eq!(resolution.eliminated(), None);
    assert_eq!(outcome_for(&resolution, 0), OutcomeKind::TiedVoteInnocentWin);
}

#[test]
fn empty_tally_counts_as_a_tie() {
    let resolution = resolve_tally(&VoteTally::new());
    assert_eq!(resolution, VoteResolution::NoVotes);
    assert_eq!(outcome_for(&resolution, 1), OutcomeKind::TiedVoteInnocentWin);
}

#[test]
fn tally_helpers() {
    let tally = VoteTally::from_targets([2, 2, 0, 1]);
    assert_eq!(tally.count(2), 2);
    assert_eq!(tally.count(3), 0);
    assert_eq!(tally.total(), 4);
    assert_eq!(tally.leaders(), vec![2]);
    assert!(VoteTally::from_counts([(0, 0)]).is_empty());
}

#[test]
fn vote_validation_messages() {
    let err = validate_vote(1, 1, 4).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::SelfVote));
    assert_eq!(err.to_string(), "You cannot vote for yourself (2).");

    let err = validate_vote(0, 4, 4).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::VoteOutOfRange));
    assert_eq!(
        err.to_string(),
        "Invalid number. Choose a player from 1 to 4."
    );

    assert!(validate_vote(0, 3, 4).is_ok());
}

#[test]
fn cast_vote_rejected_during_clue_phase() {
    let mut state = started_round(3, 2);
    let err = cast_vote(&mut state, 0, 1).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::PhaseMismatch));
}

#[test]
fn votes_follow_lineup_order_and_last_ballot_resolves() {
    let mut state = started_round(4, 2);
    play_clue_phase(&mut state);
    assert_eq!(state.phase, Phase::Vote);
    assert_eq!(state.turn, Some(0));
    assert!(!state.is_resolved());

    let err = cast_vote(&mut state, 1, 2).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::OutOfTurn));

    // 0 -> 2, 1 -> 2, 2 -> 0, 3 -> 2
    for (voter, target) in [(0, 2), (1, 2), (2, 0)] {
        let result = cast_vote(&mut state, voter, target).unwrap();
        assert!(result.resolution.is_none());
        assert_eq!(state.turn, Some(voter + 1));
    }
    let last = cast_vote(&mut state, 3, 2).unwrap();
    assert_eq!(last.resolution.as_ref().and_then(|r| r.eliminated()), Some(2));

    assert_eq!(state.phase, Phase::Resolved);
    assert!(state.is_resolved());
    assert_eq!(state.turn, None);
    let outcome = state.outcome.expect("resolved round has an outcome");
    assert_eq!(outcome.kind, OutcomeKind::InnocentCaughtWin);
    assert_eq!(outcome.eliminated, Some(2));
    assert_eq!(outcome.impostor_name, "P2");
}

#[test]
fn rejected_ballot_keeps_the_turn() {
    let mut state = started_round(3, 1);
    play_clue_phase(&mut state);

    let err = cast_vote(&mut state, 0, 0).unwrap_err();
    assert_eq!(err.kind(), Some(ValidationKind::SelfVote));
    assert_eq!(state.turn, Some(0));
    assert!(state.ballots.iter().all(Option::is_none));
}
