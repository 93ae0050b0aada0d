//! Property tests for round progression (pure domain).
//!
//! Properties tested:
//! - Exactly one impostor is dealt, at the chosen seat
//! - Accepted clues are unique case-insensitively and never the topic
//! - A full vote never records a self-vote and always resolves
//! - Shared top counts never eliminate anyone

use std::collections::HashSet;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::outcome::OutcomeKind;
use crate::domain::participant::Seat;
use crate::domain::setup::{assign_roles, pick_impostor};
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{play_clue_phase, started_round};
use crate::domain::turns::submit_clue;
use crate::domain::voting::{cast_vote, outcome_for, resolve_tally, VoteTally};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: dealing produces exactly one impostor
    #[test]
    fn prop_exactly_one_impostor(n in test_gens::lineup_size(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let impostor = pick_impostor(n, &mut rng).unwrap();
        prop_assert!(impostor < n);

        let seats = (0..n).map(|i| Seat::automated(format!("AI Player {i}"))).collect();
        let participants = assign_roles(seats, impostor).unwrap();
        let impostors: Vec<usize> = participants
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_impostor())
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(impostors, vec![impostor]);
    }

    /// Property: accepted clues are never repeated and never the topic
    #[test]
    fn prop_accepted_clues_are_unique(
        (n, imp) in test_gens::lineup_with_impostor(),
        words in proptest::collection::vec(test_gens::clue_word(), 1..40),
    ) {
        let mut state = started_round(n, imp);
        for word in &words {
            if !matches!(state.phase, Phase::Clue { .. }) {
                break;
            }
            let who = state.turn.unwrap();
            // Rejections are fine; only accepted clues are checked.
            let _ = submit_clue(&mut state, who, word);
        }

        let mut seen = HashSet::new();
        for clue in &state.clues {
            let lower = clue.word.to_lowercase();
            prop_assert!(seen.insert(lower.clone()), "repeated clue {}", clue.word);
            prop_assert_ne!(lower, "netflix");
        }
        prop_assert_eq!(seen.len(), state.used_words.len());
    }

    /// Property: a complete vote has no self-votes and resolves the round
    #[test]
    fn prop_full_vote_resolves((n, imp, ballots) in test_gens::voted_lineup()) {
        let mut state = started_round(n, imp);
        play_clue_phase(&mut state);

        for (voter, target) in ballots.iter().copied().enumerate() {
            prop_assert_ne!(voter, target);
            cast_vote(&mut state, voter, target).unwrap();
        }

        prop_assert_eq!(state.phase, Phase::Resolved);
        prop_assert_eq!(state.tally().total() as usize, n);
        let outcome = state.outcome.clone().unwrap();
        let expected = outcome_for(&resolve_tally(&VoteTally::from_targets(ballots)), imp);
        prop_assert_eq!(outcome.kind, expected);
    }

    /// Property: a shared maximum never eliminates anyone
    #[test]
    fn prop_tie_eliminates_nobody(
        counts in proptest::collection::vec(0u32..5, 3..10),
        imp_seed in any::<usize>(),
    ) {
        let tally = VoteTally::from_counts(counts.iter().copied().enumerate());
        let resolution = resolve_tally(&tally);
        let imp = imp_seed % counts.len();
        if tally.leaders().len() != 1 {
            prop_assert_eq!(resolution.eliminated(), None);
            prop_assert_eq!(outcome_for(&resolution, imp), OutcomeKind::TiedVoteInnocentWin);
        } else {
            prop_assert_eq!(resolution.eliminated(), Some(tally.leaders()[0]));
        }
    }
}
