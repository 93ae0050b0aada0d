// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::participant::ParticipantId;

/// Lineup size between the minimum and a busy table.
pub fn lineup_size() -> impl Strategy<Value = usize> {
    3usize..=10usize
}

/// Lineup size together with a valid impostor seat.
pub fn lineup_with_impostor() -> impl Strategy<Value = (usize, ParticipantId)> {
    lineup_size().prop_flat_map(|n| (Just(n), 0..n))
}

/// One accusation per voter, never targeting the voter.
pub fn ballots(count: usize) -> impl Strategy<Value = Vec<ParticipantId>> {
    // Offset 1..count from the voter's own seat always lands on someone else.
    proptest::collection::vec(1..count, count).prop_map(move |offsets| {
        offsets
            .into_iter()
            .enumerate()
            .map(|(voter, offset)| (voter + offset) % count)
            .collect()
    })
}

/// Lineup size, impostor seat and a full set of ballots.
pub fn voted_lineup() -> impl Strategy<Value = (usize, ParticipantId, Vec<ParticipantId>)> {
    lineup_with_impostor().prop_flat_map(|(n, imp)| (Just(n), Just(imp), ballots(n)))
}

/// A single alphabetic clue word.
pub fn clue_word() -> impl Strategy<Value = String> {
    "[A-Za-z]{3,10}"
}
