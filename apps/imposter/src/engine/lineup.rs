//! Lineups for the supported game modes.

use rand::prelude::*;

use crate::domain::participant::Seat;
use crate::domain::rules::MIN_PARTICIPANTS;
use crate::errors::domain::{DomainError, ValidationKind};

/// Automated opponents in solo mode.
pub const SOLO_AI_RANGE: std::ops::RangeInclusive<usize> = 3..=5;

pub fn ai_name(n: usize) -> String {
    format!("AI Player {n}")
}

/// `count` automated seats named `AI Player 1..=count`.
pub fn automated_seats(count: usize) -> Vec<Seat> {
    (1..=count).map(|n| Seat::automated(ai_name(n))).collect()
}

/// One human among 3 to 5 automated players, at a random position.
pub fn solo_lineup<R: Rng + ?Sized>(human_name: &str, rng: &mut R) -> Vec<Seat> {
    let ai_count = rng.random_range(SOLO_AI_RANGE);
    let mut seats = automated_seats(ai_count);
    let position = rng.random_range(0..=ai_count);
    seats.insert(position, Seat::human(human_name.trim()));
    seats
}

/// At least two humans plus any number of automated players, shuffled.
pub fn mixed_lineup<R: Rng + ?Sized>(
    human_names: &[String],
    ai_count: usize,
    rng: &mut R,
) -> Result<Vec<Seat>, DomainError> {
    if human_names.len() < 2 {
        return Err(DomainError::validation(
            ValidationKind::TooFewParticipants,
            "Must be 2 or more human players.",
        ));
    }
    let total = human_names.len() + ai_count;
    if total < MIN_PARTICIPANTS {
        return Err(DomainError::validation(
            ValidationKind::TooFewParticipants,
            format!("Total players must be {MIN_PARTICIPANTS} or more for a meaningful game."),
        ));
    }

    let mut seats: Vec<Seat> = human_names
        .iter()
        .map(|name| Seat::human(name.trim()))
        .chain(automated_seats(ai_count))
        .collect();
    seats.shuffle(rng);
    Ok(seats)
}
