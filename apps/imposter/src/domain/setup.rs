//! Role dealing for a new round.

use rand::Rng;

use crate::domain::participant::{Participant, ParticipantId, Role, Seat};
use crate::domain::rules::MIN_PARTICIPANTS;
use crate::errors::domain::{DomainError, ValidationKind};

pub fn require_lineup_size(count: usize) -> Result<(), DomainError> {
    if count < MIN_PARTICIPANTS {
        return Err(DomainError::validation(
            ValidationKind::TooFewParticipants,
            format!(
                "Total players must be {MIN_PARTICIPANTS} or more for a meaningful game (got {count})."
            ),
        ));
    }
    Ok(())
}

/// Pick the impostor seat uniformly at random.
pub fn pick_impostor<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Result<ParticipantId, DomainError> {
    require_lineup_size(count)?;
    Ok(rng.random_range(0..count))
}

/// Deal roles: the seat at `impostor` becomes the impostor, everyone else an insider.
pub fn assign_roles(
    seats: Vec<Seat>,
    impostor: ParticipantId,
) -> Result<Vec<Participant>, DomainError> {
    require_lineup_size(seats.len())?;
    if impostor >= seats.len() {
        return Err(DomainError::validation(
            ValidationKind::ImpostorOutOfRange,
            format!(
                "impostor seat {impostor} is outside a lineup of {}",
                seats.len()
            ),
        ));
    }

    Ok(seats
        .into_iter()
        .enumerate()
        .map(|(i, seat)| {
            let role = if i == impostor {
                Role::Impostor
            } else {
                Role::Insider
            };
            Participant::from_seat(seat, role)
        })
        .collect())
}
