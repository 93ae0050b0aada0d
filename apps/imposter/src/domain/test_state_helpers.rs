//! Test-only round state helpers for domain unit tests.

#[cfg(test)]
pub use state_helpers::{lineup, make_round, play_clue_phase, started_round};

#[cfg(test)]
mod state_helpers {
    use crate::domain::participant::{Participant, ParticipantId, Seat};
    use crate::domain::setup::assign_roles;
    use crate::domain::state::{Phase, RoundState};
    use crate::domain::topic::Topic;
    use crate::domain::turns::submit_clue;

    /// `count` automated seats named "P0".."Pn", with seat 0 human.
    pub fn lineup(count: usize, impostor: ParticipantId) -> Vec<Participant> {
        let seats: Vec<Seat> = (0..count)
            .map(|i| {
                if i == 0 {
                    Seat::human(format!("P{i}"))
                } else {
                    Seat::automated(format!("P{i}"))
                }
            })
            .collect();
        assign_roles(seats, impostor).expect("valid test lineup")
    }

    /// Round in `Setup` over a Netflix topic.
    pub fn make_round(count: usize, impostor: ParticipantId) -> RoundState {
        RoundState::new(
            lineup(count, impostor),
            Topic::new("Netflix", "A popular streaming platform for movies."),
        )
        .expect("valid test round")
    }

    /// Round already in subround 1 with seat 0 on turn.
    pub fn started_round(count: usize, impostor: ParticipantId) -> RoundState {
        let mut state = make_round(count, impostor);
        state.start().expect("fresh round starts");
        state
    }

    /// Drive every clue turn with unique words until the vote opens.
    pub fn play_clue_phase(state: &mut RoundState) {
        let mut n = 0;
        while matches!(state.phase, Phase::Clue { .. }) {
            let who = state.turn.expect("turn set during clue phase");
            submit_clue(state, who, &format!("clue{n}")).expect("unique clue accepted");
            n += 1;
        }
    }
}
