//! Drives one round from setup to resolution through a [`RoundAdapter`].

use rand::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::adapter::{BallotView, ClueAction, RoundAdapter, RoundEvent, TurnView};
use crate::ai::{synthesize_word, AiPlayer, ClueContext, VoteContext};
use crate::domain::participant::{Participant, ParticipantId, Role, Seat};
use crate::domain::state::{require_turn, Phase, RoundState};
use crate::domain::{
    assign_roles, authorize_hints, cast_vote, extract_hints, pick_impostor, submit_clue,
    submit_guess, Clue, ClueResult, GuessResult, RoundOutcome, Topic, VoteResult, VoteTally,
};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::topic::TopicSource;

/// Everything worth keeping once a round is over.
#[derive(Debug, Clone, Serialize)]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    pub participants: Vec<Participant>,
    pub topic: Topic,
    pub clues: Vec<Clue>,
    /// Empty when the impostor guessed before the vote.
    pub tally: VoteTally,
    /// Automated actions replaced by the engine after a policy failure.
    pub ai_fallbacks: u32,
}

pub struct RoundEngine {
    topics: TopicSource,
    insider_ai: Box<dyn AiPlayer>,
    impostor_ai: Box<dyn AiPlayer>,
    /// Padding for hint extraction.
    filler: Vec<String>,
    rng: StdRng,
}

impl RoundEngine {
    pub fn new(
        topics: TopicSource,
        insider_ai: Box<dyn AiPlayer>,
        impostor_ai: Box<dyn AiPlayer>,
        filler: Vec<String>,
        seed: Option<u64>,
    ) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            topics,
            insider_ai,
            impostor_ai,
            filler,
            rng,
        }
    }

    /// Deal roles, draw a topic and play the round to resolution.
    ///
    /// Rule violations are reported to the adapter and re-prompted. Only
    /// adapter I/O failures and internal inconsistencies end the round early.
    pub fn play_round(
        &mut self,
        seats: Vec<Seat>,
        adapter: &mut dyn RoundAdapter,
    ) -> Result<RoundReport, AppError> {
        let impostor = pick_impostor(seats.len(), &mut self.rng)?;
        let participants = assign_roles(seats, impostor)?;
        let topic = self.topics.draw(&mut self.rng);

        let mut state = RoundState::new(participants, topic)?;
        info!(
            participants = state.participants.len(),
            impostor,
            "round set up"
        );
        adapter.show_state(&RoundEvent::RoundStarted {
            participants: state.participants.clone(),
            topic: state.topic.clone(),
        });

        state.start()?;
        adapter.show_state(&RoundEvent::SubroundStarted { subround: 1 });

        let mut ai_fallbacks = 0;
        while let Phase::Clue { subround } = state.phase {
            let who = require_turn(&state, "clue phase")?;
            if state.participant(who)?.is_human() {
                self.human_clue_turn(&mut state, who, subround, adapter)?;
            } else {
                ai_fallbacks += self.automated_clue_turn(&mut state, who, adapter)?;
            }
        }

        if state.phase == Phase::Vote {
            adapter.show_state(&RoundEvent::VotingStarted {
                participants: state.participants.clone(),
                clues: state.clues.clone(),
            });
            while state.phase == Phase::Vote {
                let voter = require_turn(&state, "vote phase")?;
                if state.participant(voter)?.is_human() {
                    self.human_vote(&mut state, voter, adapter)?;
                } else {
                    ai_fallbacks += self.automated_vote(&mut state, voter, adapter)?;
                }
            }
        }

        if !state.is_resolved() {
            return Err(DomainError::invariant(format!("round stopped in {:?}", state.phase)).into());
        }
        let outcome = state
            .outcome
            .clone()
            .ok_or_else(|| DomainError::invariant("round ended without an outcome"))?;
        info!(
            outcome = outcome.kind.as_str(),
            topic = %outcome.topic.word(),
            impostor = %outcome.impostor_name,
            "round resolved"
        );
        adapter.show_state(&RoundEvent::Resolved(outcome.clone()));

        let tally = state.tally();
        Ok(RoundReport {
            outcome,
            participants: state.participants,
            topic: state.topic,
            clues: state.clues,
            tally,
            ai_fallbacks,
        })
    }

    fn ai_for(&self, role: Role) -> &dyn AiPlayer {
        match role {
            Role::Insider => self.insider_ai.as_ref(),
            Role::Impostor => self.impostor_ai.as_ref(),
        }
    }

    fn human_clue_turn(
        &mut self,
        state: &mut RoundState,
        who: ParticipantId,
        subround: u8,
        adapter: &mut dyn RoundAdapter,
    ) -> Result<(), AppError> {
        loop {
            let role = state.participant(who)?.role();
            let action = {
                let view = TurnView {
                    participant: who,
                    name: state.participant(who)?.name(),
                    role,
                    subround,
                    topic: (role == Role::Insider).then_some(&state.topic),
                    clues: &state.clues,
                    can_guess: role == Role::Impostor && !state.guessed_this_turn,
                };
                adapter.get_clue(&view)?
            };

            match action {
                ClueAction::Clue(word) => match submit_clue(state, who, &word) {
                    Ok(result) => {
                        report_clue(adapter, result);
                        return Ok(());
                    }
                    Err(e) => reject(adapter, who, e)?,
                },
                ClueAction::Guess(guess) => match submit_guess(state, who, &guess) {
                    Ok(GuessResult::Correct(_)) => return Ok(()),
                    Ok(GuessResult::Missed) => {
                        adapter.show_state(&RoundEvent::GuessMissed {
                            participant: who,
                            guess,
                        });
                    }
                    Err(e) => reject(adapter, who, e)?,
                },
                ClueAction::Help => match authorize_hints(state, who) {
                    Ok(()) => {
                        let words = extract_hints(
                            state.topic.description(),
                            state.topic.word(),
                            &self.filler,
                            &mut self.rng,
                        );
                        debug!(participant = who, ?words, "hints shown");
                        adapter.show_state(&RoundEvent::Hints {
                            participant: who,
                            words,
                        });
                    }
                    Err(e) => reject(adapter, who, e)?,
                },
            }
        }
    }

    /// Returns 1 if the policy's clue had to be replaced, else 0.
    fn automated_clue_turn(
        &mut self,
        state: &mut RoundState,
        who: ParticipantId,
        adapter: &mut dyn RoundAdapter,
    ) -> Result<u32, AppError> {
        adapter.show_state(&RoundEvent::Thinking { participant: who });

        let participant = state.participant(who)?;
        let ctx = ClueContext {
            name: participant.name(),
            role: participant.role(),
            topic_word: state.topic.word(),
            used: &state.used_words,
        };
        let proposed = self.ai_for(ctx.role).choose_clue(&ctx);

        let first_try = match proposed {
            Ok(word) => match submit_clue(state, who, &word) {
                Ok(result) => Some(result),
                Err(DomainError::Validation(kind, detail)) => {
                    warn!(participant = who, %word, code = kind.as_str(), %detail, "automated clue rejected");
                    None
                }
                Err(e) => return Err(e.into()),
            },
            Err(e) => {
                warn!(participant = who, error = %e, "clue policy failed");
                None
            }
        };

        let (result, fallbacks) = match first_try {
            Some(result) => (result, 0),
            None => {
                let word = synthesize_word(state.topic.word(), &state.used_words, &mut self.rng);
                (submit_clue(state, who, &word)?, 1)
            }
        };
        report_clue(adapter, result);
        Ok(fallbacks)
    }

    fn human_vote(
        &mut self,
        state: &mut RoundState,
        voter: ParticipantId,
        adapter: &mut dyn RoundAdapter,
    ) -> Result<(), AppError> {
        loop {
            let target = {
                let participant = state.participant(voter)?;
                let view = BallotView {
                    voter,
                    name: participant.name(),
                    role: participant.role(),
                    participants: &state.participants,
                    clues: &state.clues,
                };
                adapter.get_vote(&view)?
            };
            match cast_vote(state, voter, target) {
                Ok(result) => {
                    report_vote(state, adapter, result);
                    return Ok(());
                }
                Err(e) => reject(adapter, voter, e)?,
            }
        }
    }

    /// Returns 1 if the policy's vote had to be replaced, else 0.
    fn automated_vote(
        &mut self,
        state: &mut RoundState,
        voter: ParticipantId,
        adapter: &mut dyn RoundAdapter,
    ) -> Result<u32, AppError> {
        let role = state.participant(voter)?.role();
        let ctx = VoteContext {
            participants: &state.participants,
            impostor: state.impostor,
            voter,
        };
        let proposed = self.ai_for(role).choose_vote(&ctx);

        let first_try = match proposed {
            Ok(target) => match cast_vote(state, voter, target) {
                Ok(result) => Some(result),
                Err(DomainError::Validation(kind, detail)) => {
                    warn!(voter, target, code = kind.as_str(), %detail, "automated vote rejected");
                    None
                }
                Err(e) => return Err(e.into()),
            },
            Err(e) => {
                warn!(voter, error = %e, "vote policy failed");
                None
            }
        };

        let (result, fallbacks) = match first_try {
            Some(result) => (result, 0),
            None => {
                let others: Vec<ParticipantId> = (0..state.participants.len())
                    .filter(|&i| i != voter)
                    .collect();
                let target = others
                    .choose(&mut self.rng)
                    .copied()
                    .ok_or_else(|| DomainError::invariant("no other participant to accuse"))?;
                (cast_vote(state, voter, target)?, 1)
            }
        };
        report_vote(state, adapter, result);
        Ok(fallbacks)
    }
}

fn report_clue(adapter: &mut dyn RoundAdapter, result: ClueResult) {
    adapter.show_state(&RoundEvent::ClueAccepted(result.clue));
    if let Some(Phase::Clue { subround }) = result.phase_transitioned {
        adapter.show_state(&RoundEvent::SubroundStarted { subround });
    }
}

fn report_vote(state: &RoundState, adapter: &mut dyn RoundAdapter, result: VoteResult) {
    adapter.show_state(&RoundEvent::VoteCast {
        voter: result.voter,
        target: result.target,
    });
    if let Some(resolution) = result.resolution {
        adapter.show_state(&RoundEvent::VotesTallied {
            tally: state.tally(),
            resolution,
        });
    }
}

/// Report a rule violation to the adapter. Invariant failures are fatal.
fn reject(
    adapter: &mut dyn RoundAdapter,
    participant: ParticipantId,
    err: DomainError,
) -> Result<(), AppError> {
    match err {
        DomainError::Validation(kind, reason) => {
            debug!(participant, code = kind.as_str(), %reason, "action rejected");
            adapter.show_state(&RoundEvent::ActionRejected {
                participant,
                kind: Some(kind),
                reason,
            });
            Ok(())
        }
        invariant => Err(invariant.into()),
    }
}
