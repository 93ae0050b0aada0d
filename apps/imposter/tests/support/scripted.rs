//! Adapter whose human answers come from closures.

use imposter::engine::{BallotView, ClueAction, RoundAdapter, RoundEvent, TurnView};
use imposter::AppError;

type ClueFn = Box<dyn FnMut(&TurnView<'_>) -> Option<ClueAction>>;
type VoteFn = Box<dyn FnMut(&BallotView<'_>) -> Option<usize>>;

/// Records every event. A closure returning `None` acts like closed input.
pub struct ScriptedAdapter {
    clue: ClueFn,
    vote: VoteFn,
    pub events: Vec<RoundEvent>,
    pub clue_prompts: usize,
    pub vote_prompts: usize,
}

impl ScriptedAdapter {
    pub fn new(
        clue: impl FnMut(&TurnView<'_>) -> Option<ClueAction> + 'static,
        vote: impl FnMut(&BallotView<'_>) -> Option<usize> + 'static,
    ) -> Self {
        Self {
            clue: Box::new(clue),
            vote: Box::new(vote),
            events: Vec::new(),
            clue_prompts: 0,
            vote_prompts: 0,
        }
    }

    /// For rounds without humans: any prompt is a test failure.
    pub fn automated_only() -> Self {
        Self::new(
            |view| panic!("unexpected clue prompt for {}", view.name),
            |view| panic!("unexpected vote prompt for {}", view.name),
        )
    }

    /// Humans give `Human<n>` clues and accuse the next seat.
    pub fn plain_humans() -> Self {
        let mut n = 0;
        Self::new(
            move |_| {
                n += 1;
                Some(ClueAction::Clue(format!("Human{n}")))
            },
            |view| Some((view.voter + 1) % view.participants.len()),
        )
    }

    pub fn rejections(&self) -> Vec<&RoundEvent> {
        self.events
            .iter()
            .filter(|e| matches!(e, RoundEvent::ActionRejected { .. }))
            .collect()
    }

    pub fn votes(&self) -> Vec<(usize, usize)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                RoundEvent::VoteCast { voter, target } => Some((*voter, *target)),
                _ => None,
            })
            .collect()
    }
}

impl RoundAdapter for ScriptedAdapter {
    fn get_clue(&mut self, view: &TurnView<'_>) -> Result<ClueAction, AppError> {
        self.clue_prompts += 1;
        (self.clue)(view).ok_or_else(|| AppError::input_closed("script ended"))
    }

    fn get_vote(&mut self, view: &BallotView<'_>) -> Result<usize, AppError> {
        self.vote_prompts += 1;
        (self.vote)(view).ok_or_else(|| AppError::input_closed("script ended"))
    }

    fn show_state(&mut self, event: &RoundEvent) {
        self.events.push(event.clone());
    }
}
