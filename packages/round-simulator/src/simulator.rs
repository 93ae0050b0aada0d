//! Headless round runner for AI evaluation.
//!
//! Every seat is automated, so the adapter never has to answer a prompt;
//! it only counts what the engine reports.

use imposter::ai::{create_ai, AiConfig, WordPools};
use imposter::domain::rules::MIN_PARTICIPANTS;
use imposter::engine::lineup::automated_seats;
use imposter::engine::{BallotView, ClueAction, RoundAdapter, RoundEvent, RoundReport, TurnView};
use imposter::topic::{CatalogProvider, TopicSource};
use imposter::{AppError, RoundEngine};

use crate::types::AiType;

/// Adapter for rounds without humans.
#[derive(Debug, Default)]
pub struct HeadlessAdapter {
    pub events: u32,
}

impl RoundAdapter for HeadlessAdapter {
    fn get_clue(&mut self, view: &TurnView<'_>) -> Result<ClueAction, AppError> {
        Err(AppError::internal(format!(
            "headless round asked {} for a clue",
            view.name
        )))
    }

    fn get_vote(&mut self, view: &BallotView<'_>) -> Result<usize, AppError> {
        Err(AppError::internal(format!(
            "headless round asked {} for a vote",
            view.name
        )))
    }

    fn show_state(&mut self, _event: &RoundEvent) {
        self.events += 1;
    }
}

/// Result of simulating one round.
#[derive(Debug, Clone)]
pub struct RoundResult {
    pub report: RoundReport,
    /// Events the engine emitted, start to finish.
    pub events: u32,
}

/// One fully automated round on the offline topic catalogue.
pub struct Simulator {
    engine: RoundEngine,
    players: usize,
}

impl Simulator {
    pub fn new(
        players: usize,
        insider_ai: AiType,
        impostor_ai: AiType,
        seed: u64,
    ) -> Result<Self, SimulatorError> {
        if players < MIN_PARTICIPANTS {
            return Err(SimulatorError::InvalidLineup(players));
        }

        let pools = WordPools::default();
        let config = AiConfig::with_seed(seed);
        let insider = create_ai(insider_ai.name(), &pools, &config.for_seat(1))
            .ok_or(SimulatorError::UnknownAi(insider_ai.name()))?;
        let impostor = create_ai(impostor_ai.name(), &pools, &config.for_seat(2))
            .ok_or(SimulatorError::UnknownAi(impostor_ai.name()))?;

        let engine = RoundEngine::new(
            TopicSource::new(Box::new(CatalogProvider::new(Some(seed)))),
            insider,
            impostor,
            pools.filler,
            Some(seed),
        );
        Ok(Self { engine, players })
    }

    pub fn simulate_round(mut self) -> Result<RoundResult, SimulatorError> {
        let mut adapter = HeadlessAdapter::default();
        let report = self
            .engine
            .play_round(automated_seats(self.players), &mut adapter)
            .map_err(SimulatorError::Engine)?;
        Ok(RoundResult {
            report,
            events: adapter.events,
        })
    }
}

/// Errors that can occur during simulation.
#[derive(Debug)]
pub enum SimulatorError {
    /// Fewer seats than a round needs
    InvalidLineup(usize),
    /// AI type the library does not know
    UnknownAi(&'static str),
    /// Engine stopped the round
    Engine(AppError),
}

impl std::fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimulatorError::InvalidLineup(n) => {
                write!(f, "Invalid lineup: {n} players (need at least {MIN_PARTICIPANTS})")
            }
            SimulatorError::UnknownAi(name) => write!(f, "Unknown AI type: {name}"),
            SimulatorError::Engine(err) => write!(f, "Engine error: {err}"),
        }
    }
}

impl std::error::Error for SimulatorError {}
