//! Metrics collection and output for simulated rounds.

use imposter::domain::{OutcomeKind, Role};
use serde::Serialize;

use crate::simulator::RoundResult;
use crate::types::MetricsLevel;

/// Complete round metrics for output.
#[derive(Debug, Clone, Serialize)]
pub struct RoundMetrics {
    pub round_id: u32,
    pub seed: u64,
    pub timestamp: String,
    pub config: SimConfig,
    pub result: RoundResultMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clues: Option<Vec<ClueMetrics>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SimConfig {
    pub players: usize,
    pub insider_ai: String,
    pub impostor_ai: String,
    pub total_rounds: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RoundResultMetrics {
    pub outcome: OutcomeKind,
    pub winner: Role,
    pub topic: String,
    pub impostor: usize,
    pub eliminated: Option<usize>,
    /// Votes received, indexed by seat.
    pub votes: Vec<u32>,
    pub ai_fallbacks: u32,
    pub events: u32,
    pub duration_ms: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClueMetrics {
    pub seat: usize,
    pub subround: u8,
    pub word: String,
    pub by_impostor: bool,
}

/// Inputs that are not part of the round itself.
pub struct RunInfo<'a> {
    pub round_id: u32,
    pub seed: u64,
    pub insider_ai: &'a str,
    pub impostor_ai: &'a str,
    pub total_rounds: u32,
    pub duration_ms: f64,
}

pub fn build_round_metrics(
    info: &RunInfo<'_>,
    result: &RoundResult,
    level: &MetricsLevel,
) -> RoundMetrics {
    let timestamp = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"));

    let report = &result.report;
    let players = report.participants.len();
    let impostor = report.outcome.impostor;

    let clues = match level {
        MetricsLevel::Basic => None,
        MetricsLevel::Detailed => Some(
            report
                .clues
                .iter()
                .map(|c| ClueMetrics {
                    seat: c.participant,
                    subround: c.subround,
                    word: c.word.clone(),
                    by_impostor: c.participant == impostor,
                })
                .collect(),
        ),
    };

    RoundMetrics {
        round_id: info.round_id,
        seed: info.seed,
        timestamp,
        config: SimConfig {
            players,
            insider_ai: info.insider_ai.to_string(),
            impostor_ai: info.impostor_ai.to_string(),
            total_rounds: info.total_rounds,
        },
        result: RoundResultMetrics {
            outcome: report.outcome.kind,
            winner: report.outcome.winner(),
            topic: report.topic.word().to_string(),
            impostor,
            eliminated: report.outcome.eliminated,
            votes: (0..players).map(|seat| report.tally.count(seat)).collect(),
            ai_fallbacks: report.ai_fallbacks,
            events: result.events,
            duration_ms: info.duration_ms,
        },
        clues,
    }
}

/// CSV summary row for quick analysis.
#[derive(Debug, Serialize)]
pub struct CsvSummaryRow {
    pub round_id: u32,
    pub seed: u64,
    pub players: usize,
    pub outcome: &'static str,
    pub winner: &'static str,
    pub topic: String,
    pub impostor: usize,
    pub eliminated: Option<usize>,
    pub insider_ai: String,
    pub impostor_ai: String,
    pub ai_fallbacks: u32,
}

impl From<&RoundMetrics> for CsvSummaryRow {
    fn from(metrics: &RoundMetrics) -> Self {
        CsvSummaryRow {
            round_id: metrics.round_id,
            seed: metrics.seed,
            players: metrics.config.players,
            outcome: metrics.result.outcome.as_str(),
            winner: metrics.result.winner.label(),
            topic: metrics.result.topic.clone(),
            impostor: metrics.result.impostor,
            eliminated: metrics.result.eliminated,
            insider_ai: metrics.config.insider_ai.clone(),
            impostor_ai: metrics.config.impostor_ai.clone(),
            ai_fallbacks: metrics.result.ai_fallbacks,
        }
    }
}
