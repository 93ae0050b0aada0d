//! Shared types for the simulator.

use clap::ValueEnum;

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Per-round JSON lines plus the CSV summary.
    Jsonl,
    /// CSV summary only.
    Csv,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum MetricsLevel {
    Basic,
    /// Also record every clue.
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AiType {
    Pool,
    Random,
}

impl AiType {
    /// Name understood by `imposter::ai::create_ai`.
    pub fn name(&self) -> &'static str {
        match self {
            AiType::Pool => "pool",
            AiType::Random => "random",
        }
    }
}
