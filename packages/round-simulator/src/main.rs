//! Round simulator CLI - plays fully automated rounds in memory.
//!
//! Useful for comparing AI policies: every round's outcome goes to a CSV
//! summary, optionally with per-round JSON lines.

mod metrics;
mod output;
mod simulator;
mod types;

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use imposter::domain::{OutcomeKind, Role};
use metrics::{build_round_metrics, RunInfo};
use output::OutputWriter;
use simulator::{RoundResult, Simulator};
use tracing::{info, warn};
use types::{AiType, MetricsLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "round-simulator")]
#[command(about = "Fast in-memory round simulator for comparing AI policies")]
struct Args {
    /// Number of rounds to simulate
    #[arg(short, long, default_value = "1")]
    rounds: u32,

    /// Players per round (all automated)
    #[arg(short, long, default_value = "5", value_parser = clap::value_parser!(u8).range(3..=10))]
    players: u8,

    /// AI type for insiders
    #[arg(long, default_value = "pool")]
    insider_ai: AiType,

    /// AI type for the impostor
    #[arg(long, default_value = "pool")]
    impostor_ai: AiType,

    /// Base seed; round N uses seed + N
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: PathBuf,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,

    /// Compress the JSON lines file
    #[arg(long)]
    compress: bool,

    /// Metrics detail level
    #[arg(long, default_value = "basic")]
    metrics_level: MetricsLevel,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Silent by default, only show warnings/errors
    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if args.show_output {
        info!(
            rounds = args.rounds,
            players = args.players,
            insider_ai = args.insider_ai.name(),
            impostor_ai = args.impostor_ai.name(),
            "starting round simulator"
        );
    }

    let mut output_writer =
        OutputWriter::new(&args.output_dir, &args.output_format, args.compress)?;

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for round_id in 1..=args.rounds {
        let round_start = Instant::now();
        let seed = match args.seed {
            Some(s) => s.wrapping_add(u64::from(round_id)),
            None => rand::random(),
        };

        let round = Simulator::new(
            usize::from(args.players),
            args.insider_ai,
            args.impostor_ai,
            seed,
        )
        .and_then(Simulator::simulate_round);

        match round {
            Ok(result) => {
                let info = RunInfo {
                    round_id,
                    seed,
                    insider_ai: args.insider_ai.name(),
                    impostor_ai: args.impostor_ai.name(),
                    total_rounds: args.rounds,
                    duration_ms: round_start.elapsed().as_secs_f64() * 1000.0,
                };
                let metrics = build_round_metrics(&info, &result, &args.metrics_level);
                if let Err(e) = output_writer.write_round(&metrics) {
                    warn!(round_id, error = %e, "failed to write metrics");
                }
                if args.verbose {
                    info!(
                        round_id,
                        outcome = result.report.outcome.kind.as_str(),
                        topic = %result.report.topic.word(),
                        "round completed"
                    );
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(round_id, error = %e, "round failed");
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.cloned(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        if let Some(path) = jsonl_path {
            info!("Detailed results written to: {}", path.display());
        }
        info!("Summary CSV written to: {}", csv_path.display());
        print_summary(&results, errors, elapsed, args.rounds);
    }

    Ok(())
}

fn print_summary(results: &[RoundResult], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Rounds completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!(
        "Average time per round: {:?}",
        elapsed / results.len() as u32
    );

    let mut by_outcome: BTreeMap<&'static str, u32> = BTreeMap::new();
    let mut impostor_wins = 0u32;
    let mut fallbacks = 0u32;
    for result in results {
        let kind = result.report.outcome.kind;
        *by_outcome.entry(kind.as_str()).or_insert(0) += 1;
        if kind.winner() == Role::Impostor {
            impostor_wins += 1;
        }
        fallbacks += result.report.ai_fallbacks;
    }

    println!("\n=== Outcomes ===");
    for kind in OutcomeKind::ALL {
        let count = by_outcome.get(kind.as_str()).copied().unwrap_or(0);
        let pct = (count as f64 / results.len() as f64) * 100.0;
        println!("{}: {} ({:.1}%)", kind.as_str(), count, pct);
    }
    let impostor_rate = (impostor_wins as f64 / results.len() as f64) * 100.0;
    println!("Impostor win rate: {impostor_rate:.1}%");
    if fallbacks > 0 {
        println!("AI fallbacks: {fallbacks}");
    }
}
