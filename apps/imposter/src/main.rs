use std::process::ExitCode;

use clap::Parser;
use imposter::config::TopicSourceKind;
use imposter::console::{ConsoleAdapter, GameMode};
use imposter::engine::engine_from_config;
use imposter::{AppError, GameConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod telemetry;

#[derive(Parser, Debug)]
#[command(name = "imposter")]
#[command(about = "Find the impostor who does not know the secret word")]
struct Cli {
    /// Game mode; asked interactively when omitted
    #[arg(long, value_enum)]
    mode: Option<GameMode>,

    /// Use the built-in topic catalogue instead of Wikipedia
    #[arg(long)]
    offline: bool,

    /// Seed for reproducible rounds (overrides IMPOSTER_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the pauses on automated turns
    #[arg(long)]
    no_delay: bool,

    /// Emit logs as JSON on stderr
    #[arg(long)]
    log_json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.log_json);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_input_closed() => {
            eprintln!("\nInput closed. Goodbye!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = GameConfig::from_env()?;
    if cli.offline {
        config.topic_source = TopicSourceKind::Offline;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let mut console = ConsoleAdapter::stdio(cli.mode.unwrap_or(GameMode::Solo), !cli.no_delay);
    if cli.mode.is_none() && console.choose_mode()?.is_none() {
        return Ok(());
    }

    let mut rng = match config.seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };
    let seats = console.gather_lineup(&mut rng)?;

    let mut engine = engine_from_config(&config)?;
    engine.play_round(seats, &mut console)?;
    Ok(())
}
