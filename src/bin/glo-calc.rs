//! Glo Calculator CLI Tool
//!
//! Command-line front-end over the rating engine. Results are printed to
//! stdout as JSON; logs go to stderr.
//!
//! Usage:
//!   cargo run --bin glo-calc -- --help
//!   cargo run --bin glo-calc score --strokes -1
//!   cargo run --bin glo-calc performance --holes 1300,1400 --total-score 1
//!   cargo run --bin glo-calc stream --player 1480 --hole 1300 --performance 1300 --strokes 1
//!   cargo run --bin glo-calc batch --input rounds.json

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glo_rating::config::{validate_config, AppConfig};
use glo_rating::{BatchRatingData, GloCalculator, SolverOptions, StreamRatingData};
use serde_json::json;
use tracing::{debug, info};

#[derive(Parser)]
#[command(name = "glo-calc", version)]
#[command(about = "Compute Glo scores, performance ratings and rating updates")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert strokes to a score
    Score {
        #[arg(short, long, allow_hyphen_values = true)]
        strokes: f64,
    },
    /// Convert a score to strokes
    Strokes {
        #[arg(short, long)]
        score: f64,
    },
    /// Expected score of a player against a hole
    Expected {
        #[arg(long, allow_hyphen_values = true)]
        hole: f64,
        #[arg(long, allow_hyphen_values = true)]
        player: f64,
    },
    /// Player K-factor
    KFactor {
        #[arg(long, allow_hyphen_values = true)]
        player: f64,
    },
    /// Solve a performance rating from hole ratings and a total score
    Performance {
        /// Comma-separated hole ratings
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        holes: Vec<f64>,
        #[arg(long)]
        total_score: f64,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Solve a performance rating from per-hole strokes
    Round {
        /// Comma-separated hole ratings
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        holes: Vec<f64>,
        /// Comma-separated strokes, one per hole
        #[arg(long, value_delimiter = ',', required = true, allow_hyphen_values = true)]
        strokes: Vec<f64>,
        #[command(flatten)]
        bounds: BoundsArgs,
    },
    /// Update a player and a hole from a single round
    Stream {
        #[arg(long, allow_hyphen_values = true)]
        player: f64,
        #[arg(long, allow_hyphen_values = true)]
        hole: f64,
        #[arg(long, allow_hyphen_values = true)]
        performance: f64,
        #[arg(long, allow_hyphen_values = true)]
        strokes: f64,
    },
    /// Update a player from several rounds read from a JSON file
    Batch {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
    /// Print the effective configuration
    Config,
}

#[derive(clap::Args)]
struct BoundsArgs {
    /// Lower search bound
    #[arg(long, allow_hyphen_values = true)]
    min_return: Option<f64>,
    /// Upper search bound
    #[arg(long, allow_hyphen_values = true)]
    max_return: Option<f64>,
    /// Half-interval width at which the search stops
    #[arg(long)]
    tolerance: Option<f64>,
}

impl From<&BoundsArgs> for SolverOptions {
    fn from(args: &BoundsArgs) -> Self {
        SolverOptions {
            min_return: args.min_return,
            max_return: args.max_return,
            tolerance: args.tolerance,
        }
    }
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load configuration from file or environment and apply CLI overrides
fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::from_env()?,
    };

    if let Some(log_level) = &cli.log_level {
        config.service.log_level = log_level.clone();
    }

    validate_config(&config)?;
    Ok(config)
}

fn read_batch(path: &Path) -> Result<BatchRatingData> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch input {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Invalid batch input {}", path.display()))
}

fn run(command: &Commands, calculator: &GloCalculator) -> Result<serde_json::Value> {
    let output = match command {
        Commands::Score { strokes } => json!({ "score": glo_rating::to_score(*strokes) }),
        Commands::Strokes { score } => json!({ "strokes": glo_rating::to_strokes(*score)? }),
        Commands::Expected { hole, player } => {
            json!({ "expected_score": calculator.expected_score(*hole, *player) })
        }
        Commands::KFactor { player } => json!({ "k_factor": calculator.k_factor(*player) }),
        Commands::Performance {
            holes,
            total_score,
            bounds,
        } => {
            let outcome = calculator.solve_performance_rating_detailed(
                holes,
                *total_score,
                &SolverOptions::from(bounds),
            )?;
            serde_json::to_value(outcome)?
        }
        Commands::Round {
            holes,
            strokes,
            bounds,
        } => {
            let rating =
                calculator.round_performance_rating(holes, strokes, &SolverOptions::from(bounds))?;
            json!({
                "total_score": glo_rating::total_score(strokes),
                "performance_rating": rating,
            })
        }
        Commands::Stream {
            player,
            hole,
            performance,
            strokes,
        } => {
            let result = calculator.stream_update(&StreamRatingData {
                player_rating: *player,
                hole_rating: *hole,
                performance_rating: *performance,
                strokes: *strokes,
            });
            serde_json::to_value(result)?
        }
        Commands::Batch { input } => {
            let data = read_batch(input)?;
            info!(rounds = data.hole_ratings.len(), "Running batch update");
            json!({ "player_rating": calculator.batch_update(&data)? })
        }
        Commands::Config => calculator.config(),
    };

    Ok(output)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli).unwrap_or_else(|e| {
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    debug!(?config, "Loaded configuration");
    let calculator = GloCalculator::new(config.rating, config.solver)?;

    let output = run(&cli.command, &calculator)?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
