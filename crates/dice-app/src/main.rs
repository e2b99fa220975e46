//! # Dice - Press a button, get a face
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring           │
//! │    │                                                            │
//! │    ├── Creates: ThreadRngRollEngine / SeededRollEngine (adapter)│
//! │    ├── Creates: RollCoordinator (use case)                      │
//! │    ├── Subscribes: DieFacePresenter / JsonReportPresenter       │
//! │    └── Runs: one-shot rolls or the interactive loop             │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Usage:
//!   dice                      - Interactive mode
//!   dice roll [-n N]          - Roll N times and exit
//!   dice --json roll          - JSON lines output
//!   dice --seed 42 roll -n 5  - Reproducible rolls

mod commands;
mod config;
mod error;
mod interactive;
mod wiring;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dice_adapter::FaceStyle;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::RollCommand;
use config::{AppConfig, ConfigOverrides};
use interactive::InteractiveCli;

#[derive(Parser)]
#[command(name = "dice")]
#[command(about = "Dice - roll a six-sided die")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible rolls
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Face style: digit, glyph or ascii
    #[arg(long, global = true)]
    style: Option<FaceStyle>,

    /// Output as JSON lines
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll the die and exit
    Roll(RollCommand),
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            seed: self.seed,
            style: self.style,
            json: self.json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging (stderr, so stdout stays clean for rolls)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())
        .with_context(|| match &cli.config {
            Some(path) => format!("Failed to load config from {}", path.display()),
            None => "Failed to load default config".to_string(),
        })?
        .with_overrides(cli.overrides());

    info!(?config, "Configuration resolved");

    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    let mut coordinator = wiring::build_coordinator(&config)?;
    let mode = config.output();
    wiring::attach_presenter(&mut coordinator, mode, io::stdout());

    match cli.command {
        Some(Commands::Roll(cmd)) => {
            let last = cmd.run(&mut coordinator);
            info!(generation = last.generation(), value = last.value(), "Done");
            Ok(())
        }
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            let mut stderr = io::stderr();
            InteractiveCli::new(&mut coordinator, mode).run(
                stdin.lock(),
                &mut stdout,
                &mut stderr,
            )
        }
    }
}
