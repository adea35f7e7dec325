//! Solve sliding-tile boards with both search engines and report timings.
//!
//! With no arguments this runs the built-in demo: two 3×3 boards, each
//! solved by best-first and iterative-deepening search.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sextant_harness::config::RunConfig;
use sextant_harness::runner::run_config;
use sextant_harness::worlds::sliding_tile::Board;
use sextant_search::policy::Strategy;

#[derive(Parser, Debug)]
#[command(name = "solve_puzzle", about = "Optimal sliding-tile solver")]
struct Cli {
    /// JSON run configuration. Flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Start board as a flat row-major list, e.g. "1,4,8,6,3,0,5,2,7".
    /// Repeat to solve several boards.
    #[arg(long = "board")]
    boards: Vec<Board>,

    /// Engine to run (best_first or iterative_deepening). Repeatable.
    #[arg(long = "strategy")]
    strategies: Vec<Strategy>,

    /// Timing window per engine, in milliseconds.
    #[arg(long)]
    window_ms: Option<u64>,

    /// Abort a search after this many expansions.
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Print reports as JSON instead of text.
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => RunConfig::default(),
        };
        if !self.boards.is_empty() {
            config.boards = self.boards.iter().map(Board::rows).collect();
        }
        if !self.strategies.is_empty() {
            config.strategies.clone_from(&self.strategies);
        }
        if let Some(window_ms) = self.window_ms {
            config.trial_window_ms = window_ms;
        }
        if self.max_expansions.is_some() {
            config.max_expansions = self.max_expansions;
        }
        config.validate().context("invalid run configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.run_config()?;
    let reports = run_config(&config)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            println!("{report}\n");
        }
    }
    Ok(())
}
