//! Harness runner: solve configured boards with each configured engine and
//! time the solves.
//!
//! # Pipeline
//!
//! ```text
//! RunConfig::parsed_boards() → is_solvable()?
//!   → [run_trials() × strategies] → Solution::verify() → BoardReport
//! ```
//!
//! Unsolvable boards are reported and skipped without searching: on a 3×3
//! board either engine would have to exhaust half the permutation space
//! before giving up.

use std::fmt;
use std::time::{Duration, Instant};

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use sextant_kernel::carrier::cost::Cost;
use sextant_kernel::problem::Problem;
use sextant_kernel::proof::replay::ReplayError;
use sextant_search::error::SearchError;
use sextant_search::policy::{SearchPolicy, Strategy};
use sextant_search::search::{search, SearchResult, TerminationReason};
use sextant_search::stats::SearchStats;

use crate::config::{ConfigError, RunConfig};
use crate::worlds::sliding_tile::{Board, SlidingTileProblem};

/// Error during a harness run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The run configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A search was rejected before it started.
    #[error(transparent)]
    Search(#[from] SearchError),
    /// A returned solution failed replay against its board.
    #[error("solution for board #{index} failed replay: {source}")]
    Replay { index: usize, source: ReplayError },
}

/// Timing and outcome of one engine on one problem.
#[derive(Debug, Clone, Serialize)]
pub struct TrialReport {
    pub strategy: Strategy,
    pub termination_reason: TerminationReason,
    pub solution_cost: Option<Cost>,
    pub solution_length: Option<usize>,
    /// Rendered actions of the solution, in order.
    pub actions: Vec<String>,
    /// Number of complete solves inside the timing window (at least 1).
    pub trials: u32,
    /// Mean wall-clock time per solve.
    pub mean_ms: f64,
    /// Counters from the first solve.
    pub stats: SearchStats,
    #[serde(skip)]
    rendered: Option<String>,
}

impl TrialReport {
    /// Human-readable solution listing, if a goal was reached.
    #[must_use]
    pub fn rendered_solution(&self) -> Option<&str> {
        self.rendered.as_deref()
    }
}

/// Solve `problem` repeatedly under `policy` until `window` has elapsed.
///
/// The first solve is always performed and counted, so a zero window yields
/// exactly one trial. Every repeat runs a fresh search, so the mean reflects
/// full solve cost rather than warm state.
///
/// # Errors
///
/// Returns [`SearchError`] if `policy` fails validation.
pub fn run_trials<P>(
    problem: &P,
    policy: &SearchPolicy,
    window: Duration,
) -> Result<(SearchResult<P::Action>, TrialReport), SearchError>
where
    P: Problem,
    P::Action: fmt::Display,
{
    let started = Instant::now();
    let first = search(problem, policy)?;
    let mut trials: u32 = 1;
    while started.elapsed() < window {
        search(problem, policy)?;
        trials = trials.saturating_add(1);
    }
    let mean_ms = started.elapsed().as_secs_f64() * 1000.0 / f64::from(trials);

    let report = TrialReport {
        strategy: first.strategy,
        termination_reason: first.termination_reason,
        solution_cost: first.solution.as_ref().map(|s| s.cost()),
        solution_length: first.solution.as_ref().map(|s| s.len()),
        actions: first
            .solution
            .as_ref()
            .map(|s| s.actions().iter().map(ToString::to_string).collect())
            .unwrap_or_default(),
        trials,
        mean_ms,
        stats: first.stats.clone(),
        rendered: first.solution.as_ref().map(ToString::to_string),
    };
    Ok((first, report))
}

/// Everything the harness learned about one configured board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardReport {
    pub board: Vec<Vec<u8>>,
    pub solvable: bool,
    /// One entry per configured strategy; empty for unsolvable boards.
    pub trials: Vec<TrialReport>,
}

impl BoardReport {
    fn compact_board(&self) -> String {
        let rows: Vec<String> = self
            .board
            .iter()
            .map(|row| {
                let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
                format!("[{}]", cells.join(","))
            })
            .collect();
        format!("[{}]", rows.join(","))
    }
}

impl fmt::Display for BoardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.compact_board();
        if !self.solvable {
            return write!(f, "{board} is not solvable");
        }
        for (i, trial) in self.trials.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match trial.rendered_solution() {
                Some(solution) => write!(
                    f,
                    "{solution}\nto {board} took {:.3}ms to find with {}",
                    trial.mean_ms, trial.strategy
                )?,
                None => write!(
                    f,
                    "no solution to {board} with {} ({:?} after {} expansions)",
                    trial.strategy, trial.termination_reason, trial.stats.expansions
                )?,
            }
        }
        Ok(())
    }
}

/// Solve and time one board with every configured policy.
///
/// # Errors
///
/// Returns [`RunError`] if a policy is invalid or a solution fails replay.
pub fn run_board(config: &RunConfig, index: usize, board: Board) -> Result<BoardReport, RunError> {
    let rows = board.rows();
    if !board.is_solvable() {
        warn!(board = index, "board is not solvable; skipping");
        return Ok(BoardReport {
            board: rows,
            solvable: false,
            trials: Vec::new(),
        });
    }

    let problem = SlidingTileProblem::new(board);
    let mut trials = Vec::with_capacity(config.strategies.len());
    for policy in config.policies() {
        let (result, report) = run_trials(&problem, &policy, config.trial_window())?;
        if let Some(solution) = &result.solution {
            solution
                .verify(&problem)
                .map_err(|source| RunError::Replay { index, source })?;
        }
        info!(
            board = index,
            strategy = %report.strategy,
            cost = report.solution_cost,
            trials = report.trials,
            mean_ms = report.mean_ms,
            expansions = report.stats.expansions,
            "board solved"
        );
        trials.push(report);
    }
    Ok(BoardReport {
        board: rows,
        solvable: true,
        trials,
    })
}

/// Run every board in `config`.
///
/// # Errors
///
/// Returns the first [`RunError`] encountered.
pub fn run_config(config: &RunConfig) -> Result<Vec<BoardReport>, RunError> {
    config.validate()?;
    config
        .parsed_boards()?
        .into_iter()
        .enumerate()
        .map(|(index, board)| run_board(config, index, board))
        .collect()
}
