//! Command-line front end for the N-Queens solvers.
//!
//! # Usage
//!
//! Count all solutions of the 8-queens problem:
//!
//! ```sh
//! cargo run --bin nqueens
//! ```
//!
//! Print the first three solutions of a 6 × 6 board with their boards:
//!
//! ```sh
//! cargo run --bin nqueens -- -n 6 --show-solutions --show-board --print-limit 3
//! ```
//!
//! Find one solution of a large board with min-conflicts:
//!
//! ```sh
//! cargo run --bin nqueens -- -n 200 --method min-conflicts --seed 42
//! ```
//!
//! Print the backtracking table for n = 4..8:
//!
//! ```sh
//! cargo run --bin nqueens -- --experiment
//! ```

use std::{
    io::{self, Write},
    process,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use nqueens_solver::{MinConflictsConfig, QueensSolver, SolverError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Method {
    /// Enumerate every solution by backtracking.
    Backtracking,
    /// Search for one solution with min-conflicts local search.
    MinConflicts,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Print the backtracking table for n = 4..8 and exit.
    #[arg(long)]
    experiment: bool,

    /// Board size.
    #[arg(
        short = 'n',
        long = "size",
        value_name = "N",
        default_value_t = 8,
        allow_negative_numbers = true
    )]
    size: i64,

    /// Seed for the min-conflicts random source.
    ///
    /// Negative seeds are accepted and reinterpreted as their 64-bit
    /// two's-complement pattern.
    #[arg(long, value_name = "SEED", allow_negative_numbers = true)]
    seed: Option<i64>,

    /// Solving method.
    #[arg(long, value_name = "METHOD", default_value = "backtracking")]
    method: Method,

    /// Print the solutions found.
    #[arg(long)]
    show_solutions: bool,

    /// Print an ASCII board for each printed solution.
    #[arg(long)]
    show_board: bool,

    /// Maximum number of solutions to print. Negative values print none.
    #[arg(
        long,
        value_name = "COUNT",
        default_value_t = 5,
        allow_negative_numbers = true
    )]
    print_limit: i64,

    /// Maximum min-conflicts moves per restart.
    #[arg(long, value_name = "STEPS", default_value_t = MinConflictsConfig::DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Number of min-conflicts random restarts.
    #[arg(long, value_name = "COUNT", default_value_t = MinConflictsConfig::DEFAULT_RESTARTS)]
    restarts: usize,
}

impl Args {
    fn seed(&self) -> Option<u64> {
        self.seed.map(|seed| u64::from_le_bytes(seed.to_le_bytes()))
    }

    fn print_limit(&self) -> usize {
        usize::try_from(self.print_limit).unwrap_or(0)
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Solver(#[from] SolverError),
    #[display("failed to write output: {_0}")]
    Io(#[from] io::Error),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    log::debug!("{args:?}");

    let mut out = io::stdout().lock();
    let result = if args.experiment {
        run_experiment(&mut out)
    } else {
        match args.method {
            Method::Backtracking => run_backtracking(&args, &mut out),
            Method::MinConflicts => run_min_conflicts(&args, &mut out),
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(2);
    }
}

fn run_backtracking(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let mut solver = QueensSolver::new(args.size, args.seed())?;

    let start = Instant::now();
    solver.solve();
    let elapsed = start.elapsed().as_secs_f64();

    writeln!(
        out,
        "n={}: {} solutions in {elapsed:.4}s",
        args.size,
        solver.solution_count()
    )?;

    if args.show_solutions {
        let shown = solver.solutions().iter().take(args.print_limit());
        for (i, solution) in shown.enumerate() {
            writeln!(out, "- Solution {}: {solution}", i + 1)?;
            if args.show_board {
                writeln!(out, "{}\n", solution.board())?;
            }
        }
    }
    Ok(())
}

fn run_min_conflicts(args: &Args, out: &mut impl Write) -> Result<(), CliError> {
    let mut solver = QueensSolver::new(args.size, args.seed())?;

    let start = Instant::now();
    let solution = solver.solve_probabilistic(args.max_steps, args.restarts);
    let elapsed = start.elapsed().as_secs_f64();

    let Some(solution) = solution else {
        writeln!(
            out,
            "No min-conflicts solution found for n={} ({elapsed:.4}s).",
            args.size
        )?;
        return Ok(());
    };

    writeln!(
        out,
        "Min-conflicts solution found for n={} in {elapsed:.4}s:",
        args.size
    )?;
    writeln!(out, "{solution}")?;
    if args.show_board {
        writeln!(out, "{}", solution.board())?;
    }
    Ok(())
}

fn run_experiment(out: &mut impl Write) -> Result<(), CliError> {
    writeln!(out, "N-Queens results (backtracking)\n")?;
    writeln!(
        out,
        "{:>2}  {:>9}  {:>12}  {:>10}",
        "n", "Exists?", "Solutions", "Time (s)"
    )?;
    writeln!(out, "{}", "-".repeat(40))?;

    for n in 4..=8 {
        let mut solver = QueensSolver::new(n, None)?;
        let start = Instant::now();
        solver.solve();
        let elapsed = start.elapsed().as_secs_f64();

        let count = solver.solution_count();
        let exists = if count > 0 { "Yes" } else { "No" };
        writeln!(out, "{n:>2}  {exists:>9}  {count:>12}  {elapsed:>10.4}")?;
    }
    Ok(())
}
