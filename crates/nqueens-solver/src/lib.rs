//! N-Queens solvers.
//!
//! Two independent strategies share the board representation of
//! [`nqueens_core`]:
//!
//! - [`BacktrackSolver`] enumerates every solution by depth-first search over
//!   columns, in lexicographic order.
//! - [`MinConflictsSolver`] looks for a single solution with randomized local
//!   search and may give up within its budget.
//!
//! [`QueensSolver`] bundles both behind one board size, stores the
//! enumerated solutions and owns the random source of the local search.
//!
//! # Examples
//!
//! ```
//! use nqueens_solver::QueensSolver;
//!
//! let mut solver = QueensSolver::new(6, Some(1))?;
//! solver.solve();
//! for solution in solver.solutions() {
//!     println!("{solution}");
//! }
//!
//! match solver.solve_probabilistic(10_000, 50) {
//!     Some(solution) => println!("found {solution}"),
//!     None => println!("no solution within budget"),
//! }
//! # Ok::<(), nqueens_solver::SolverError>(())
//! ```

pub use nqueens_core::{BoardDisplay, BoardSize, BoardSizeError, Placement, Solution};

pub use self::{
    backtrack::{BacktrackSolver, BacktrackStats},
    error::*,
    min_conflicts::{MinConflictsConfig, MinConflictsSolver, MinConflictsStats},
    queens_solver::*,
};

pub mod backtrack;
mod error;
pub mod min_conflicts;
mod queens_solver;
