//! Min-conflicts local search.
//!
//! The search starts from a random placement with one queen per column and
//! repeatedly moves a randomly chosen attacked queen to a row with the fewest
//! conflicts in its column. When a run of steps fails to remove every
//! conflict, it restarts from a fresh random placement.
//!
//! The search is incomplete: it may give up on boards that have solutions.
//! All randomness comes from the caller's random source, so a seeded source
//! reproduces the same run.

use nqueens_core::{BoardSize, Placement, Solution};
use rand::{Rng, seq::IndexedRandom as _};

/// Step and restart budgets for [`MinConflictsSolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinConflictsConfig {
    /// Maximum number of moves per restart.
    pub max_steps: usize,
    /// Maximum number of random restarts.
    pub restarts: usize,
}

impl MinConflictsConfig {
    /// Default moves per restart.
    pub const DEFAULT_MAX_STEPS: usize = 10_000;
    /// Default number of restarts.
    pub const DEFAULT_RESTARTS: usize = 50;
}

impl Default for MinConflictsConfig {
    fn default() -> Self {
        Self {
            max_steps: Self::DEFAULT_MAX_STEPS,
            restarts: Self::DEFAULT_RESTARTS,
        }
    }
}

/// Statistics collected during a min-conflicts search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinConflictsStats {
    restarts: usize,
    steps: usize,
}

impl MinConflictsStats {
    /// Returns the number of random placements generated.
    #[must_use]
    pub fn restarts(&self) -> usize {
        self.restarts
    }

    /// Returns the total number of queen moves across all restarts.
    #[must_use]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Searches for a single solution with the min-conflicts heuristic.
///
/// # Examples
///
/// ```
/// use nqueens_solver::{BoardSize, MinConflictsConfig, MinConflictsSolver};
/// use rand::SeedableRng;
/// use rand_pcg::Pcg64;
///
/// let solver = MinConflictsSolver::new(BoardSize::new(8)?, MinConflictsConfig::default());
/// let mut rng = Pcg64::seed_from_u64(7);
///
/// let (solution, stats) = solver.solve(&mut rng);
/// if let Some(solution) = solution {
///     println!("{solution} after {} moves", stats.steps());
/// }
/// # Ok::<(), nqueens_solver::BoardSizeError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MinConflictsSolver {
    size: BoardSize,
    config: MinConflictsConfig,
}

impl MinConflictsSolver {
    /// Creates a solver for an `n × n` board with the given budgets.
    #[must_use]
    pub fn new(size: BoardSize, config: MinConflictsConfig) -> Self {
        Self { size, config }
    }

    /// Runs the search and returns the first solution found, if any.
    pub fn solve<R>(&self, rng: &mut R) -> (Option<Solution>, MinConflictsStats)
    where
        R: Rng + ?Sized,
    {
        let mut stats = MinConflictsStats::default();
        let solution = self.solve_with_stats(rng, &mut stats);
        (solution, stats)
    }

    /// Runs the search, accumulating into `stats`.
    ///
    /// Each restart draws a fresh random placement and performs up to
    /// `max_steps` moves. A move picks one attacked column uniformly at
    /// random and places its queen on one of the rows with the fewest
    /// conflicts, again chosen uniformly. The first conflict-free placement
    /// is returned immediately; `None` means every restart ran out of moves.
    pub fn solve_with_stats<R>(
        &self,
        rng: &mut R,
        stats: &mut MinConflictsStats,
    ) -> Option<Solution>
    where
        R: Rng + ?Sized,
    {
        let n = self.size.get();
        let mut conflicted = Vec::with_capacity(n);
        let mut best_rows = Vec::with_capacity(n);

        for restart in 0..self.config.restarts {
            stats.restarts += 1;
            let mut placement = random_placement(self.size, rng);

            for _ in 0..self.config.max_steps {
                collect_conflicted_columns(&placement, &mut conflicted);
                let Some(&column) = conflicted.choose(rng) else {
                    log::debug!(
                        "min-conflicts n={n}: solved on restart {restart} after {} moves",
                        stats.steps
                    );
                    return placement.to_solution();
                };

                collect_min_conflict_rows(&placement, column, &mut best_rows);
                if let Some(&row) = best_rows.choose(rng) {
                    placement.set(column, row);
                }
                stats.steps += 1;
            }
            log::trace!("min-conflicts n={n}: restart {restart} exhausted its moves");
        }

        log::debug!(
            "min-conflicts n={n}: no solution after {} restarts",
            self.config.restarts
        );
        None
    }
}

fn random_placement<R>(size: BoardSize, rng: &mut R) -> Placement
where
    R: Rng + ?Sized,
{
    let n = size.get();
    let mut placement = Placement::new(size);
    for column in 0..n {
        placement.set(column, rng.random_range(0..n));
    }
    placement
}

fn collect_conflicted_columns(placement: &Placement, out: &mut Vec<usize>) {
    out.clear();
    out.extend(
        placement
            .iter()
            .enumerate()
            .filter_map(|(column, row)| Some((column, row?)))
            .filter(|&(column, row)| placement.conflicts_at(column, row) > 0)
            .map(|(column, _)| column),
    );
}

fn collect_min_conflict_rows(placement: &Placement, column: usize, out: &mut Vec<usize>) {
    out.clear();
    let mut best = usize::MAX;
    for row in 0..placement.size() {
        let conflicts = placement.conflicts_at(column, row);
        if conflicts < best {
            best = conflicts;
            out.clear();
        }
        if conflicts == best {
            out.push(row);
        }
    }
}
