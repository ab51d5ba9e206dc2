use nqueens_core::{BoardSize, Solution};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::{
    BacktrackSolver, BacktrackStats, MinConflictsConfig, MinConflictsSolver, MinConflictsStats,
    SolverError,
};

/// An N-Queens solver bound to one board size.
///
/// `QueensSolver` owns the solution set produced by [`solve`](Self::solve)
/// and the random source consumed by
/// [`solve_probabilistic`](Self::solve_probabilistic). The two methods are
/// independent: the stochastic search never reads or writes the solution set.
///
/// The random source defaults to [`Pcg64`]; any [`Rng`] can be injected with
/// [`with_rng`](Self::with_rng).
///
/// # Examples
///
/// ```
/// use nqueens_solver::QueensSolver;
///
/// let mut solver = QueensSolver::new(8, Some(42))?;
///
/// solver.solve();
/// assert_eq!(solver.solution_count(), 92);
///
/// if let Some(solution) = solver.solve_probabilistic(10_000, 50) {
///     println!("{}", solution.board());
/// }
/// # Ok::<(), nqueens_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct QueensSolver<R = Pcg64> {
    size: BoardSize,
    solutions: Vec<Solution>,
    backtrack_stats: BacktrackStats,
    min_conflicts_stats: MinConflictsStats,
    rng: R,
}

impl QueensSolver<Pcg64> {
    /// Creates a solver for an `n × n` board.
    ///
    /// With a `seed`, the random source is seeded deterministically so that
    /// [`solve_probabilistic`](Self::solve_probabilistic) is reproducible for
    /// the same sequence of calls. Without one, it is seeded from the
    /// thread-local generator.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidArgument`] if `n < 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_solver::{QueensSolver, SolverError};
    ///
    /// assert!(QueensSolver::new(1, None).is_ok());
    /// assert!(matches!(
    ///     QueensSolver::new(0, None),
    ///     Err(SolverError::InvalidArgument(_))
    /// ));
    /// ```
    pub fn new(n: i64, seed: Option<u64>) -> Result<Self, SolverError> {
        let size = BoardSize::try_from(n)?;
        let rng = match seed {
            Some(seed) => Pcg64::seed_from_u64(seed),
            None => Pcg64::from_rng(&mut rand::rng()),
        };
        Ok(Self::with_rng(size, rng))
    }
}

impl<R> QueensSolver<R>
where
    R: Rng,
{
    /// Creates a solver that draws its randomness from `rng`.
    #[must_use]
    pub fn with_rng(size: BoardSize, rng: R) -> Self {
        Self {
            size,
            solutions: Vec::new(),
            backtrack_stats: BacktrackStats::default(),
            min_conflicts_stats: MinConflictsStats::default(),
            rng,
        }
    }

    /// Returns the board size.
    #[must_use]
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Enumerates every solution, replacing the current solution set.
    ///
    /// Solutions are stored in lexicographic order of their rows. Calling
    /// this twice yields the same set in the same order.
    pub fn solve(&mut self) {
        BacktrackSolver::new(self.size)
            .solve_into(&mut self.solutions, &mut self.backtrack_stats);
    }

    /// Searches for one solution with the min-conflicts heuristic.
    ///
    /// Performs up to `restarts` random restarts of at most `max_steps` moves
    /// each. Returns `None` when the budget runs out, which is a normal
    /// outcome: the heuristic can miss solutions, and boards of size 2 and 3
    /// have none. The solution set is left untouched.
    pub fn solve_probabilistic(&mut self, max_steps: usize, restarts: usize) -> Option<Solution> {
        let config = MinConflictsConfig {
            max_steps,
            restarts,
        };
        self.solve_probabilistic_with(config)
    }

    /// Like [`solve_probabilistic`](Self::solve_probabilistic), taking the
    /// budgets as a [`MinConflictsConfig`].
    pub fn solve_probabilistic_with(&mut self, config: MinConflictsConfig) -> Option<Solution> {
        let (solution, stats) = MinConflictsSolver::new(self.size, config).solve(&mut self.rng);
        self.min_conflicts_stats = stats;
        solution
    }

    /// Returns the number of stored solutions.
    #[must_use]
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    /// Returns the stored solutions in enumeration order.
    #[must_use]
    pub fn solutions(&self) -> &[Solution] {
        &self.solutions
    }

    /// Discards the stored solutions.
    pub fn clear(&mut self) {
        self.solutions.clear();
    }

    /// Returns statistics of the last [`solve`](Self::solve).
    #[must_use]
    pub fn backtrack_stats(&self) -> BacktrackStats {
        self.backtrack_stats
    }

    /// Returns statistics of the last stochastic search.
    #[must_use]
    pub fn min_conflicts_stats(&self) -> MinConflictsStats {
        self.min_conflicts_stats
    }
}

#[cfg(test)]
mod tests {
    use nqueens_core::BoardSizeError;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_new_rejects_non_positive_sizes() {
        for n in [0, -1, i64::MIN] {
            let err = QueensSolver::new(n, None).unwrap_err();
            assert_eq!(
                err,
                SolverError::InvalidArgument(BoardSizeError::NotPositive { size: n })
            );
        }
    }

    #[test]
    fn test_error_message() {
        let err = QueensSolver::new(0, None).unwrap_err();
        assert_eq!(err.to_string(), "invalid argument: board size must be >= 1, got 0");
    }

    #[test]
    fn test_single_queen() {
        let mut solver = QueensSolver::new(1, None).unwrap();
        solver.solve();
        assert_eq!(solver.solution_count(), 1);
        assert_eq!(solver.solutions()[0].rows(), [0]);

        for _ in 0..10 {
            assert_eq!(solver.solve_probabilistic(1, 1).unwrap().rows(), [0]);
        }
    }

    #[test]
    fn test_solution_counts() {
        let expected = [(1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4), (7, 40), (8, 92)];
        for (n, count) in expected {
            let mut solver = QueensSolver::new(n, Some(0)).unwrap();
            solver.solve();
            assert_eq!(solver.solution_count(), count, "n={n}");
            assert_eq!(solver.backtrack_stats().solutions_found(), count);
        }
    }

    #[test]
    fn test_solve_is_idempotent() {
        let mut solver = QueensSolver::new(6, None).unwrap();
        solver.solve();
        let first = solver.solutions().to_vec();
        solver.solve();
        assert_eq!(solver.solutions(), first);
    }

    #[test]
    fn test_clear() {
        let mut solver = QueensSolver::new(4, None).unwrap();
        solver.solve();
        solver.clear();
        assert_eq!(solver.solution_count(), 0);
    }

    #[test]
    fn test_probabilistic_leaves_solutions_untouched() {
        let mut solver = QueensSolver::new(5, Some(3)).unwrap();
        solver.solve();
        let before = solver.solutions().to_vec();
        let _ = solver.solve_probabilistic(1_000, 10);
        assert_eq!(solver.solutions(), before);
    }

    #[test]
    fn test_probabilistic_is_reproducible_with_seed() {
        for n in [4, 8, 20] {
            let first = QueensSolver::new(n, Some(2024))
                .unwrap()
                .solve_probabilistic(10_000, 50);
            let second = QueensSolver::new(n, Some(2024))
                .unwrap()
                .solve_probabilistic(10_000, 50);
            assert!(first.is_some(), "n={n}");
            assert_eq!(first, second, "n={n}");
        }
    }

    #[test]
    fn test_probabilistic_call_sequence_is_reproducible() {
        let run = || {
            let mut solver = QueensSolver::new(10, Some(9)).unwrap();
            (0..3)
                .map(|_| solver.solve_probabilistic(10_000, 50))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_probabilistic_unsolvable_sizes() {
        for n in [2, 3] {
            let mut solver = QueensSolver::new(n, Some(1)).unwrap();
            assert!(solver.solve_probabilistic(200, 10).is_none());
            assert_eq!(solver.min_conflicts_stats().restarts(), 10);
        }
    }

    #[test]
    fn test_with_injected_rng() {
        let size = BoardSize::new(1).unwrap();
        let mut solver = QueensSolver::with_rng(size, Pcg32::seed_from_u64(5));
        assert_eq!(solver.size(), size);
        assert!(solver.solve_probabilistic(1, 1).is_some());
    }
}
