//! Exhaustive enumeration by backtracking.

use nqueens_core::{BoardSize, Placement, Solution};

/// Statistics collected during a backtracking search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BacktrackStats {
    nodes_visited: usize,
    solutions_found: usize,
}

impl BacktrackStats {
    /// Returns the number of queens placed during the search.
    ///
    /// Every row that passed the pruning test counts once, including those
    /// that were later undone.
    #[must_use]
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Returns the number of complete solutions reached.
    #[must_use]
    pub fn solutions_found(&self) -> usize {
        self.solutions_found
    }
}

/// Enumerates every solution of the N-Queens problem for a fixed board size.
///
/// The search fills columns left to right and tries rows in ascending order,
/// undoing each placement before trying the next row. Solutions are therefore
/// produced in lexicographic order of their row vectors.
///
/// # Examples
///
/// ```
/// use nqueens_solver::{BacktrackSolver, BoardSize};
///
/// let solver = BacktrackSolver::new(BoardSize::new(4)?);
/// let (solutions, stats) = solver.solve();
///
/// assert_eq!(solutions.len(), 2);
/// assert_eq!(solutions[0].rows(), [1, 3, 0, 2]);
/// assert_eq!(stats.solutions_found(), 2);
/// # Ok::<(), nqueens_solver::BoardSizeError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BacktrackSolver {
    size: BoardSize,
}

impl BacktrackSolver {
    /// Creates a solver for an `n × n` board.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self { size }
    }

    /// Enumerates all solutions.
    #[must_use]
    pub fn solve(&self) -> (Vec<Solution>, BacktrackStats) {
        let mut solutions = Vec::new();
        let mut stats = BacktrackStats::default();
        self.solve_into(&mut solutions, &mut stats);
        (solutions, stats)
    }

    /// Enumerates all solutions into `solutions`.
    ///
    /// `solutions` and `stats` are reset first, so repeated calls with the
    /// same buffers always end with the same contents.
    pub fn solve_into(&self, solutions: &mut Vec<Solution>, stats: &mut BacktrackStats) {
        solutions.clear();
        *stats = BacktrackStats::default();

        let mut placement = Placement::new(self.size);
        self.search(0, &mut placement, solutions, stats);

        log::debug!(
            "backtracking n={}: {} solutions, {} nodes",
            self.size.get(),
            stats.solutions_found,
            stats.nodes_visited
        );
    }

    fn search(
        &self,
        column: usize,
        placement: &mut Placement,
        solutions: &mut Vec<Solution>,
        stats: &mut BacktrackStats,
    ) {
        let n = self.size.get();
        if column == n {
            let solution = placement.to_solution();
            debug_assert!(solution.is_some(), "pruning let an attacked queen through");
            if let Some(solution) = solution {
                solutions.push(solution);
                stats.solutions_found += 1;
            }
            return;
        }

        for row in 0..n {
            if placement.is_valid(row, column) {
                stats.nodes_visited += 1;
                placement.set(column, row);
                self.search(column + 1, placement, solutions, stats);
                placement.clear(column);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(n: usize) -> (Vec<Solution>, BacktrackStats) {
        BacktrackSolver::new(BoardSize::new(n).unwrap()).solve()
    }

    #[test]
    fn test_known_solution_counts() {
        let expected = [(1, 1), (2, 0), (3, 0), (4, 2), (5, 10), (6, 4), (7, 40), (8, 92)];
        for (n, count) in expected {
            let (solutions, stats) = solve(n);
            assert_eq!(solutions.len(), count, "n={n}");
            assert_eq!(stats.solutions_found(), count, "n={n}");
        }
    }

    #[test]
    fn test_single_queen() {
        let (solutions, stats) = solve(1);
        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].rows(), [0]);
        assert_eq!(stats.nodes_visited(), 1);
    }

    #[test]
    fn test_dead_ends_are_counted() {
        assert_eq!(solve(2).1.nodes_visited(), 2);
        assert_eq!(solve(3).1.nodes_visited(), 5);
    }

    #[test]
    fn test_solutions_are_pairwise_non_attacking() {
        for n in 1..=8 {
            for solution in solve(n).0 {
                let rows = solution.rows();
                assert_eq!(rows.len(), n);
                for i in 0..n {
                    for j in (i + 1)..n {
                        assert_ne!(rows[i], rows[j]);
                        assert_ne!(rows[i].abs_diff(rows[j]), j - i);
                    }
                }
            }
        }
    }

    #[test]
    fn test_solution_order() {
        let (solutions, _) = solve(4);
        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].rows(), [1, 3, 0, 2]);
        assert_eq!(solutions[1].rows(), [2, 0, 3, 1]);

        let (solutions, _) = solve(5);
        assert_eq!(solutions[0].rows(), [0, 2, 4, 1, 3]);

        let (solutions, _) = solve(8);
        assert_eq!(solutions[0].rows(), [0, 4, 7, 5, 2, 6, 1, 3]);
        assert!(solutions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_solve_into_replaces_previous_contents() {
        let solver = BacktrackSolver::new(BoardSize::new(6).unwrap());
        let mut solutions = solve(5).0;
        let mut stats = BacktrackStats::default();

        solver.solve_into(&mut solutions, &mut stats);
        let first = solutions.clone();
        let first_stats = stats;
        solver.solve_into(&mut solutions, &mut stats);

        assert_eq!(first.len(), 4);
        assert_eq!(solutions, first);
        assert_eq!(stats, first_stats);
    }
}
