//! Complete, attack-free placements.

use std::fmt::{self, Display};

use crate::{BoardDisplay, placement::attacks};

/// A complete placement in which no two queens attack each other.
///
/// Entry `c` of [`rows`](Self::rows) is the row of the queen in column `c`.
/// A `Solution` can only be built from rows that pass the full pairwise
/// check, so holding one is proof of validity.
///
/// # Examples
///
/// ```
/// use nqueens_core::Solution;
///
/// let solution = Solution::from_rows(vec![1, 3, 0, 2]).unwrap();
/// assert_eq!(solution.size(), 4);
/// assert_eq!(solution.to_string(), "[1, 3, 0, 2]");
///
/// // Queens on a shared diagonal are rejected.
/// assert!(Solution::from_rows(vec![0, 1, 2, 3]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution {
    rows: Box<[usize]>,
}

impl Solution {
    /// Builds a solution from one row per column.
    ///
    /// Returns `None` if `rows` is empty, a row is out of range, or two
    /// queens share a row or diagonal.
    #[must_use]
    pub fn from_rows(rows: Vec<usize>) -> Option<Self> {
        let n = rows.len();
        if n == 0 || rows.iter().any(|&row| row >= n) {
            return None;
        }
        for (a, &row_a) in rows.iter().enumerate() {
            for (b, &row_b) in rows.iter().enumerate().skip(a + 1) {
                if attacks(a, row_a, b, row_b) {
                    return None;
                }
            }
        }
        Some(Self {
            rows: rows.into_boxed_slice(),
        })
    }

    /// Returns the board size `n`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row of each column's queen.
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Returns a value that renders this solution as an ASCII board.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_core::Solution;
    ///
    /// let solution = Solution::from_rows(vec![1, 3, 0, 2]).unwrap();
    /// assert_eq!(
    ///     solution.board().to_string(),
    ///     ". . Q .\nQ . . .\n. . . Q\n. Q . ."
    /// );
    /// ```
    #[must_use]
    pub fn board(&self) -> BoardDisplay<'_> {
        BoardDisplay::new(self)
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(row, f)?;
        }
        f.write_str("]")
    }
}
