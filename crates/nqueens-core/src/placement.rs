//! Queen placements and attack queries.
//!
//! A [`Placement`] stores one slot per column. Each slot is either unassigned
//! or holds the row of the queen standing in that column, so two queens can
//! never share a column. The remaining constraints (rows and diagonals) are
//! checked by [`Placement::is_valid`] and counted by
//! [`Placement::conflicts_at`].
//!
//! # Examples
//!
//! ```
//! use nqueens_core::{BoardSize, Placement};
//!
//! let mut placement = Placement::new(BoardSize::new(4)?);
//! placement.set(0, 1);
//! placement.set(1, 3);
//!
//! // Row 0 of column 2 is attacked by neither queen.
//! assert!(placement.is_valid(0, 2));
//! // Row 2 of column 2 shares a diagonal with the queen of column 1.
//! assert!(!placement.is_valid(2, 2));
//! # Ok::<(), nqueens_core::BoardSizeError>(())
//! ```

use crate::{BoardSize, Solution};

/// Returns `true` if queens at `(column_a, row_a)` and `(column_b, row_b)`
/// attack each other along a row or a diagonal.
///
/// Queens in the same column are not considered; a placement never holds two
/// of them.
#[must_use]
pub const fn attacks(column_a: usize, row_a: usize, column_b: usize, row_b: usize) -> bool {
    row_a == row_b || row_a.abs_diff(row_b) == column_a.abs_diff(column_b)
}

/// A partial or complete assignment of queens to columns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    slots: Vec<Option<usize>>,
}

impl Placement {
    /// Creates a placement with every column unassigned.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            slots: vec![None; size.get()],
        }
    }

    /// Creates a fully assigned placement from one row per column.
    ///
    /// # Panics
    ///
    /// Panics if `rows` is empty or any row is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_core::Placement;
    ///
    /// let placement = Placement::from_rows(&[1, 3, 0, 2]);
    /// assert!(placement.is_complete());
    /// assert_eq!(placement.get(1), Some(3));
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[usize]) -> Self {
        let n = rows.len();
        assert!(n > 0, "placement must have at least one column");
        for (column, &row) in rows.iter().enumerate() {
            assert!(row < n, "row {row} in column {column} is out of range 0..{n}");
        }
        Self {
            slots: rows.iter().copied().map(Some).collect(),
        }
    }

    /// Returns the board size `n`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.slots.len()
    }

    /// Returns the row assigned to `column`, or `None` if it is unassigned.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range.
    #[must_use]
    pub fn get(&self, column: usize) -> Option<usize> {
        self.slots[column]
    }

    /// Places the queen of `column` on `row`, replacing any previous
    /// assignment.
    ///
    /// # Panics
    ///
    /// Panics if `column` or `row` is out of range.
    pub fn set(&mut self, column: usize, row: usize) {
        assert!(row < self.size(), "row {row} is out of range");
        self.slots[column] = Some(row);
    }

    /// Removes the queen of `column`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is out of range.
    pub fn clear(&mut self, column: usize) {
        self.slots[column] = None;
    }

    /// Returns `true` if every column holds a queen.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Returns an iterator over the slots, in column order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Option<usize>> + '_ {
        self.slots.iter().copied()
    }

    /// Returns `true` if a queen at `(row, column)` is attacked by none of the
    /// queens in columns `0..column`.
    ///
    /// Columns at or to the right of `column` are ignored, as are unassigned
    /// slots. This is the pruning test of a left-to-right search and runs in
    /// `O(column)`.
    ///
    /// # Panics
    ///
    /// Panics if `column` is greater than the board size.
    #[must_use]
    pub fn is_valid(&self, row: usize, column: usize) -> bool {
        self.slots[..column]
            .iter()
            .enumerate()
            .all(|(col, slot)| slot.is_none_or(|r| !attacks(col, r, column, row)))
    }

    /// Counts the queens in other columns that would attack a queen at
    /// `(row, column)`.
    ///
    /// The current assignment of `column` itself is not counted, and
    /// unassigned slots are skipped. Runs in `O(n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_core::Placement;
    ///
    /// // Every queen on the main diagonal.
    /// let placement = Placement::from_rows(&[0, 1, 2, 3]);
    /// assert_eq!(placement.conflicts_at(0, 0), 3);
    /// assert_eq!(placement.conflicts_at(0, 2), 2);
    /// ```
    #[must_use]
    pub fn conflicts_at(&self, column: usize, row: usize) -> usize {
        self.slots
            .iter()
            .enumerate()
            .filter(|&(col, slot)| {
                col != column && slot.is_some_and(|r| attacks(col, r, column, row))
            })
            .count()
    }

    /// Copies this placement into a [`Solution`].
    ///
    /// Returns `None` unless the placement is complete and no two queens
    /// attack each other.
    #[must_use]
    pub fn to_solution(&self) -> Option<Solution> {
        let rows = self.slots.iter().copied().collect::<Option<Vec<_>>>()?;
        Solution::from_rows(rows)
    }
}
