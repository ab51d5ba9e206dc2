//! ASCII board rendering.

use std::fmt::{self, Display};

use crate::Solution;

/// Renders a [`Solution`] as an `n × n` grid of `Q` and `.` cells.
///
/// Row 0 is printed first. Cells are separated by one space, lines by `\n`,
/// and no line carries trailing whitespace.
#[derive(Debug, Clone, Copy)]
pub struct BoardDisplay<'a> {
    solution: &'a Solution,
}

impl<'a> BoardDisplay<'a> {
    /// Creates a renderer borrowing `solution`.
    #[must_use]
    pub fn new(solution: &'a Solution) -> Self {
        Self { solution }
    }
}

impl Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.solution.rows();
        for row in 0..rows.len() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for (column, &queen) in rows.iter().enumerate() {
                if column > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if queen == row { "Q" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell() {
        let solution = Solution::from_rows(vec![0]).unwrap();
        assert_eq!(solution.board().to_string(), "Q");
    }

    #[test]
    fn test_one_queen_per_line_and_column() {
        let solution = Solution::from_rows(vec![2, 4, 1, 3, 0]).unwrap();
        let rendered = solution.board().to_string();
        let lines = rendered.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 5);
        for (row, line) in lines.iter().enumerate() {
            assert!(!line.ends_with(' '));
            let cells = line.split(' ').collect::<Vec<_>>();
            assert_eq!(cells.len(), 5);
            assert_eq!(cells.iter().filter(|&&cell| cell == "Q").count(), 1);
            let column = cells.iter().position(|&cell| cell == "Q").unwrap();
            assert_eq!(solution.rows()[column], row);
        }
    }
}
