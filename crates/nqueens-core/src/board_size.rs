//! Board size validation.

/// The side length `n` of an `n × n` board.
///
/// A `BoardSize` is always at least 1. It is fixed when a placement or solver
/// is created and never changes afterwards.
///
/// # Examples
///
/// ```
/// use nqueens_core::BoardSize;
///
/// let size = BoardSize::new(8)?;
/// assert_eq!(size.get(), 8);
///
/// assert!(BoardSize::new(0).is_err());
/// assert!(BoardSize::try_from(-1_i64).is_err());
/// # Ok::<(), nqueens_core::BoardSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Creates a board size.
    ///
    /// # Errors
    ///
    /// Returns [`BoardSizeError::NotPositive`] if `n` is 0.
    pub fn new(n: usize) -> Result<Self, BoardSizeError> {
        if n == 0 {
            return Err(BoardSizeError::NotPositive { size: 0 });
        }
        Ok(Self(n))
    }

    /// Returns the number of rows (and columns) of the board.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = BoardSizeError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match usize::try_from(n) {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(BoardSizeError::NotPositive { size: n }),
        }
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// Errors raised when validating a board size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardSizeError {
    /// The requested size was zero or negative.
    #[display("board size must be >= 1, got {size}")]
    NotPositive {
        /// The rejected value.
        size: i64,
    },
}
