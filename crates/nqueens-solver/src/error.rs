use nqueens_core::BoardSizeError;

/// Errors that can occur when creating a solver.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The board size was rejected.
    #[display("invalid argument: {_0}")]
    InvalidArgument(#[from] BoardSizeError),
}
