//! Core data structures for the N-Queens problem.
//!
//! This crate provides the board representation shared by the solvers in
//! `nqueens-solver`:
//!
//! - [`BoardSize`]: a validated board side length (`n >= 1`)
//! - [`Placement`]: one optional queen row per column, with the attack
//!   queries [`Placement::is_valid`] and [`Placement::conflicts_at`]
//! - [`Solution`]: a complete, attack-free placement
//! - [`BoardDisplay`]: ASCII rendering of a solution
//!
//! # Examples
//!
//! ```
//! use nqueens_core::{BoardSize, Placement};
//!
//! let mut placement = Placement::new(BoardSize::new(4)?);
//! for (column, row) in [1, 3, 0, 2].into_iter().enumerate() {
//!     assert!(placement.is_valid(row, column));
//!     placement.set(column, row);
//! }
//!
//! let solution = placement.to_solution().unwrap();
//! println!("{solution}\n{}", solution.board());
//! # Ok::<(), nqueens_core::BoardSizeError>(())
//! ```

pub mod board_display;
pub mod board_size;
pub mod placement;
pub mod solution;

pub use self::{
    board_display::BoardDisplay,
    board_size::{BoardSize, BoardSizeError},
    placement::Placement,
    solution::Solution,
};
