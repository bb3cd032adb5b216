//! Depth-first backtracking solver for 9×9 sudoku.
//!
//! The solver combines two pieces:
//!
//! - a propagation step applied optimistically at every search node, chosen
//!   by the caller ([`null_propagation`] for pure chronological backtracking,
//!   [`propagate_forced_moves`] to assign every forced move first);
//! - the recursive search itself ([`solve`]), which branches on the first
//!   empty cell in row-major order and tries its candidates in ascending
//!   digit order.
//!
//! Every variable assignment performed along the way — by propagation, by
//! branching, and inside recursive calls — is counted and reported as a
//! measure of search effort.
//!
//! # Examples
//!
//! ```
//! use sudoku_core::Board;
//! use sudoku_solver::{propagate_forced_moves, solve};
//!
//! let mut board: Board = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! let (assignments, solved) = solve(&mut board, propagate_forced_moves);
//! assert!(solved);
//! assert!(board.is_solved());
//! // every one of the 51 empty cells was assigned exactly once
//! assert_eq!(assignments, 51);
//! ```

pub use self::{
    propagate::{Propagator, apply_forced_move, null_propagation, propagate_forced_moves},
    search::solve,
};

mod propagate;
mod search;

#[cfg(test)]
mod testing;
