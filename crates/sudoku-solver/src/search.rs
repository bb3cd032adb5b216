//! Depth-first backtracking search.

use log::{debug, trace};
use sudoku_core::Board;

use crate::Propagator;

/// Solves the board in place by depth-first backtracking.
///
/// `propagate` is applied at every search node before branching; pass
/// [`null_propagation`] for pure chronological backtracking or
/// [`propagate_forced_moves`] to assign forced moves eagerly.
///
/// Returns `(assignments, solved)`:
///
/// - `assignments` is the total number of variable assignments performed
///   during this invocation, including those made by `propagate`, by the
///   branching step, and recursively by child calls. For a fixed branching
///   policy it is a deterministic measure of search effort.
/// - `solved` reports whether `board` was updated in place to a solved
///   state. When it is `false` — the board was invalid, dead, or exhausted
///   every branch — `board` is left exactly as it was on entry.
///
/// The search branches on the first empty cell in row-major order and tries
/// its candidate digits in ascending order. Each branch works on a copy of
/// the board, so recursion depth (at most the 81 cells) bounds memory use
/// and no undo bookkeeping is needed. The function is total: unsolvable
/// input is a normal `(_, false)` return, never a panic.
///
/// [`null_propagation`]: crate::null_propagation
/// [`propagate_forced_moves`]: crate::propagate_forced_moves
///
/// # Examples
///
/// ```
/// use sudoku_core::Board;
/// use sudoku_solver::{null_propagation, solve};
///
/// let mut board: Board = "
///     _12 345 678
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
///     ___ ___ ___
/// "
/// .parse()
/// .unwrap();
///
/// let (_, solved) = solve(&mut board, null_propagation);
/// assert!(solved);
/// assert!(board.is_solved());
/// ```
#[must_use]
pub fn solve(board: &mut Board, propagate: Propagator) -> (usize, bool) {
    if !board.is_valid() {
        debug!("refusing to search an invalid board");
        return (0, false);
    }
    if !board.has_legal_assignments() {
        debug!("board is dead: an empty cell has no legal digit");
        return (0, false);
    }

    let entry = *board;
    let mut assignments = propagate(board);

    if board.is_solved() {
        return (assignments, true);
    }

    let domains = board.domains();
    let Some(branch) = domains.first_empty() else {
        // populated but not solved: propagation cannot cause this, but the
        // restore below keeps the contract even if it ever happens
        *board = entry;
        return (assignments, false);
    };

    trace!(
        "branching on {} with candidates {:?}",
        branch.position, branch.candidates
    );

    for digit in branch.candidates {
        let mut next = board.assigned_copy(branch.position, digit);
        assignments += 1;

        if next.is_solved() {
            *board = next;
            return (assignments, true);
        }

        let (child_assignments, solved) = solve(&mut next, propagate);
        assignments += child_assignments;
        if solved {
            *board = next;
            return (assignments, true);
        }
    }

    *board = entry;
    (assignments, false)
}
