//! Forced-move propagation.
//!
//! A *forced move* (a naked single) is an empty cell whose domain has shrunk
//! to exactly one digit; that digit is the only way to ever fill the cell,
//! so it can be assigned without guessing. Propagation applies forced moves
//! until none remain, shrinking the search space ahead of every branching
//! decision.

use log::debug;
use sudoku_core::Board;

/// A propagation callback applied by the solver at every search node.
///
/// The callback performs optimistic in-place inference on the board and
/// returns how many assignments it made. Two implementations are provided:
/// [`null_propagation`] and [`propagate_forced_moves`].
pub type Propagator = fn(&mut Board) -> usize;

/// The do-nothing propagator: never mutates, always reports 0 assignments.
///
/// With this propagator the solver degenerates to pure chronological
/// backtracking.
pub fn null_propagation(_board: &mut Board) -> usize {
    0
}

/// Applies a single forced move, if one exists.
///
/// Scans the board's domains in row-major order and assigns the first empty
/// cell whose candidate set holds exactly one digit. Returns `true` iff an
/// assignment was made; the board then has one fewer empty cell and is still
/// valid. Returns `false` iff no single-candidate empty cell exists.
pub fn apply_forced_move(board: &mut Board) -> bool {
    let domains = board.domains();
    for entry in domains.iter() {
        if entry.value.is_none()
            && let Some(digit) = entry.candidates.as_single()
        {
            let assigned = board.assign(entry.position, digit);
            debug_assert!(assigned, "forced move {digit} at {} was illegal", entry.position);
            return true;
        }
    }
    false
}

/// Applies forced moves until none remain, returning the assignment count.
///
/// The fixpoint is reached when [`apply_forced_move`] finds no
/// single-candidate cell; each successful step may create new forced moves,
/// so the scan restarts from the top after every assignment.
pub fn propagate_forced_moves(board: &mut Board) -> usize {
    let mut count = 0;
    while apply_forced_move(board) {
        count += 1;
    }
    if count > 0 {
        debug!("propagation assigned {count} forced moves");
    }
    count
}
