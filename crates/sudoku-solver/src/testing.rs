//! Test utilities for the solver crate.
//!
//! [`SolveTester`] keeps the initial and current state of a board, runs
//! propagation or the full search on it, and offers chained assertions with
//! `#[track_caller]` so failures point at the test line.

use sudoku_core::{Board, Digit, Position};

use crate::{Propagator, apply_forced_move, solve};

/// The completed grid most fixtures in this crate are carved from.
pub(crate) const SOLVED: &str = "
    198 526 347
    725 341 698
    346 978 215
    981 257 463
    564 139 872
    237 684 159
    473 815 926
    819 762 534
    652 493 781
";

/// A fluent harness around one board under test.
#[derive(Debug)]
pub(crate) struct SolveTester {
    initial: Board,
    current: Board,
    assignments: usize,
    solved: bool,
}

impl SolveTester {
    /// Creates a tester from a grid string.
    ///
    /// # Panics
    ///
    /// Panics if the string does not parse as a board.
    #[track_caller]
    pub(crate) fn new(input: &str) -> Self {
        let board = Self::parse(input);
        Self {
            initial: board,
            current: board,
            assignments: 0,
            solved: false,
        }
    }

    /// Parses a grid string, panicking on malformed input.
    #[track_caller]
    pub(crate) fn parse(input: &str) -> Board {
        input
            .parse()
            .unwrap_or_else(|err| panic!("bad board fixture: {err}"))
    }

    /// Returns the board in its current state.
    pub(crate) fn board(&self) -> Board {
        self.current
    }

    /// Applies forced moves until none remain, recording the count.
    pub(crate) fn propagate_until_stuck(mut self) -> Self {
        while apply_forced_move(&mut self.current) {
            self.assignments += 1;
        }
        self.solved = self.current.is_solved();
        self
    }

    /// Runs the full search with the given propagator, recording the result.
    pub(crate) fn solve_with(mut self, propagate: Propagator) -> Self {
        let (assignments, solved) = solve(&mut self.current, propagate);
        self.assignments = assignments;
        self.solved = solved;
        self
    }

    /// Asserts that the search reported success and left a solved board.
    #[track_caller]
    pub(crate) fn assert_solved(self) -> Self {
        assert!(self.solved, "expected the board to be solved");
        assert!(
            self.current.is_solved(),
            "solver reported success but the board is not solved:{}",
            self.current
        );
        self
    }

    /// Asserts success and that the result equals `expected`.
    #[track_caller]
    pub(crate) fn assert_solved_as(self, expected: &str) -> Self {
        let expected = Self::parse(expected);
        let tester = self.assert_solved();
        assert_eq!(
            tester.current, expected,
            "solved board differs from the expected solution"
        );
        tester
    }

    /// Asserts that the search failed and restored the entry board exactly.
    #[track_caller]
    pub(crate) fn assert_unsolved_and_unchanged(self) -> Self {
        assert!(!self.solved, "expected the board to be unsolvable");
        assert_eq!(
            self.current, self.initial,
            "failed search must leave the board as it was on entry"
        );
        self
    }

    /// Asserts the exact number of recorded assignments.
    #[track_caller]
    pub(crate) fn assert_assignments(self, expected: usize) -> Self {
        assert_eq!(
            self.assignments, expected,
            "unexpected assignment count (branching is first-empty row-major, candidates ascending)"
        );
        self
    }

    /// Asserts the contents of a single cell.
    #[track_caller]
    pub(crate) fn assert_cell(self, pos: Position, digit: Digit) -> Self {
        assert_eq!(
            self.current.get(pos),
            Some(digit),
            "expected {digit} at {pos}"
        );
        self
    }
}
