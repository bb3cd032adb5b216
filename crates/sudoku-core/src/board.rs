//! The 81-cell sudoku board.

use std::fmt::{self, Display, Write as _};
use std::str::FromStr;

use thiserror::Error;

use crate::{Digit, DigitSet, Position, Unit};

/// A 9×9 sudoku board.
///
/// Cells are stored as `Option<Digit>` in row-major order; `None` is an
/// empty cell. The board is a plain value: copying is an 81-cell `memcpy`
/// and the search relies on that being cheap. Equality is elementwise.
///
/// A board can be in one of three observable states:
///
/// - *invalid*: some unit contains the same digit twice ([`is_valid`] is
///   `false`);
/// - *valid but incomplete*: no duplicates, at least one empty cell;
/// - *solved*: fully populated and valid ([`is_solved`] is `true`).
///
/// [`is_valid`]: Board::is_valid
/// [`is_solved`]: Board::is_solved
///
/// # Examples
///
/// ```
/// use sudoku_core::{Board, Digit, Position};
///
/// let board: Board = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// assert!(board.is_valid());
/// assert!(!board.is_solved());
/// assert_eq!(board.get(Position::new(0, 0)), Some(Digit::D5));
/// assert_eq!(board.get(Position::new(0, 2)), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Digit>; 81],
}

impl Board {
    /// Creates a board with all 81 cells empty.
    #[must_use]
    pub const fn empty() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the contents of the cell at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Writes a cell without any legality check.
    ///
    /// Callers must have established legality first; everything public goes
    /// through [`assign`](Board::assign) or the parser.
    pub(crate) const fn set(&mut self, pos: Position, cell: Option<Digit>) {
        self.cells[pos.index()] = cell;
    }

    /// Returns the cells as a flat row-major slice.
    #[must_use]
    pub const fn cells(&self) -> &[Option<Digit>; 81] {
        &self.cells
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns `true` if no unit contains the same digit twice.
    ///
    /// Empty cells are ignored; a partially-filled board that violates no
    /// constraint is valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        Unit::ALL.iter().all(|&unit| {
            let mut seen = DigitSet::EMPTY;
            for pos in unit.positions() {
                if let Some(digit) = self.get(pos) {
                    if seen.contains(digit) {
                        return false;
                    }
                    seen.insert(digit);
                }
            }
            true
        })
    }

    /// Returns `true` if the board is fully populated and valid.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_populated() && self.is_valid()
    }

    /// Returns `true` if placing `digit` at `pos` would violate no constraint.
    ///
    /// The target cell must be empty and `digit` must not already appear in
    /// the cell's row, column, or section. Scans at most the 27 cells of the
    /// three containing units and short-circuits on the first conflict.
    /// Never mutates the board.
    #[must_use]
    pub fn is_legal(&self, pos: Position, digit: Digit) -> bool {
        if self.get(pos).is_some() {
            return false;
        }
        Unit::of_cell(pos).iter().all(|unit| {
            unit.positions()
                .iter()
                .all(|&peer| self.get(peer) != Some(digit))
        })
    }

    /// Assigns `digit` to `pos` if the assignment is legal.
    ///
    /// Returns `true` if the board was updated. A `false` return leaves the
    /// board untouched.
    pub fn assign(&mut self, pos: Position, digit: Digit) -> bool {
        if self.is_legal(pos, digit) {
            self.set(pos, Some(digit));
            true
        } else {
            false
        }
    }

    /// Returns a copy of the board with `digit` assigned at `pos`.
    ///
    /// The assignment must be legal; this is checked in debug builds only.
    #[must_use]
    pub fn assigned_copy(&self, pos: Position, digit: Digit) -> Self {
        let mut copy = *self;
        let assigned = copy.assign(pos, digit);
        debug_assert!(assigned, "illegal assignment of {digit} at {pos}");
        copy
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// An error produced when parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    /// A non-whitespace character that is neither a digit `1`-`9` nor `_`.
    #[error("unexpected character {0:?} in board input")]
    UnexpectedCharacter(char),
    /// Fewer than 81 non-whitespace characters in the input.
    #[error("board input ended after {0} of 81 cells")]
    TooFewCells(usize),
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a board from the first 81 non-whitespace characters.
    ///
    /// `'1'..='9'` fill a cell, `'_'` leaves it empty; whitespace of any
    /// kind is skipped and anything after the 81st cell is ignored. The
    /// parser checks character shape only — a board that violates the
    /// sudoku constraints still parses, and fails [`Board::is_valid`]
    /// instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::empty();
        let mut filled = 0;
        for c in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = match c {
                '_' => None,
                c => Some(Digit::from_char(c).ok_or(ParseBoardError::UnexpectedCharacter(c))?),
            };
            board.set(Position::from_index(filled), cell);
            filled += 1;
            if filled == 81 {
                return Ok(board);
            }
        }
        Err(ParseBoardError::TooFewCells(filled))
    }
}

impl Display for Board {
    /// Formats the board as an 11-row grid surrounded by blank lines:
    ///
    /// ```text
    ///
    /// 5 3 _ | _ 7 _ | _ _ _
    /// ...
    /// ------+-------+------
    /// ...
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('\n')?;
        for row in 0..9 {
            for col in 0..9 {
                let c = match self.get(Position::new(row, col)) {
                    Some(digit) => digit.to_char(),
                    None => '_',
                };
                f.write_char(c)?;
                match col {
                    2 | 5 => f.write_str(" | ")?,
                    8 => f.write_char('\n')?,
                    _ => f.write_char(' ')?,
                }
            }
            if row == 2 || row == 5 {
                f.write_str("------+-------+------\n")?;
            }
        }
        Ok(())
    }
}
