//! Core data structures for a 9×9 sudoku solver.
//!
//! This crate provides the board representation and the constraint machinery
//! it is checked against:
//!
//! - [`Digit`]: type-safe digit 1-9
//! - [`DigitSet`]: a 9-bit set of digits
//! - [`Position`]: a `(row, col)` cell coordinate
//! - [`Unit`]: the 27 constraint regions (rows, columns, sections)
//! - [`Board`]: the 81-cell grid with validity checks, the legal-assignment
//!   oracle, parsing, and formatting
//! - [`CellDomain`] / [`DomainTable`]: per-cell legal-candidate computation

pub use self::{
    board::{Board, ParseBoardError},
    digit::Digit,
    digit_set::DigitSet,
    domain::{CellDomain, DomainTable},
    position::Position,
    unit::Unit,
};

mod board;
mod digit;
mod digit_set;
mod domain;
mod position;
mod unit;
