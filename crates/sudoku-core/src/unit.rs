//! The 27 constraint units of a sudoku board.

use crate::Position;

/// A constraint unit: a row, a column, or a 3×3 section.
///
/// Every digit must appear exactly once in each of the 27 units. Each cell
/// belongs to exactly one row, one column, and one section. Keeping all
/// three kinds behind one table ([`Unit::ALL`]) lets the validator, the
/// legal-assignment oracle, and the domain engine share a single scan loop
/// instead of three near-copies.
///
/// # Examples
///
/// ```
/// use sudoku_core::{Position, Unit};
///
/// assert_eq!(Unit::ALL.len(), 27);
///
/// let section = Unit::section_of(Position::new(4, 7));
/// assert_eq!(section, Unit::Section(5));
/// assert!(section.positions().contains(&Position::new(3, 6)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// A row, identified by its row index (0-8).
    Row(u8),
    /// A column, identified by its column index (0-8).
    Column(u8),
    /// A 3×3 section, identified by its section index (0-8, left to right,
    /// top to bottom).
    Section(u8),
}

impl Unit {
    /// All 27 units: the 9 rows, then the 9 columns, then the 9 sections.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row(0); 27];
        let mut i = 0;
        while i < 9 {
            all[i] = Self::Row(i as u8);
            all[i + 9] = Self::Column(i as u8);
            all[i + 18] = Self::Section(i as u8);
            i += 1;
        }
        all
    };

    /// Returns the section unit containing the given cell.
    #[must_use]
    pub const fn section_of(pos: Position) -> Self {
        Self::Section(pos.section_index())
    }

    /// Returns the three units containing the given cell: its row, its
    /// column, and its section.
    #[must_use]
    pub const fn of_cell(pos: Position) -> [Self; 3] {
        [
            Self::Row(pos.row()),
            Self::Column(pos.col()),
            Self::section_of(pos),
        ]
    }

    /// Converts a cell index within this unit (0-8) into a board [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub const fn position(self, i: u8) -> Position {
        assert!(i < 9);
        match self {
            Self::Row(row) => Position::new(row, i),
            Self::Column(col) => Position::new(i, col),
            Self::Section(section) => {
                Position::new((section / 3) * 3 + i / 3, (section % 3) * 3 + i % 3)
            }
        }
    }

    /// Returns the 9 positions belonging to this unit.
    #[must_use]
    pub const fn positions(self) -> [Position; 9] {
        let mut out = [Position::new(0, 0); 9];
        let mut i = 0;
        while i < 9 {
            out[i as usize] = self.position(i);
            i += 1;
        }
        out
    }
}
