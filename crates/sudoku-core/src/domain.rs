//! Per-cell legal-candidate computation.

use crate::{Board, Digit, DigitSet, Position, Unit};

/// The domain of a single cell: which digits may still legally sit there.
///
/// For an occupied cell `candidates` is [`DigitSet::EMPTY`] and `value`
/// carries the digit. For an empty cell `candidates` is `{1..9}` minus the
/// digits already placed in the cell's row, column, and section. An empty
/// cell with an empty candidate set is unsatisfiable: no solution extends
/// the board it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellDomain {
    /// The cell this entry describes.
    pub position: Position,
    /// Digits that may legally be assigned to the cell.
    pub candidates: DigitSet,
    /// The cell's current contents.
    pub value: Option<Digit>,
}

impl CellDomain {
    /// Returns `true` if the cell is empty but no digit remains legal.
    #[must_use]
    pub fn is_unsatisfiable(&self) -> bool {
        self.value.is_none() && self.candidates.is_empty()
    }
}

/// The 81 per-cell domains of a board, in row-major order.
#[derive(Debug, Clone)]
pub struct DomainTable {
    entries: [CellDomain; 81],
}

impl DomainTable {
    /// Returns the entry for the cell at `pos`.
    #[must_use]
    pub fn get(&self, pos: Position) -> &CellDomain {
        &self.entries[pos.index()]
    }

    /// Returns the entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &CellDomain> {
        self.entries.iter()
    }

    /// Returns the first empty cell in row-major order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<&CellDomain> {
        self.entries.iter().find(|entry| entry.value.is_none())
    }
}

impl Board {
    /// Computes the domain of every cell under the current assignments.
    ///
    /// Every empty cell starts at the full digit set; one pass over the 27
    /// units then subtracts each unit's placed digits from its empty member
    /// cells. The result is the intersection over the cell's three units,
    /// so the order units are visited in does not matter.
    #[must_use]
    pub fn domains(&self) -> DomainTable {
        let mut entries: [CellDomain; 81] = std::array::from_fn(|i| {
            let position = Position::from_index(i);
            let value = self.get(position);
            CellDomain {
                position,
                candidates: if value.is_none() {
                    DigitSet::FULL
                } else {
                    DigitSet::EMPTY
                },
                value,
            }
        });

        for unit in Unit::ALL {
            let mut placed = DigitSet::EMPTY;
            for pos in unit.positions() {
                if let Some(digit) = self.get(pos) {
                    placed.insert(digit);
                }
            }
            if placed.is_empty() {
                continue;
            }
            for pos in unit.positions() {
                let entry = &mut entries[pos.index()];
                if entry.value.is_none() {
                    entry.candidates = entry.candidates.difference(placed);
                }
            }
        }

        DomainTable { entries }
    }

    /// Returns `true` if every empty cell still has at least one legal digit.
    ///
    /// A `false` return means the board is dead: some empty cell can no
    /// longer be filled, so no solution extends the current assignments.
    #[must_use]
    pub fn has_legal_assignments(&self) -> bool {
        self.domains().iter().all(|entry| !entry.is_unsatisfiable())
    }
}
