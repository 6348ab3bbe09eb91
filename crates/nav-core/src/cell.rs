//! Cell classification.

use std::fmt;

use rand::Rng;
use rand::distributions::{Distribution, Standard};

/// The traversability tag of a single grid coordinate.
///
/// `Preferred` currently costs the same as `Traversable`; it is kept distinct
/// so a weighted router can price it differently later.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Traversable,
    Preferred,
    Forbidden,
}

impl Cell {
    /// All classifications, in declaration order.
    pub const ALL: [Cell; 3] = [Cell::Traversable, Cell::Preferred, Cell::Forbidden];

    /// `true` unless the cell is `Forbidden`.
    #[inline]
    pub fn is_passable(self) -> bool {
        !matches!(self, Cell::Forbidden)
    }

    /// Single-character glyph used by ASCII fixtures and renderers.
    pub fn glyph(self) -> char {
        match self {
            Cell::Traversable => '.',
            Cell::Preferred   => '+',
            Cell::Forbidden   => '#',
        }
    }

    /// Inverse of [`Cell::glyph`].
    pub fn from_glyph(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Traversable),
            '+' => Some(Cell::Preferred),
            '#' => Some(Cell::Forbidden),
            _   => None,
        }
    }
}

/// Uniform over the three classifications.
impl Distribution<Cell> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        Cell::ALL[rng.gen_range(0..Cell::ALL.len())]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cell::Traversable => "traversable",
            Cell::Preferred   => "preferred",
            Cell::Forbidden   => "forbidden",
        };
        f.write_str(name)
    }
}
