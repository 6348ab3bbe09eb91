//! Grid coordinates.
//!
//! A `Coord` is a `(column, row)` pair.  It is `Copy + Ord + Hash` so it can
//! key distance and predecessor maps directly.  Bounds are not checked here;
//! that is the grid's job, since only the grid knows its dimensions.

use std::fmt;

/// The four orthogonal unit steps, in the order neighbours are explored:
/// left, right, up, down.
pub const ORTHOGONAL_STEPS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A `(column, row)` grid coordinate.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub col: u32,
    pub row: u32,
}

impl Coord {
    /// The fixed navigation origin `(0, 0)`.
    pub const ORIGIN: Coord = Coord { col: 0, row: 0 };

    #[inline]
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Shift by `(dc, dr)`.  Returns `None` if either component would go
    /// negative or overflow; the upper grid bound is not checked.
    #[inline]
    pub fn offset(self, dc: i32, dr: i32) -> Option<Coord> {
        Some(Coord {
            col: self.col.checked_add_signed(dc)?,
            row: self.row.checked_add_signed(dr)?,
        })
    }

    /// Manhattan (L1) distance.
    #[inline]
    pub fn manhattan(self, other: Coord) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }

    /// `true` if `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }

    /// Row-major index into a grid `width` cells wide.
    #[inline(always)]
    pub fn index(self, width: u32) -> usize {
        self.row as usize * width as usize + self.col as usize
    }
}

impl From<(u32, u32)> for Coord {
    #[inline]
    fn from((col, row): (u32, u32)) -> Self {
        Coord { col, row }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
