//! The navigable grid.
//!
//! # Layout
//!
//! Cells are stored row-major in a single `Vec<Cell>`; `Coord::index(width)`
//! maps a coordinate to its slot.  A `Grid` never changes after
//! construction, so routers can borrow it freely and the controller can hand
//! clones to the presentation layer without worrying about aliasing.

use std::fmt;
use std::ops::Index;

use nav_core::coord::ORTHOGONAL_STEPS;
use nav_core::{Cell, Coord};

use crate::{GridError, GridResult};

/// Narrow parsed fixture dimensions to `u32`, rejecting anything larger.
pub(crate) fn dimensions(width: usize, height: usize, cells: usize) -> GridResult<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(GridError::InvalidDimensions {
            width:  u32::try_from(width).unwrap_or(u32::MAX),
            height: u32::try_from(height).unwrap_or(u32::MAX),
            cells,
        }),
    }
}

/// An immutable `width × height` array of cell classifications.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    width:  u32,
    height: u32,
    cells:  Vec<Cell>,
}

impl Grid {
    /// Wrap a row-major cell vector.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if `cells.len() != width * height`.
    pub fn new(width: u32, height: u32, cells: Vec<Cell>) -> GridResult<Self> {
        if cells.len() != width as usize * height as usize {
            return Err(GridError::InvalidDimensions { width, height, cells: cells.len() });
        }
        Ok(Self { width, height, cells })
    }

    /// A grid with every cell set to `cell`.
    pub fn filled(width: u32, height: u32, cell: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![cell; width as usize * height as usize],
        }
    }

    /// Parse an ASCII picture, one string per row (`.` traversable,
    /// `+` preferred, `#` forbidden).
    ///
    /// ```
    /// use nav_grid::Grid;
    /// let grid = Grid::from_rows(&["..#", ".+.", "#.."]).unwrap();
    /// assert_eq!((grid.width(), grid.height()), (3, 3));
    /// ```
    pub fn from_rows(rows: &[&str]) -> GridResult<Self> {
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let got = line.chars().count();
            if got != width {
                return Err(GridError::RaggedRows { row, expected: width, got });
            }
            for (col, glyph) in line.chars().enumerate() {
                let cell = Cell::from_glyph(glyph)
                    .ok_or(GridError::InvalidGlyph { glyph, col, row })?;
                cells.push(cell);
            }
        }
        let (w, h) = dimensions(width, rows.len(), cells.len())?;
        Self::new(w, h, cells)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        c.col < self.width && c.row < self.height
    }

    /// Classification at `c`, or `None` when out of range.
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Cell> {
        self.in_bounds(c).then(|| self.cells[c.index(self.width)])
    }

    /// `InvalidCoordinate` unless `c` is in range.
    pub fn check(&self, c: Coord) -> GridResult<()> {
        if self.in_bounds(c) {
            Ok(())
        } else {
            Err(GridError::InvalidCoordinate { coord: c, width: self.width, height: self.height })
        }
    }

    /// In-range, non-forbidden orthogonal neighbours of `c`, in
    /// left/right/up/down order.
    pub fn neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        ORTHOGONAL_STEPS
            .iter()
            .filter_map(move |&(dc, dr)| c.offset(dc, dr))
            .filter(move |&n| self.get(n).is_some_and(Cell::is_passable))
    }

    /// Every `(coord, cell)` pair in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let width = self.width.max(1);
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let i = i as u32;
            (Coord::new(i % width, i / width), cell)
        })
    }

    /// How many cells carry classification `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    /// # Panics
    /// Panics if `c` is out of range; use [`Grid::get`] for a checked lookup.
    fn index(&self, c: Coord) -> &Cell {
        assert!(self.in_bounds(c), "coordinate {c} outside {}x{} grid", self.width, self.height);
        &self.cells[c.index(self.width)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1) as usize) {
            for cell in row {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
