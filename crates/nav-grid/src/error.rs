//! Grid-subsystem error type.

use thiserror::Error;

use nav_core::{Coord, NavError};

/// Errors produced by `nav-grid`.
///
/// An unreachable target is deliberately absent: routers report it as an
/// empty [`Path`][crate::Path], not as a failure.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("coordinate {coord} is outside the {width}x{height} grid")]
    InvalidCoordinate { coord: Coord, width: u32, height: u32 },

    #[error("grid has no cells")]
    EmptyGrid,

    #[error("{cells} cells cannot fill a {width}x{height} grid")]
    InvalidDimensions { width: u32, height: u32, cells: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    RaggedRows { row: usize, expected: usize, got: usize },

    #[error("unknown cell glyph {glyph:?} at column {col}, row {row}")]
    InvalidGlyph { glyph: char, col: usize, row: usize },

    #[error("route ends at {end}, not at the target {target}")]
    RouteMismatch { end: Coord, target: Coord },

    #[error("no valid target found after {attempts} attempts")]
    GenerationExhausted { attempts: u32 },

    #[error(transparent)]
    Core(#[from] NavError),
}

pub type GridResult<T> = Result<T, GridError>;
