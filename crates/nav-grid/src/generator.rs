//! Random grid and target generation.
//!
//! # Retry policy
//!
//! Target selection is rejection sampling: draw a uniform coordinate, keep
//! it if it is neither the start nor `Forbidden`.  Two caps keep that from
//! hanging on a degenerate grid:
//!
//! 1. `target_retry_cap` bounds the draws on one grid.  A grid with no
//!    eligible cell at all is detected up front and rejected immediately.
//! 2. `generation_retry_cap` bounds how many fresh grids
//!    [`GridGenerator::generate_world`] rolls before giving up with
//!    `GenerationExhausted`.
//!
//! With a uniform three-way classification an exhausted 20×20 grid is
//! astronomically unlikely; the caps exist for tiny grids and tests.

use nav_core::{Cell, Coord, NavConfig, SimRng};
use tracing::{debug, warn};

use crate::{Grid, GridError, GridResult};

/// A freshly generated grid and a target that is valid on it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    pub grid:   Grid,
    pub target: Coord,
}

/// Produces random grids and rejection-sampled targets.
#[derive(Clone, Debug)]
pub struct GridGenerator {
    width:                u32,
    height:               u32,
    target_retry_cap:     u32,
    generation_retry_cap: u32,
}

impl GridGenerator {
    /// Generator for `width × height` grids with the default retry caps.
    pub fn new(width: u32, height: u32) -> Self {
        Self::from_config(&NavConfig::with_size(width, height))
    }

    /// Generator using the dimensions and caps from `config`.
    pub fn from_config(config: &NavConfig) -> Self {
        Self {
            width:                config.width,
            height:               config.height,
            target_retry_cap:     config.target_retry_cap.max(1),
            generation_retry_cap: config.generation_retry_cap.max(1),
        }
    }

    /// Override the per-grid target sampling cap.
    pub fn with_target_retry_cap(mut self, cap: u32) -> Self {
        self.target_retry_cap = cap.max(1);
        self
    }

    /// Override the whole-grid regeneration cap.
    pub fn with_generation_retry_cap(mut self, cap: u32) -> Self {
        self.generation_retry_cap = cap.max(1);
        self
    }

    /// Assign every coordinate an independent, uniformly random
    /// classification.  No connectivity is guaranteed.
    pub fn generate(&self, rng: &mut SimRng) -> GridResult<Grid> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let cells: Vec<Cell> = (0..self.width as usize * self.height as usize)
            .map(|_| rng.random::<Cell>())
            .collect();
        Grid::new(self.width, self.height, cells)
    }

    /// Rejection-sample a target that is neither `start` nor `Forbidden`.
    ///
    /// # Errors
    ///
    /// - `EmptyGrid` for a grid with no cells.
    /// - `GenerationExhausted { attempts: 0 }` if no cell is eligible.
    /// - `GenerationExhausted { attempts: cap }` if the cap runs out first.
    pub fn choose_target(&self, grid: &Grid, start: Coord, rng: &mut SimRng) -> GridResult<Coord> {
        if grid.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        let eligible = grid
            .cells()
            .any(|(coord, cell)| coord != start && cell.is_passable());
        if !eligible {
            return Err(GridError::GenerationExhausted { attempts: 0 });
        }

        for _ in 0..self.target_retry_cap {
            let candidate = Coord::new(
                rng.gen_range(0..grid.width()),
                rng.gen_range(0..grid.height()),
            );
            if candidate != start && grid[candidate].is_passable() {
                return Ok(candidate);
            }
        }
        Err(GridError::GenerationExhausted { attempts: self.target_retry_cap })
    }

    /// Generate a grid and a target for an agent starting at `start`,
    /// regenerating the whole grid whenever target sampling is exhausted.
    ///
    /// # Errors
    ///
    /// `InvalidCoordinate` if `start` is outside the configured grid;
    /// `GenerationExhausted` once `generation_retry_cap` grids have failed.
    pub fn generate_world(&self, start: Coord, rng: &mut SimRng) -> GridResult<World> {
        for attempt in 1..=self.generation_retry_cap {
            let grid = self.generate(rng)?;
            grid.check(start)?;
            match self.choose_target(&grid, start, rng) {
                Ok(target) => {
                    debug!(attempt, goal = %target, "world generated");
                    return Ok(World { grid, target });
                }
                Err(GridError::GenerationExhausted { attempts }) => {
                    warn!(attempt, attempts, "target sampling exhausted; regenerating grid");
                }
                Err(e) => return Err(e),
            }
        }
        Err(GridError::GenerationExhausted { attempts: self.generation_retry_cap })
    }
}
