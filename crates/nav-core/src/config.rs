//! Simulation configuration.
//!
//! Typically loaded from a TOML file by the application crate (with the
//! `serde` feature) and passed to the controller builder.  Every field has a
//! default matching the reference scenario: a 600×600 px window of 30 px
//! cells, animated at 2 frames per second.

use std::time::Duration;

use crate::{Coord, NavError, NavResult};

/// Top-level navigation configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct NavConfig {
    /// Grid width in cells.  Default: 20.
    pub width: u32,

    /// Grid height in cells.  Default: 20.
    pub height: u32,

    /// Where every agent starts.  Default: `(0, 0)`.
    pub origin: Coord,

    /// Master RNG seed.  The same seed always produces the same sequence of
    /// grids and targets.
    pub seed: u64,

    /// Maximum draws when rejection-sampling a target on one grid.
    pub target_retry_cap: u32,

    /// Maximum whole-grid regenerations when target sampling is exhausted.
    pub generation_retry_cap: u32,

    /// Driver cadence in ticks per second.  Default: 2.
    pub tick_hz: u32,

    /// How many ticks the "finished" banner stays up.  Default: 6 (3 s at 2 Hz).
    pub finish_display_ticks: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            width:                20,
            height:               20,
            origin:               Coord::ORIGIN,
            seed:                 42,
            target_retry_cap:     10_000,
            generation_retry_cap: 16,
            tick_hz:              2,
            finish_display_ticks: 6,
        }
    }
}

impl NavConfig {
    /// Config for a `width × height` grid with every other field defaulted.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self { width, height, ..Self::default() }
    }

    /// Reject configurations the generator or driver cannot honour.
    pub fn validate(&self) -> NavResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(NavError::Config(format!(
                "grid dimensions must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if self.origin.col >= self.width || self.origin.row >= self.height {
            return Err(NavError::Config(format!(
                "origin {} lies outside a {}x{} grid",
                self.origin, self.width, self.height
            )));
        }
        if self.target_retry_cap == 0 || self.generation_retry_cap == 0 {
            return Err(NavError::Config("retry caps must be at least 1".into()));
        }
        if self.tick_hz == 0 {
            return Err(NavError::Config("tick_hz must be at least 1".into()));
        }
        Ok(())
    }

    /// Wall-clock interval between ticks for real-time drivers.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.tick_hz.max(1)
    }

    /// Number of cells in the configured grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
