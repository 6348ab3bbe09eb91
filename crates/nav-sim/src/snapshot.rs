//! Read-only view of the controller state handed to presentation layers.

use nav_agent::AgentState;
use nav_core::{Coord, Tick};
use nav_grid::{Grid, Path};

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationSnapshot {
    pub grid:           Grid,
    pub agent_position: Coord,
    pub target:         Coord,
    pub path:           Path,
    pub state:          AgentState,

    /// The agent is advancing on each tick.
    pub running: bool,

    /// No route exists on the current grid (agent is `Blocked`).
    pub no_path: bool,

    /// Path length of the last finished run while its banner is still up.
    pub finished_banner: Option<usize>,

    /// Hint for the presentation layer: the run is over (finished or
    /// impossible), so offering "reconstruct" makes sense.
    /// `reconstruct()` is accepted either way.
    pub reconstruct_offered: bool,

    /// Ticks since the last reconstruction.
    pub tick: Tick,
}

impl SimulationSnapshot {
    /// Status line in the reference wording.
    pub fn status_message(&self) -> Option<String> {
        if let Some(n) = self.finished_banner {
            Some(format!("Finished! Path Length: {n}"))
        } else if self.running {
            Some("Moving to Target...".to_string())
        } else if self.no_path {
            Some("No valid path for this maze. Please reconstruct.".to_string())
        } else {
            None
        }
    }
}
