//! Agent lifecycle states.

use std::fmt;

use nav_core::Coord;

/// Where an [`Agent`][crate::Agent] is in its traversal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgentState {
    /// Constructed with a non-empty path, not yet moved.
    Idle,
    /// Has moved at least once; cells remain.
    Advancing,
    /// Standing on the target.  Terminal.
    Arrived,
    /// No route to the target exists.  Terminal.
    Blocked,
}

impl AgentState {
    /// `Arrived` and `Blocked` never change for a given agent.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, AgentState::Arrived | AgentState::Blocked)
    }
}

impl fmt::Display for AgentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AgentState::Idle      => "idle",
            AgentState::Advancing => "advancing",
            AgentState::Arrived   => "arrived",
            AgentState::Blocked   => "blocked",
        };
        f.write_str(name)
    }
}

/// What a single [`Agent::advance`][crate::Agent::advance] call did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Moved to the given cell; more remain.
    Moved(Coord),
    /// Moved onto the target.
    Arrived(Coord),
    /// Agent was already terminal; nothing changed.
    Absorbed,
}
