//! The traversal state machine.

use nav_core::Coord;
use nav_grid::{Grid, GridError, GridResult, Path, Router};

use crate::{AgentState, Step};

/// An agent walking a precomputed path from `start` to `target`.
///
/// Only [`advance`][Agent::advance] mutates an agent.  A new grid or target
/// means a new agent; there is no way to rewind or re-target one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    start:    Coord,
    position: Coord,
    target:   Coord,
    path:     Path,
    /// Index of the next cell in `path`; also the number of moves made.
    cursor:   usize,
    state:    AgentState,
}

impl Agent {
    /// Build an agent at `start` that will follow `path` to `target`.
    ///
    /// The initial state is `Idle` for a non-empty path.  An empty path is
    /// `Arrived` when `start == target` (nothing to walk) and `Blocked`
    /// otherwise.  A non-empty `path` must end at `target`; use
    /// [`plan`](Self::plan) to have that checked.
    pub fn new(start: Coord, target: Coord, path: Path) -> Self {
        debug_assert!(
            path.is_empty() || path.last() == Some(target),
            "path must end at the target"
        );
        let state = if !path.is_empty() {
            AgentState::Idle
        } else if start == target {
            AgentState::Arrived
        } else {
            AgentState::Blocked
        };
        Self { start, position: start, target, path, cursor: 0, state }
    }

    /// Route from `start` to `target` on `grid` with `router`, then build
    /// the agent.
    ///
    /// # Errors
    ///
    /// Whatever the router returns, or `RouteMismatch` when it hands back a
    /// non-empty path that does not end at `target`.
    pub fn plan<R: Router + ?Sized>(
        router: &R,
        grid:   &Grid,
        start:  Coord,
        target: Coord,
    ) -> GridResult<Self> {
        let path = router.route(grid, start, target)?;
        if let Some(end) = path.last().filter(|&end| end != target) {
            return Err(GridError::RouteMismatch { end, target });
        }
        Ok(Self::new(start, target, path))
    }

    /// Move one cell along the path.
    ///
    /// Calling this on an `Arrived` or `Blocked` agent is a no-op that
    /// returns [`Step::Absorbed`].
    pub fn advance(&mut self) -> Step {
        let Some(next) = self.path.get(self.cursor) else {
            return Step::Absorbed;
        };
        self.position = next;
        self.cursor += 1;
        if self.cursor == self.path.len() {
            self.state = AgentState::Arrived;
            Step::Arrived(next)
        } else {
            self.state = AgentState::Advancing;
            Step::Moved(next)
        }
    }

    #[inline]
    pub fn state(&self) -> AgentState {
        self.state
    }

    #[inline]
    pub fn position(&self) -> Coord {
        self.position
    }

    #[inline]
    pub fn start(&self) -> Coord {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Coord {
        self.target
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Moves made so far.
    #[inline]
    pub fn traversed(&self) -> usize {
        self.cursor
    }

    /// Moves still to make.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.path.len() - self.cursor
    }

    /// `true` when a route exists (non-empty path), whether or not it has
    /// been walked yet.
    #[inline]
    pub fn has_route(&self) -> bool {
        !self.path.is_empty()
    }

    /// `true` if the next `advance` would move the agent.
    #[inline]
    pub fn can_advance(&self) -> bool {
        self.cursor < self.path.len()
    }
}
