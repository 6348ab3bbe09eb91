//! Unit tests for nav-agent.

use nav_core::Coord;
use nav_grid::{BfsRouter, Grid, GridError, GridResult, Path, Router};

use crate::{Agent, AgentState, Step};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn c(col: u32, row: u32) -> Coord {
    Coord::new(col, row)
}

/// Straight three-cell route east along row 0.
fn east_path() -> Path {
    Path::from(vec![c(1, 0), c(2, 0), c(3, 0)])
}

/// Router that always answers with the same one-step path, wherever the
/// target is.
struct FixedRouter(Coord);

impl Router for FixedRouter {
    fn route(&self, _grid: &Grid, _from: Coord, _to: Coord) -> GridResult<Path> {
        Ok(Path::from(vec![self.0]))
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use super::*;

    #[test]
    fn non_empty_path_starts_idle() {
        let a = Agent::new(Coord::ORIGIN, c(3, 0), east_path());
        assert_eq!(a.state(), AgentState::Idle);
        assert_eq!(a.position(), Coord::ORIGIN);
        assert_eq!(a.traversed(), 0);
        assert_eq!(a.remaining(), 3);
        assert!(a.has_route());
        assert!(a.can_advance());
    }

    #[test]
    fn empty_path_to_elsewhere_is_blocked() {
        let a = Agent::new(Coord::ORIGIN, c(2, 2), Path::empty());
        assert_eq!(a.state(), AgentState::Blocked);
        assert!(!a.has_route());
        assert!(!a.can_advance());
    }

    #[test]
    fn empty_path_at_target_is_arrived() {
        let a = Agent::new(Coord::ORIGIN, Coord::ORIGIN, Path::empty());
        assert_eq!(a.state(), AgentState::Arrived);
        assert!(a.state().is_terminal());
    }

    #[test]
    fn plan_routes_through_router() {
        let g = Grid::from_rows(&["...", "###", "..."]).unwrap();
        let blocked = Agent::plan(&BfsRouter, &g, c(0, 0), c(2, 2)).unwrap();
        assert_eq!(blocked.state(), AgentState::Blocked);

        let ok = Agent::plan(&BfsRouter, &g, c(0, 0), c(2, 0)).unwrap();
        assert_eq!(ok.state(), AgentState::Idle);
        assert_eq!(ok.path().len(), 2);
    }

    #[test]
    fn plan_on_single_cell_grid_is_arrived() {
        let g = Grid::from_rows(&["."]).unwrap();
        let a = Agent::plan(&BfsRouter, &g, Coord::ORIGIN, Coord::ORIGIN).unwrap();
        assert!(a.path().is_empty());
        assert_eq!(a.state(), AgentState::Arrived);
    }

    #[test]
    fn plan_rejects_route_ending_off_target() {
        let g = Grid::from_rows(&["...", "...", "..."]).unwrap();
        let err = Agent::plan(&FixedRouter(c(1, 0)), &g, Coord::ORIGIN, c(2, 2)).unwrap_err();
        assert!(matches!(
            err,
            GridError::RouteMismatch { end, target } if end == c(1, 0) && target == c(2, 2)
        ));

        let ok = Agent::plan(&FixedRouter(c(1, 0)), &g, Coord::ORIGIN, c(1, 0)).unwrap();
        assert_eq!(ok.state(), AgentState::Idle);
    }

    #[test]
    fn plan_propagates_invalid_coordinate() {
        let g = Grid::from_rows(&[".."]).unwrap();
        assert!(Agent::plan(&BfsRouter, &g, c(0, 0), c(5, 0)).is_err());
    }
}

// ── Advancing ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod advancing {
    use super::*;

    #[test]
    fn walks_path_one_cell_per_call() {
        let mut a = Agent::new(Coord::ORIGIN, c(3, 0), east_path());

        assert_eq!(a.advance(), Step::Moved(c(1, 0)));
        assert_eq!(a.state(), AgentState::Advancing);
        assert_eq!(a.position(), c(1, 0));

        assert_eq!(a.advance(), Step::Moved(c(2, 0)));
        assert_eq!(a.traversed(), 2);

        assert_eq!(a.advance(), Step::Arrived(c(3, 0)));
        assert_eq!(a.state(), AgentState::Arrived);
        assert_eq!(a.position(), a.target());
        assert_eq!(a.remaining(), 0);
    }

    #[test]
    fn single_cell_path_goes_straight_to_arrived() {
        let mut a = Agent::new(Coord::ORIGIN, c(1, 0), Path::from(vec![c(1, 0)]));
        assert_eq!(a.advance(), Step::Arrived(c(1, 0)));
        assert_eq!(a.state(), AgentState::Arrived);
    }

    #[test]
    fn advance_after_arrival_is_idempotent() {
        let mut a = Agent::new(Coord::ORIGIN, c(3, 0), east_path());
        while a.can_advance() {
            a.advance();
        }
        let before = a.clone();
        for _ in 0..5 {
            assert_eq!(a.advance(), Step::Absorbed);
        }
        assert_eq!(a, before);
    }

    #[test]
    fn advance_when_blocked_is_absorbed() {
        let mut a = Agent::new(Coord::ORIGIN, c(2, 2), Path::empty());
        assert_eq!(a.advance(), Step::Absorbed);
        assert_eq!(a.state(), AgentState::Blocked);
        assert_eq!(a.position(), Coord::ORIGIN);
    }
}
