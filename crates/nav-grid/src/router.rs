//! Routing trait and the two shortest-path implementations.
//!
//! # Graph model
//!
//! The grid is a 4-connected graph with unit edge weights.  `Forbidden`
//! cells are not nodes at all: they are never enqueued and never expanded
//! into.  The start coordinate is always a node, whatever its own
//! classification.
//!
//! # Pluggability
//!
//! `nav-sim` calls routing through the [`Router`] trait.  [`BfsRouter`] is
//! the default; [`DijkstraRouter`] runs a priority-queue search keyed by
//! accumulated distance.  With uniform weights both return paths of the same
//! (minimal) length.  Which of several equal-length paths comes back depends
//! only on neighbour order (left, right, up, down) and is not part of the
//! contract.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use nav_core::Coord;

use crate::{Grid, GridError, GridResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a routing query: the cells to visit in order, excluding the
/// start and including the target.
///
/// An empty path means either "already there" or "no route"; callers that
/// care compare the start with the target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub steps: Vec<Coord>,
}

impl Path {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of single-cell moves, i.e. the hop count.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The final cell (the target) if the path is non-empty.
    #[inline]
    pub fn last(&self) -> Option<Coord> {
        self.steps.last().copied()
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<Coord> {
        self.steps.get(i).copied()
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.steps.contains(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.steps.iter().copied()
    }
}

impl From<Vec<Coord>> for Path {
    fn from(steps: Vec<Coord>) -> Self {
        Self { steps }
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
pub trait Router: Send + Sync {
    /// Compute a minimum-hop path from `from` to `to`.
    ///
    /// Returns an empty path when `from == to` or when `to` cannot be
    /// reached (including when `to` itself is `Forbidden`).  A non-empty
    /// path must end at `to`; `nav_agent::Agent::plan` rejects one that
    /// does not.
    ///
    /// # Errors
    ///
    /// `EmptyGrid` for a grid with no cells, `InvalidCoordinate` if either
    /// endpoint is out of range.
    fn route(&self, grid: &Grid, from: Coord, to: Coord) -> GridResult<Path>;
}

/// Shortest path with the default router ([`BfsRouter`]).
pub fn shortest_path(grid: &Grid, start: Coord, end: Coord) -> GridResult<Path> {
    BfsRouter.route(grid, start, end)
}

// ── BfsRouter ─────────────────────────────────────────────────────────────────

/// Breadth-first search with a FIFO queue.  Each coordinate is settled the
/// first time it is discovered.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsRouter;

impl Router for BfsRouter {
    fn route(&self, grid: &Grid, from: Coord, to: Coord) -> GridResult<Path> {
        check_endpoints(grid, from, to)?;
        if from == to || !grid[to].is_passable() {
            return Ok(Path::empty());
        }

        let width = grid.width();
        let mut seen = vec![false; grid.len()];
        // prev[v] = coordinate v was first discovered from.
        let mut prev: Vec<Option<Coord>> = vec![None; grid.len()];

        seen[from.index(width)] = true;
        let mut queue = VecDeque::from([from]);

        while let Some(cur) = queue.pop_front() {
            if cur == to {
                break;
            }
            for next in grid.neighbors(cur) {
                let i = next.index(width);
                if !seen[i] {
                    seen[i] = true;
                    prev[i] = Some(cur);
                    queue.push_back(next);
                }
            }
        }

        Ok(reconstruct(&prev, from, to, width))
    }
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the unit-weight grid graph.
///
/// Equivalent to BFS in path length; kept because the priority-queue form
/// is the natural starting point for weighting `Preferred` cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, grid: &Grid, from: Coord, to: Coord) -> GridResult<Path> {
        check_endpoints(grid, from, to)?;
        if from == to || !grid[to].is_passable() {
            return Ok(Path::empty());
        }

        let width = grid.width();
        // dist[v] = best known hop count to reach v.
        let mut dist = vec![u32::MAX; grid.len()];
        let mut prev: Vec<Option<Coord>> = vec![None; grid.len()];

        dist[from.index(width)] = 0;

        // Min-heap: (distance, coord).  Secondary key Coord keeps the pop
        // order deterministic.
        let mut heap: BinaryHeap<Reverse<(u32, Coord)>> = BinaryHeap::new();
        heap.push(Reverse((0, from)));

        while let Some(Reverse((d, cur))) = heap.pop() {
            if cur == to {
                break;
            }
            // Skip stale heap entries.
            if d > dist[cur.index(width)] {
                continue;
            }
            for next in grid.neighbors(cur) {
                let i = next.index(width);
                let nd = d + 1;
                // Strict `<`: an equal-length rediscovery never overwrites.
                if nd < dist[i] {
                    dist[i] = nd;
                    prev[i] = Some(cur);
                    heap.push(Reverse((nd, next)));
                }
            }
        }

        Ok(reconstruct(&prev, from, to, width))
    }
}

// ── Shared internals ──────────────────────────────────────────────────────────

fn check_endpoints(grid: &Grid, from: Coord, to: Coord) -> GridResult<()> {
    if grid.is_empty() {
        return Err(GridError::EmptyGrid);
    }
    grid.check(from)?;
    grid.check(to)
}

/// Walk predecessors back from `to`.  A gap before reaching `from` means
/// `to` was never discovered, so there is no route.
fn reconstruct(prev: &[Option<Coord>], from: Coord, to: Coord, width: u32) -> Path {
    let mut steps = Vec::new();
    let mut cur = to;
    while cur != from {
        steps.push(cur);
        match prev[cur.index(width)] {
            Some(p) => cur = p,
            None => return Path::empty(),
        }
    }
    steps.reverse();
    Path { steps }
}
