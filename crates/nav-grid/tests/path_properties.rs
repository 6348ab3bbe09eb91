//! Property tests: both routers against a brute-force reference on small
//! random grids.

use nav_core::{Cell, Coord};
use nav_grid::{BfsRouter, DijkstraRouter, Grid, Path, Router};
use proptest::prelude::*;

/// Hop distances from `start` by naive relaxation to a fixpoint.  Slow and
/// obviously correct, which is the point.
fn reference_distance(grid: &Grid, start: Coord, end: Coord) -> Option<usize> {
    let mut dist = vec![usize::MAX; grid.len()];
    dist[start.index(grid.width())] = 0;
    let mut changed = true;
    while changed {
        changed = false;
        for (c, cell) in grid.cells() {
            if !cell.is_passable() {
                continue;
            }
            for (dc, dr) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let Some(n) = c.offset(dc, dr) else { continue };
                if !grid.in_bounds(n) {
                    continue;
                }
                let dn = dist[n.index(grid.width())];
                let dc_ = &mut dist[c.index(grid.width())];
                if dn != usize::MAX && dn + 1 < *dc_ {
                    *dc_ = dn + 1;
                    changed = true;
                }
            }
        }
    }
    let d = dist[end.index(grid.width())];
    (d != usize::MAX).then_some(d)
}

fn check_path(grid: &Grid, start: Coord, end: Coord, path: &Path) -> Result<(), TestCaseError> {
    let mut prev = start;
    for step in path.iter() {
        prop_assert!(prev.is_adjacent(step), "{} -> {} is not a unit step", prev, step);
        prop_assert!(grid[step].is_passable(), "{} is forbidden", step);
        prev = step;
    }
    prop_assert_eq!(path.last(), Some(end));
    Ok(())
}

fn arb_case() -> impl Strategy<Value = (Grid, Coord, Coord)> {
    (1u32..7, 1u32..7).prop_flat_map(|(w, h)| {
        (
            prop::collection::vec(0usize..3, (w * h) as usize),
            0..w,
            0..h,
            0..w,
            0..h,
        )
            .prop_map(move |(cells, sc, sr, ec, er)| {
                let cells = cells.into_iter().map(|i| Cell::ALL[i]).collect();
                let grid = Grid::new(w, h, cells).expect("dimensions match");
                (grid, Coord::new(sc, sr), Coord::new(ec, er))
            })
    })
}

proptest! {
    #[test]
    fn routers_match_reference_length((grid, start, end) in arb_case()) {
        let expected = if start == end || !grid[end].is_passable() {
            None
        } else {
            reference_distance(&grid, start, end)
        };

        for router in [&BfsRouter as &dyn Router, &DijkstraRouter] {
            let path = router.route(&grid, start, end).unwrap();
            match expected {
                Some(d) => {
                    prop_assert_eq!(path.len(), d);
                    check_path(&grid, start, end, &path)?;
                }
                None => prop_assert!(path.is_empty()),
            }
        }
    }

    #[test]
    fn bfs_and_dijkstra_agree_on_length((grid, start, end) in arb_case()) {
        let a = BfsRouter.route(&grid, start, end).unwrap();
        let b = DijkstraRouter.route(&grid, start, end).unwrap();
        prop_assert_eq!(a.len(), b.len());
    }

    #[test]
    fn start_equal_end_is_always_empty((grid, start, _end) in arb_case()) {
        prop_assert!(BfsRouter.route(&grid, start, start).unwrap().is_empty());
        prop_assert!(DijkstraRouter.route(&grid, start, start).unwrap().is_empty());
    }
}
