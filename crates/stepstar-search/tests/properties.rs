//! Property tests for the incremental search over randomly obstructed grids.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use stepstar_core::{Grid, Kind, Point};
use stepstar_search::{Engine, Outcome, edge_cost, octile};

fn obstructed(height: i32, width: i32, density: f64, seed: u64) -> Grid {
    let mut grid = Grid::new(height, width).unwrap();
    let n = (grid.free_count() as f64 * density) as usize;
    grid.scatter_obstructions(n, &mut StdRng::seed_from_u64(seed));
    grid
}

/// Plain Dijkstra over the same 8-way moves, `None` when Goal is unreachable.
fn reference_cost(grid: &Grid) -> Option<f64> {
    let mut dist = vec![f64::INFINITY; grid.len()];
    let mut done = vec![false; grid.len()];
    dist[grid.index(grid.start())] = 0.0;
    loop {
        let u = (0..grid.len())
            .filter(|&i| !done[i] && dist[i].is_finite())
            .min_by(|&a, &b| dist[a].total_cmp(&dist[b]))?;
        if u == grid.index(grid.goal()) {
            return Some(dist[u]);
        }
        done[u] = true;
        let p = grid.point(u);
        for d in Point::OFFSETS_8 {
            let n = p + d;
            if !grid.contains(n) || grid.cell_kind(n) == Kind::Obstruction {
                continue;
            }
            let v = grid.index(n);
            let alt = dist[u] + edge_cost(d);
            if alt < dist[v] {
                dist[v] = alt;
            }
        }
    }
}

proptest! {
    #[test]
    fn terminates_within_cell_count(
        height in 1i32..12,
        width in 1i32..12,
        density in 0.0f64..0.6,
        seed in any::<u64>(),
    ) {
        let grid = obstructed(height, width, density, seed);
        let mut engine = Engine::begin(&grid);
        for _ in 0..grid.len() {
            engine.step();
        }
        prop_assert!(engine.is_terminated());
        prop_assert!(engine.steps() <= grid.len());
    }

    #[test]
    fn closed_set_only_grows(
        height in 2i32..10,
        width in 2i32..10,
        density in 0.0f64..0.5,
        seed in any::<u64>(),
    ) {
        let grid = obstructed(height, width, density, seed);
        let mut engine = Engine::begin(&grid);
        let mut closed: Vec<Point> = Vec::new();
        while !engine.is_terminated() {
            let before = engine.closed_len();
            engine.step();
            prop_assert!(engine.closed_len() >= before);
            for &p in &closed {
                prop_assert!(engine.is_closed(p));
            }
            closed = grid.bounds().iter().filter(|&p| engine.is_closed(p)).collect();
            prop_assert_eq!(closed.len(), engine.closed_len());
        }
    }

    #[test]
    fn open_and_closed_are_disjoint(
        height in 2i32..10,
        width in 2i32..10,
        density in 0.0f64..0.5,
        seed in any::<u64>(),
    ) {
        let grid = obstructed(height, width, density, seed);
        let mut engine = Engine::begin(&grid);
        while !engine.is_terminated() {
            engine.step();
            let mut open = 0;
            for (p, kind) in &grid {
                prop_assert!(!(engine.is_open(p) && engine.is_closed(p)));
                if engine.is_open(p) || engine.is_closed(p) {
                    prop_assert_ne!(kind, Kind::Obstruction);
                    prop_assert_ne!(p, grid.start());
                }
                open += usize::from(engine.is_open(p));
            }
            prop_assert_eq!(open, engine.open_len());
        }
    }

    #[test]
    fn free_grid_cost_is_octile(height in 1i32..15, width in 1i32..15) {
        let grid = Grid::new(height, width).unwrap();
        let mut engine = Engine::begin(&grid);
        prop_assert_eq!(engine.run_to_end(), Outcome::Found);
        let cost = engine.path_cost().unwrap();
        prop_assert!((cost - octile(grid.start(), grid.goal())).abs() < 1e-9);
    }

    #[test]
    fn matches_reference_search(
        height in 1i32..10,
        width in 1i32..10,
        density in 0.0f64..0.6,
        seed in any::<u64>(),
    ) {
        let grid = obstructed(height, width, density, seed);
        let mut engine = Engine::begin(&grid);
        let outcome = engine.run_to_end();
        match reference_cost(&grid) {
            Some(best) => {
                prop_assert_eq!(outcome, Outcome::Found);
                prop_assert!((engine.path_cost().unwrap() - best).abs() < 1e-9);
            }
            None => {
                prop_assert_eq!(outcome, Outcome::NoPath);
                prop_assert!(engine.path().is_empty());
            }
        }
    }

    #[test]
    fn found_path_is_a_walk_through_free_cells(
        height in 1i32..10,
        width in 1i32..10,
        density in 0.0f64..0.4,
        seed in any::<u64>(),
    ) {
        let grid = obstructed(height, width, density, seed);
        let mut engine = Engine::begin(&grid);
        if engine.run_to_end() == Outcome::Found {
            let path = engine.path();
            prop_assert_eq!(path.first().copied(), Some(grid.start()));
            prop_assert_eq!(path.last().copied(), Some(grid.goal()));
            for w in path.windows(2) {
                let d = w[1] - w[0];
                prop_assert!(d.x.abs() <= 1 && d.y.abs() <= 1 && d != Point::ZERO);
            }
            for &p in &path {
                prop_assert_ne!(grid.cell_kind(p), Kind::Obstruction);
            }
        }
    }

    #[test]
    fn start_and_goal_survive_edits(
        height in 1i32..8,
        width in 1i32..8,
        clicks in prop::collection::vec((0i32..8, 0i32..8), 0..40),
        seed in any::<u64>(),
    ) {
        let mut grid = Grid::new(height, width).unwrap();
        for (x, y) in clicks {
            let p = Point::new(x % width, y % height);
            grid.toggle_obstruction(p);
        }
        let free = grid.free_count();
        grid.scatter_obstructions(free / 2, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(grid.cell_kind(grid.start()), Kind::Start);
        if grid.len() > 1 {
            prop_assert_eq!(grid.cell_kind(grid.goal()), Kind::Goal);
        }
        prop_assert_eq!(grid.free_count(), free - free / 2);
    }

    #[test]
    fn toggle_twice_restores_cell(
        height in 1i32..8,
        width in 1i32..8,
        x in 0i32..8,
        y in 0i32..8,
    ) {
        let mut grid = Grid::new(height, width).unwrap();
        let p = Point::new(x % width, y % height);
        let before = grid.clone();
        grid.toggle_obstruction(p);
        grid.toggle_obstruction(p);
        prop_assert_eq!(grid, before);
    }
}

#[test]
fn snapshot_is_independent_of_later_edits() {
    let mut grid = Grid::new(4, 4).unwrap();
    let mut engine = Engine::begin(&grid);
    for p in [Point::new(1, 1), Point::new(2, 2), Point::new(2, 1)] {
        grid.toggle_obstruction(p);
    }
    assert_eq!(engine.run_to_end(), Outcome::Found);
    assert!((engine.path_cost().unwrap() - 3.0 * std::f64::consts::SQRT_2).abs() < 1e-12);
}
