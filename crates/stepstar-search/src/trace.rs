//! Path tracing: the best-known route from Start to the current cell.

use stepstar_core::Point;

use crate::engine::Engine;
use crate::neighbors::edge_cost;

impl Engine {
    /// Recompute the on-path flags by walking predecessors back from the
    /// current cell. Neither the current cell nor Start is flagged.
    pub(crate) fn trace(&mut self) {
        self.on_path.fill(false);
        let mut cursor = self.current.and_then(|cur| self.records[cur].predecessor);
        while let Some(idx) = cursor {
            if idx == self.start {
                break;
            }
            self.on_path[idx] = true;
            cursor = self.records[idx].predecessor;
        }
    }

    /// Whether the cell at `p` lies strictly between Start and the current
    /// cell on the traced path.
    ///
    /// # Panics
    ///
    /// If `p` is outside the grid.
    pub fn path_contains(&self, p: Point) -> bool {
        self.on_path[self.grid.index(p)]
    }

    /// The traced route from Start to the current cell, both included.
    /// Empty when there is no current cell.
    pub fn path(&self) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cursor = self.current;
        while let Some(idx) = cursor {
            path.push(self.grid.point(idx));
            if idx == self.start {
                break;
            }
            cursor = self.records[idx].predecessor;
        }
        path.reverse();
        path
    }

    /// Sum of the edge costs along [`path`](Engine::path).
    pub fn path_cost(&self) -> Option<f64> {
        self.current?;
        let path = self.path();
        Some(path.windows(2).map(|w| edge_cost(w[1] - w[0])).sum())
    }
}

#[cfg(test)]
mod tests {
    use stepstar_core::{Grid, Point};

    use crate::Engine;

    #[test]
    fn current_cell_next_to_start_marks_nothing() {
        let g = Grid::new(4, 4).unwrap();
        let mut e = Engine::begin(&g);
        e.step();
        assert_eq!(e.current(), Some(Point::new(1, 1)));
        assert!(e.is_closed(Point::new(1, 1)));
        assert!(!e.path_contains(Point::new(1, 1)));
        assert!(g.iter().all(|(p, _)| !e.path_contains(p)));
        assert_eq!(e.path(), vec![Point::ZERO, Point::new(1, 1)]);
    }

    #[test]
    fn trace_marks_cells_between_start_and_current() {
        let g = Grid::new(4, 4).unwrap();
        let mut e = Engine::begin(&g);
        e.step();
        e.step();
        assert_eq!(e.current(), Some(Point::new(2, 2)));
        assert!(e.path_contains(Point::new(1, 1)));
        assert!(!e.path_contains(Point::new(2, 2)));
    }

    #[test]
    fn found_goal_is_not_marked() {
        let g = Grid::new(4, 4).unwrap();
        let mut e = Engine::begin(&g);
        e.run_to_end();
        let path = e.path();
        assert_eq!(path.len(), 4);
        for p in &path[1..3] {
            assert!(e.path_contains(*p));
        }
        assert!(!e.path_contains(Point::new(3, 3)));
        let cost = e.path_cost().unwrap();
        assert!((cost - e.record(Point::new(3, 3)).cost_so_far.unwrap()).abs() < 1e-12);
    }

    #[test]
    fn no_current_cell_means_empty_path() {
        let mut g = Grid::new(3, 3).unwrap();
        g.toggle_obstruction(Point::new(1, 0));
        g.toggle_obstruction(Point::new(0, 1));
        g.toggle_obstruction(Point::new(1, 1));
        let mut e = Engine::begin(&g);
        e.step();
        assert_eq!(e.current(), None);
        assert!(e.path().is_empty());
        assert_eq!(e.path_cost(), None);
        assert!(g.iter().all(|(p, _)| !e.path_contains(p)));
    }

    #[test]
    fn start_only_path_costs_nothing() {
        let e = Engine::begin(&Grid::new(1, 1).unwrap());
        assert_eq!(e.path(), vec![Point::ZERO]);
        assert_eq!(e.path_cost(), Some(0.0));
        assert!(!e.path_contains(Point::ZERO));
    }
}
