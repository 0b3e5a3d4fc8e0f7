use std::f64::consts::SQRT_2;

use stepstar_core::{Point, Range};

/// A move from a cell to one of its eight surrounding cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub pos: Point,
    pub cost: f64,
}

/// Cost of a single move by `offset`: 1 along an axis, `√2` diagonally.
#[inline]
pub fn edge_cost(offset: Point) -> f64 {
    if offset.is_diagonal() { SQRT_2 } else { 1.0 }
}

/// Cached neighbour computation helper.
///
/// Enumerates the 8-way neighbours of a cell that lie inside a range,
/// reusing one buffer across calls.
#[derive(Debug, Clone)]
pub struct Neighbors {
    buf: Vec<Edge>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// The in-range neighbours of `p`, each with the cost of stepping to it,
    /// in [`Point::OFFSETS_8`] order.
    pub fn all(&mut self, p: Point, within: Range) -> &[Edge] {
        self.buf.clear();
        for d in Point::OFFSETS_8 {
            let n = p + d;
            if within.contains(n) {
                self.buf.push(Edge {
                    pos: n,
                    cost: edge_cost(d),
                });
            }
        }
        &self.buf
    }
}
