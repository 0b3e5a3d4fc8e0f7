//! The [`Grid`] type, the board the search runs on.
//!
//! A `Grid` owns one [`Kind`] per cell in row-major order. It carries no
//! search state: the engine snapshots it when a search begins.

use rand::{Rng, RngExt};

use crate::error::GridError;
use crate::geom::{Point, Range, RangeIter};

// ---------------------------------------------------------------------------
// Kind
// ---------------------------------------------------------------------------

/// The durable type of a grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    #[default]
    Free,
    /// The fixed start cell at the top-left corner.
    Start,
    /// The fixed goal cell at the bottom-right corner.
    Goal,
    Obstruction,
}

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed-size board of cells with a Start at `(0, 0)` and a Goal at
/// `(width - 1, height - 1)`.
///
/// Coordinates outside [`bounds`](Grid::bounds) are a programming error:
/// every accessor taking a [`Point`] panics on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Kind>,
    width: i32,
    height: i32,
}

impl Grid {
    /// Create a `height` × `width` grid of free cells, then place Start and
    /// Goal.
    ///
    /// On a 1×1 grid the two coincide and the single cell reads as
    /// [`Kind::Start`].
    pub fn new(height: i32, width: i32) -> Result<Self, GridError> {
        if height <= 0 || width <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let mut cells = vec![Kind::Free; (width as usize) * (height as usize)];
        let last = cells.len() - 1;
        cells[last] = Kind::Goal;
        cells[0] = Kind::Start;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    /// Width of the grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Height of the grid.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// The rectangle covered by the grid, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies on the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Point {
        Point::ZERO
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Point {
        Point::new(self.width - 1, self.height - 1)
    }

    /// Row-major index of `p`.
    ///
    /// # Panics
    ///
    /// If `p` is outside the grid.
    #[inline]
    pub fn index(&self, p: Point) -> usize {
        assert!(
            self.contains(p),
            "point {p} outside {}x{} grid",
            self.width,
            self.height
        );
        (p.y as usize) * (self.width as usize) + (p.x as usize)
    }

    /// The point at row-major index `idx`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let w = self.width as usize;
        Point::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The kind of the cell at `p`.
    ///
    /// # Panics
    ///
    /// If `p` is outside the grid.
    #[inline]
    pub fn cell_kind(&self, p: Point) -> Kind {
        self.cells[self.index(p)]
    }

    /// Flip the cell at `p` between [`Kind::Free`] and
    /// [`Kind::Obstruction`] and return its new kind. Start and Goal are left
    /// untouched.
    ///
    /// # Panics
    ///
    /// If `p` is outside the grid.
    pub fn toggle_obstruction(&mut self, p: Point) -> Kind {
        let idx = self.index(p);
        let cell = &mut self.cells[idx];
        *cell = match *cell {
            Kind::Free => Kind::Obstruction,
            Kind::Obstruction => Kind::Free,
            fixed => fixed,
        };
        *cell
    }

    /// Number of cells [`scatter_obstructions`](Grid::scatter_obstructions)
    /// can still pick.
    pub fn free_count(&self) -> usize {
        self.cells.iter().filter(|&&k| k == Kind::Free).count()
    }

    /// Turn `n` uniformly chosen free cells into obstructions.
    ///
    /// Picks that land on Start, Goal or an existing obstruction are
    /// rejected and redrawn, so the caller must keep `n` at or below
    /// [`free_count`](Grid::free_count); a larger `n` never returns.
    pub fn scatter_obstructions(&mut self, n: usize, rng: &mut impl Rng) {
        let mut rejected = 0usize;
        for _ in 0..n {
            loop {
                let p = Point::new(
                    rng.random_range(0..self.width),
                    rng.random_range(0..self.height),
                );
                let idx = self.index(p);
                if self.cells[idx] == Kind::Free {
                    self.cells[idx] = Kind::Obstruction;
                    break;
                }
                rejected += 1;
            }
        }
        log::debug!("scattered {n} obstructions ({rejected} picks rejected)");
    }

    /// Row-major iterator over `(Point, Kind)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds().iter(),
        }
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, Kind)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, Kind);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        Some((p, self.grid.cell_kind(p)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for GridIter<'_> {}

impl<'a> IntoIterator for &'a Grid {
    type Item = (Point, Kind);
    type IntoIter = GridIter<'a>;

    fn into_iter(self) -> GridIter<'a> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_places_start_and_goal() {
        let g = Grid::new(3, 4).unwrap();
        assert_eq!(g.dimensions(), (4, 3));
        assert_eq!(g.cell_kind(Point::new(0, 0)), Kind::Start);
        assert_eq!(g.cell_kind(Point::new(3, 2)), Kind::Goal);
        assert_eq!(g.goal(), Point::new(3, 2));
        assert_eq!(g.iter().filter(|(_, k)| *k == Kind::Free).count(), 10);
    }

    #[test]
    fn new_rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 5),
            Err(GridError::InvalidDimensions {
                width: 5,
                height: 0
            })
        );
        assert!(Grid::new(4, -1).is_err());
    }

    #[test]
    fn single_cell_grid_is_start() {
        let g = Grid::new(1, 1).unwrap();
        assert_eq!(g.start(), g.goal());
        assert_eq!(g.cell_kind(Point::ZERO), Kind::Start);
        assert_eq!(g.free_count(), 0);
    }

    #[test]
    fn toggle_flips_and_restores() {
        let mut g = Grid::new(3, 3).unwrap();
        let p = Point::new(1, 1);
        assert_eq!(g.toggle_obstruction(p), Kind::Obstruction);
        assert_eq!(g.cell_kind(p), Kind::Obstruction);
        assert_eq!(g.toggle_obstruction(p), Kind::Free);
        assert_eq!(g.cell_kind(p), Kind::Free);
    }

    #[test]
    fn toggle_leaves_fixed_cells_alone() {
        let mut g = Grid::new(3, 3).unwrap();
        assert_eq!(g.toggle_obstruction(g.start()), Kind::Start);
        assert_eq!(g.toggle_obstruction(g.goal()), Kind::Goal);
        assert_eq!(g.cell_kind(Point::new(2, 2)), Kind::Goal);
    }

    #[test]
    #[should_panic(expected = "outside 3x3 grid")]
    fn out_of_bounds_access_panics() {
        let g = Grid::new(3, 3).unwrap();
        g.cell_kind(Point::new(3, 0));
    }

    #[test]
    fn index_and_point_round_trip() {
        let g = Grid::new(4, 5).unwrap();
        for (i, (p, _)) in g.iter().enumerate() {
            assert_eq!(g.index(p), i);
            assert_eq!(g.point(i), p);
        }
    }

    #[test]
    fn scatter_places_exactly_n() {
        let mut g = Grid::new(6, 6).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        g.scatter_obstructions(10, &mut rng);
        assert_eq!(g.iter().filter(|(_, k)| *k == Kind::Obstruction).count(), 10);
        assert_eq!(g.cell_kind(g.start()), Kind::Start);
        assert_eq!(g.cell_kind(g.goal()), Kind::Goal);
        assert_eq!(g.free_count(), 36 - 2 - 10);
    }

    #[test]
    fn scatter_can_fill_every_free_cell() {
        let mut g = Grid::new(3, 3).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let n = g.free_count();
        g.scatter_obstructions(n, &mut rng);
        assert_eq!(g.free_count(), 0);
    }

    #[test]
    fn scatter_is_reproducible_with_a_seed() {
        let mut a = Grid::new(8, 8).unwrap();
        let mut b = Grid::new(8, 8).unwrap();
        a.scatter_obstructions(12, &mut StdRng::seed_from_u64(99));
        b.scatter_obstructions(12, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn kind_round_trip() {
        let json = serde_json::to_string(&Kind::Obstruction).unwrap();
        let back: Kind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Kind::Obstruction);
    }
}
