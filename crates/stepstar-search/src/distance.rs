use stepstar_core::Point;

/// Euclidean (L2) distance between two points: the A* heuristic.
///
/// Admissible and consistent for unit cardinal steps and `√2` diagonal
/// steps.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}

/// Octile distance: the exact cost of the cheapest 8-way route between two
/// points on an obstruction-free grid.
#[inline]
pub fn octile(a: Point, b: Point) -> f64 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    let diagonal = dx.min(dy);
    let straight = dx.max(dy) - diagonal;
    f64::from(diagonal) * std::f64::consts::SQRT_2 + f64::from(straight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_matches_pythagoras() {
        assert_eq!(euclidean(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(Point::new(2, 2), Point::new(2, 2)), 0.0);
        assert_eq!(
            euclidean(Point::new(1, 5), Point::new(4, 1)),
            euclidean(Point::new(4, 1), Point::new(1, 5))
        );
    }

    #[test]
    fn octile_mixes_diagonal_and_straight() {
        let d = octile(Point::new(0, 0), Point::new(4, 1));
        assert!((d - (3.0 + std::f64::consts::SQRT_2)).abs() < 1e-12);
        assert_eq!(octile(Point::new(0, 0), Point::new(0, 3)), 3.0);
    }

    #[test]
    fn euclidean_never_exceeds_octile() {
        for x in -6..=6 {
            for y in -6..=6 {
                let p = Point::new(x, y);
                assert!(euclidean(Point::ZERO, p) <= octile(Point::ZERO, p) + 1e-12);
            }
        }
    }
}
