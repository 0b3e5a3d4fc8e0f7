/// Per-cell search bookkeeping.
///
/// Created for every cell when a search begins and only changed by
/// relaxation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchRecord {
    /// Best known cost from Start (g). `None` until the cell is reached.
    pub cost_so_far: Option<f64>,
    /// Heuristic estimate of the remaining cost to Goal (h).
    pub heuristic: f64,
    /// Row-major index of the cell this one was best reached from.
    pub predecessor: Option<usize>,
}

impl SearchRecord {
    pub(crate) fn new(heuristic: f64) -> Self {
        Self {
            cost_so_far: None,
            heuristic,
            predecessor: None,
        }
    }

    /// f = g + h, or h alone while the cell is unreached.
    #[inline]
    pub fn estimated_total(&self) -> f64 {
        self.cost_so_far.unwrap_or(0.0) + self.heuristic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreached_total_is_heuristic() {
        let mut r = SearchRecord::new(2.5);
        assert_eq!(r.estimated_total(), 2.5);
        r.cost_so_far = Some(1.0);
        assert_eq!(r.estimated_total(), 3.5);
    }
}
