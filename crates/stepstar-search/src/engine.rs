use std::cmp::Ordering;

use stepstar_core::{Grid, Kind, Point};

use crate::display::DisplayState;
use crate::distance::euclidean;
use crate::neighbors::Neighbors;
use crate::record::SearchRecord;

/// Lifecycle of an [`Engine`]. A search that has not begun yet has no
/// engine at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Running,
    Terminated,
}

/// How a terminated search ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal was selected from the frontier.
    Found,
    /// The frontier emptied before reaching the goal.
    NoPath,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Membership {
    Unseen,
    Open,
    Closed,
}

/// An A* search that advances one frontier expansion per [`step`] call.
///
/// The engine works on a snapshot of the grid taken by [`begin`]; editing
/// the caller's grid afterwards does not affect it.
///
/// Among open cells with equal estimated total cost the one with the lower
/// heuristic is expanded first, then the one earlier in row-major order.
///
/// [`step`]: Engine::step
/// [`begin`]: Engine::begin
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) grid: Grid,
    pub(crate) start: usize,
    pub(crate) goal: usize,
    pub(crate) records: Vec<SearchRecord>,
    membership: Vec<Membership>,
    open: Vec<usize>,
    closed_len: usize,
    pub(crate) current: Option<usize>,
    phase: Phase,
    outcome: Option<Outcome>,
    pub(crate) on_path: Vec<bool>,
    steps: usize,
    nbuf: Neighbors,
}

impl Engine {
    /// Snapshot `grid` and seed the frontier with the neighbours of Start.
    ///
    /// Start is settled from the outset: its cost is 0 and it never enters
    /// the open or closed set. When Start and Goal coincide the returned
    /// engine is already terminated with [`Outcome::Found`].
    pub fn begin(grid: &Grid) -> Self {
        let grid = grid.clone();
        let goal_p = grid.goal();
        let records = grid
            .iter()
            .map(|(p, _)| SearchRecord::new(euclidean(p, goal_p)))
            .collect();
        let start = grid.index(grid.start());
        let goal = grid.index(goal_p);
        let len = grid.len();

        let mut engine = Self {
            grid,
            start,
            goal,
            records,
            membership: vec![Membership::Unseen; len],
            open: Vec::new(),
            closed_len: 0,
            current: None,
            phase: Phase::Running,
            outcome: None,
            on_path: vec![false; len],
            steps: 0,
            nbuf: Neighbors::new(),
        };
        engine.records[start].cost_so_far = Some(0.0);

        if start == goal {
            engine.current = Some(goal);
            engine.finish(Outcome::Found);
            return engine;
        }

        engine.expand(start);
        log::debug!(
            "search begun on {}x{} grid, {} cells seeded",
            engine.grid.width(),
            engine.grid.height(),
            engine.open.len()
        );
        engine
    }

    /// Advance the search by one unit of work.
    ///
    /// Selects the open cell with the lowest estimated total cost. If it is
    /// the goal the search terminates; otherwise its neighbours are relaxed
    /// and it moves to the closed set. An empty frontier terminates the
    /// search with no current cell. Does nothing once terminated.
    pub fn step(&mut self) {
        if self.phase == Phase::Terminated {
            return;
        }
        self.steps += 1;

        let Some(pos) = self.select_next() else {
            self.current = None;
            self.finish(Outcome::NoPath);
            return;
        };
        let next = self.open[pos];
        self.current = Some(next);

        if next == self.goal {
            self.finish(Outcome::Found);
            return;
        }

        self.expand(next);
        self.open.swap_remove(pos);
        self.membership[next] = Membership::Closed;
        self.closed_len += 1;

        log::trace!(
            "step {}: closed {} (f = {:.3}), open {}, closed {}",
            self.steps,
            self.grid.point(next),
            self.records[next].estimated_total(),
            self.open.len(),
            self.closed_len
        );
        self.trace();
    }

    /// Step until the search terminates and return how it ended.
    ///
    /// Never takes more than `width * height` steps.
    pub fn run_to_end(&mut self) -> Outcome {
        for _ in 0..=self.grid.len() {
            if let Some(outcome) = self.outcome {
                return outcome;
            }
            self.step();
        }
        self.outcome.unwrap_or(Outcome::NoPath)
    }

    /// Position in `open` of the next cell to expand.
    fn select_next(&self) -> Option<usize> {
        self.open
            .iter()
            .enumerate()
            .min_by(|&(_, &a), &(_, &b)| self.rank(a, b))
            .map(|(pos, _)| pos)
    }

    fn rank(&self, a: usize, b: usize) -> Ordering {
        let (ra, rb) = (&self.records[a], &self.records[b]);
        ra.estimated_total()
            .total_cmp(&rb.estimated_total())
            .then(ra.heuristic.total_cmp(&rb.heuristic))
            .then(a.cmp(&b))
    }

    /// Open every admissible neighbour of `from` and relax it.
    fn expand(&mut self, from: usize) {
        // Only Start and open cells are expanded, and both carry a cost.
        let from_g = self.records[from].cost_so_far.unwrap_or(0.0);
        let origin = self.grid.point(from);
        let mut nbuf = std::mem::take(&mut self.nbuf);

        for edge in nbuf.all(origin, self.grid.bounds()) {
            let ni = self.grid.index(edge.pos);
            if ni == self.start
                || self.membership[ni] == Membership::Closed
                || self.grid.cell_kind(edge.pos) == Kind::Obstruction
            {
                continue;
            }
            if self.membership[ni] == Membership::Unseen {
                self.membership[ni] = Membership::Open;
                self.open.push(ni);
            }

            let candidate = from_g + edge.cost;
            let rec = &mut self.records[ni];
            if rec.cost_so_far.is_none() || rec.estimated_total() > candidate + rec.heuristic {
                rec.cost_so_far = Some(candidate);
                rec.predecessor = Some(from);
            }
        }

        self.nbuf = nbuf;
    }

    fn finish(&mut self, outcome: Outcome) {
        self.phase = Phase::Terminated;
        self.outcome = Some(outcome);
        self.trace();
        match outcome {
            Outcome::Found => log::debug!(
                "goal reached after {} steps, path cost {:.3}",
                self.steps,
                self.path_cost().unwrap_or(0.0)
            ),
            Outcome::NoPath => log::debug!(
                "frontier exhausted after {} steps, {} cells closed",
                self.steps,
                self.closed_len
            ),
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The grid snapshot the search runs on.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// `None` while the search is running.
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// The most recently selected cell.
    #[inline]
    pub fn current(&self) -> Option<Point> {
        self.current.map(|i| self.grid.point(i))
    }

    /// Number of [`step`](Engine::step) calls made while running.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    #[inline]
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    #[inline]
    pub fn closed_len(&self) -> usize {
        self.closed_len
    }

    /// # Panics
    ///
    /// If `p` is outside the grid.
    pub fn is_open(&self, p: Point) -> bool {
        self.membership[self.grid.index(p)] == Membership::Open
    }

    /// # Panics
    ///
    /// If `p` is outside the grid.
    pub fn is_closed(&self, p: Point) -> bool {
        self.membership[self.grid.index(p)] == Membership::Closed
    }

    /// The bookkeeping for the cell at `p`.
    ///
    /// # Panics
    ///
    /// If `p` is outside the grid.
    pub fn record(&self, p: Point) -> &SearchRecord {
        &self.records[self.grid.index(p)]
    }

    /// f = g + h for a reached cell, `None` for one not reached yet.
    ///
    /// # Panics
    ///
    /// If `p` is outside the grid.
    pub fn estimated_total(&self, p: Point) -> Option<f64> {
        let rec = self.record(p);
        rec.cost_so_far.map(|_| rec.estimated_total())
    }

    /// What to show for the cell at `p`.
    ///
    /// # Panics
    ///
    /// If `p` is outside the grid.
    pub fn display_state(&self, p: Point) -> DisplayState {
        let idx = self.grid.index(p);
        match self.grid.cell_kind(p) {
            Kind::Start => DisplayState::Start,
            Kind::Goal => DisplayState::Goal,
            Kind::Obstruction => DisplayState::Obstruction,
            Kind::Free => match self.membership[idx] {
                Membership::Unseen => DisplayState::Free,
                Membership::Open => DisplayState::Open,
                Membership::Closed => DisplayState::Closed,
            },
        }
    }
}
