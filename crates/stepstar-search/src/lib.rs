//! **stepstar-search**: an A* search that advances one expansion at a
//! time, so a driver can render the frontier between steps.
//!
//! ```
//! use stepstar_core::{Grid, Point};
//! use stepstar_search::{Engine, Outcome};
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! grid.toggle_obstruction(Point::new(1, 1));
//!
//! let mut engine = Engine::begin(&grid);
//! while !engine.is_terminated() {
//!     engine.step();
//! }
//! assert_eq!(engine.outcome(), Some(Outcome::Found));
//! assert_eq!(engine.path().last(), Some(&Point::new(2, 2)));
//! ```

pub mod display;
pub mod distance;
pub mod engine;
pub mod neighbors;
pub mod record;
mod trace;

pub use display::DisplayState;
pub use distance::{euclidean, octile};
pub use engine::{Engine, Outcome, Phase};
pub use neighbors::{Edge, Neighbors, edge_cost};
pub use record::SearchRecord;
