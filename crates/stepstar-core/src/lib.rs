//! **stepstar-core**: the board and the application loop of the stepstar
//! A* visualizer.
//!
//! This crate provides the types shared by the search engine and its
//! drivers: geometry primitives, the obstruction [`Grid`], input messages,
//! styled screen buffers, and the fixed-cadence [`App`] loop.

pub mod app;
pub mod error;
pub mod geom;
pub mod grid;
pub mod messages;
pub mod screen;
pub mod style;

pub use app::{App, AppConfig, Context, Driver, Effect, Model};
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Grid, Kind};
pub use messages::{Key, MouseAction, Msg};
pub use screen::{Frame, FrameCell, Glyph, Screen};
pub use style::{AttrMask, Color, Style};
