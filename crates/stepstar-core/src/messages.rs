//! Input events: [`Msg`], [`Key`], [`MouseAction`].

use crate::geom::Point;

/// A keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Escape,
    /// A printable character.
    Char(char),
}

/// A mouse button press.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseAction {
    /// Primary (left) button pressed.
    Main,
    /// Secondary (right) button pressed.
    Secondary,
}

/// A message delivered to the [`Model`](crate::Model).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    /// Sent once when the application starts.
    Init,
    /// A key was pressed.
    KeyDown { key: Key },
    /// A mouse button was pressed at a screen cell.
    Mouse { action: MouseAction, pos: Point },
    /// The fixed-cadence clock advanced by one tick.
    Tick,
    /// The terminal was resized.
    Screen { width: i32, height: i32 },
    /// Request to quit.
    Quit,
}

impl Msg {
    /// Convenience: create a `KeyDown`.
    pub fn key(key: Key) -> Self {
        Self::KeyDown { key }
    }

    /// Convenience: a main-button click at `pos`.
    pub fn click(pos: Point) -> Self {
        Self::Mouse {
            action: MouseAction::Main,
            pos,
        }
    }
}
