//! The [`Screen`] type: a buffer of styled [`Glyph`]s that a [`Model`]
//! draws into, plus the [`Frame`] diff sent to a [`Driver`].
//!
//! [`Model`]: crate::Model
//! [`Driver`]: crate::Driver

use crate::geom::{Point, Range};
use crate::style::Style;

// ---------------------------------------------------------------------------
// Glyph
// ---------------------------------------------------------------------------

/// A styled character occupying one terminal cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A fixed-size, row-major buffer of [`Glyph`]s.
///
/// Writes outside the screen are silently clipped, so models can draw
/// without checking the terminal size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    glyphs: Vec<Glyph>,
    width: i32,
    height: i32,
}

impl Screen {
    /// Create a blank screen of the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            glyphs: vec![Glyph::default(); (w as usize) * (h as usize)],
            width: w,
            height: h,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.width, self.height)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        self.bounds()
            .contains(p)
            .then(|| (p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    /// The glyph at `p`, or a blank glyph off-screen.
    pub fn at(&self, p: Point) -> Glyph {
        self.index(p)
            .map(|i| self.glyphs[i])
            .unwrap_or_default()
    }

    /// Set the glyph at `p`. No-op off-screen.
    pub fn set(&mut self, p: Point, glyph: Glyph) {
        if let Some(i) = self.index(p) {
            self.glyphs[i] = glyph;
        }
    }

    /// Fill the whole screen with `glyph`.
    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Write `text` left to right starting at `p`, one glyph per char.
    /// Returns the position just past the last char written.
    pub fn text(&mut self, p: Point, text: &str, style: Style) -> Point {
        let mut pos = p;
        for ch in text.chars() {
            self.set(pos, Glyph::new(ch, style));
            pos = pos.shift(1, 0);
        }
        pos
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single glyph that changed between two draws.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub glyph: Glyph,
    pub pos: Point,
}

/// The set of glyph changes between two draws.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

/// Compute the difference between two same-sized screens.
pub fn compute_frame(prev: &Screen, curr: &Screen) -> Frame {
    let bounds = curr.bounds();
    let cells = bounds
        .iter()
        .filter_map(|p| {
            let glyph = curr.at(p);
            (prev.at(p) != glyph).then_some(FrameCell { glyph, pos: p })
        })
        .collect();
    Frame {
        cells,
        width: bounds.width(),
        height: bounds.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_at_clip_off_screen() {
        let mut s = Screen::new(4, 3);
        s.set(Point::new(2, 1), Glyph::new('#', Style::default()));
        assert_eq!(s.at(Point::new(2, 1)).ch, '#');
        s.set(Point::new(10, 10), Glyph::new('x', Style::default()));
        assert_eq!(s.at(Point::new(10, 10)), Glyph::default());
    }

    #[test]
    fn text_advances_and_clips() {
        let mut s = Screen::new(5, 1);
        let end = s.text(Point::new(2, 0), "abcd", Style::default());
        assert_eq!(end, Point::new(6, 0));
        assert_eq!(s.at(Point::new(4, 0)).ch, 'c');
    }

    #[test]
    fn compute_frame_lists_only_changes() {
        let a = Screen::new(3, 2);
        let mut b = a.clone();
        b.set(Point::new(1, 0), Glyph::new('A', Style::default()));
        let frame = compute_frame(&a, &b);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!(frame.cells[0].pos, Point::new(1, 0));
        assert_eq!(frame.cells[0].glyph.ch, 'A');
        assert!(compute_frame(&b, &b).cells.is_empty());
    }
}
