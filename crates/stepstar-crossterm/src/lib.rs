//! Crossterm terminal driver for stepstar.
//!
//! Provides a [`CrosstermDriver`] that implements [`stepstar_core::Driver`],
//! drawing frames into the alternate screen and turning key presses, mouse
//! clicks and resizes into [`Msg`]s. Input the visualizer has no use for is
//! dropped.

use std::io::{self, Write};
use std::sync::mpsc::Sender;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute, queue,
    style::{self, Attribute, Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use stepstar_core::{AttrMask, Color, Context, Driver, Frame, Key, MouseAction, Msg, Point};

/// How long a poll waits for the first event.
const POLL_TIMEOUT: Duration = Duration::from_millis(16);

/// Maps a [`stepstar_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        let (r, g, b) = (c.r(), c.g(), c.b());
        CtColor::Rgb { r, g, b }
    }
}

/// Maps a crossterm [`KeyCode`] to a stepstar [`Key`].
fn to_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        _ => None,
    }
}

fn to_mouse_action(btn: MouseButton) -> Option<MouseAction> {
    match btn {
        MouseButton::Left => Some(MouseAction::Main),
        MouseButton::Right => Some(MouseAction::Secondary),
        MouseButton::Middle => None,
    }
}

/// Translate one terminal event. Key releases, mouse motion, wheel and
/// focus events yield `None`.
fn to_msg(ev: Event) -> Option<Msg> {
    match ev {
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => to_key(code).map(Msg::key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(btn),
            column,
            row,
            ..
        }) => to_mouse_action(btn).map(|action| Msg::Mouse {
            action,
            pos: Point::new(i32::from(column), i32::from(row)),
        }),
        Event::Resize(w, h) => Some(Msg::Screen {
            width: i32::from(w),
            height: i32::from(h),
        }),
        _ => None,
    }
}

/// A terminal back-end for stepstar using crossterm. Mouse capture is
/// always on.
#[derive(Debug, Default)]
pub struct CrosstermDriver;

impl CrosstermDriver {
    pub fn new() -> Self {
        Self
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            event::EnableMouseCapture
        )?;
        log::debug!("terminal initialised");
        Ok(())
    }

    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: Sender<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if !event::poll(POLL_TIMEOUT)? {
            return Ok(());
        }

        while event::poll(Duration::ZERO)? {
            if ctx.is_done() {
                return Ok(());
            }
            if let Some(msg) = to_msg(event::read()?) {
                log::trace!("input: {msg:?}");
                tx.send(msg).ok();
            }
        }

        Ok(())
    }

    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
        let mut stdout = io::stdout().lock();

        for fc in &frame.cells {
            let p = fc.pos;
            let glyph = &fc.glyph;

            queue!(
                stdout,
                cursor::MoveTo(p.x as u16, p.y as u16),
                SetForegroundColor(to_ct_color(glyph.style.fg)),
                SetBackgroundColor(to_ct_color(glyph.style.bg))
            )?;

            let attrs = glyph.style.attrs;
            if attrs.contains(AttrMask::BOLD) {
                queue!(stdout, style::SetAttribute(Attribute::Bold))?;
            }
            if attrs.contains(AttrMask::DIM) {
                queue!(stdout, style::SetAttribute(Attribute::Dim))?;
            }

            write!(stdout, "{}", glyph.ch)?;

            if attrs != AttrMask::NONE {
                queue!(stdout, style::SetAttribute(Attribute::Reset))?;
            }
        }

        stdout.flush()?;
        Ok(())
    }

    fn close(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(
            stdout,
            event::DisableMouseCapture,
            style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        log::debug!("terminal restored");
    }
}
