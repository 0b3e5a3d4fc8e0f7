//! The fixed-cadence application loop: [`Model`], [`Driver`], [`Effect`],
//! [`App`].
//!
//! The loop polls the driver for input, emits [`Msg::Tick`] at the
//! configured cadence, feeds every message to the model and flushes the
//! resulting screen diff. Everything runs on the calling thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use crate::messages::Msg;
use crate::screen::{Screen, compute_frame};

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A simple cooperative-cancellation token backed by an [`AtomicBool`].
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Signal the application loop to stop.
    End,
}

// ---------------------------------------------------------------------------
// Model / Driver
// ---------------------------------------------------------------------------

/// The application model.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `screen`.
    fn draw(&self, screen: &mut Screen);
}

/// Back-end driver (terminal, test harness, ...).
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Push any pending input messages through `tx` and return without
    /// blocking for longer than a frame.
    fn poll_msgs(
        &mut self,
        ctx: &Context,
        tx: Sender<Msg>,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// Flush a computed frame to the screen.
    fn flush(&mut self, frame: crate::screen::Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Clean up / restore the terminal.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    /// Screen width in terminal cells.
    pub width: i32,
    /// Screen height in terminal cells.
    pub height: i32,
    /// Interval between two [`Msg::Tick`]s. A zero interval emits one tick
    /// per poll.
    pub tick: Duration,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    width: i32,
    height: i32,
    tick: Duration,
}

impl<M: Model, D: Driver> App<M, D> {
    /// Create a new application from a configuration.
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            width: config.width,
            height: config.height,
            tick: config.tick,
        }
    }

    /// The model, e.g. to inspect it after [`run`](App::run) returns.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Run the main loop until the model returns [`Effect::End`].
    ///
    /// 1. Initialises the driver and sends `Msg::Init` to the model.
    /// 2. Repeats: poll → emit due ticks → update → draw → diff → flush.
    /// 3. Closes the driver, also when it fails.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.driver.init()?;

        let ctx = Context::new();
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();
        tx.send(Msg::Init).ok();

        let mut prev = Screen::new(self.width, self.height);
        let mut curr = Screen::new(self.width, self.height);

        if let Err(e) = self.process_pending(&rx, &ctx, &mut prev, &mut curr) {
            self.driver.close();
            return Err(e);
        }

        let mut next_tick = Instant::now() + self.tick;
        while !ctx.is_done() {
            if let Err(e) = self.driver.poll_msgs(&ctx, tx.clone()) {
                log::warn!("driver poll failed: {e}");
                ctx.cancel();
                self.driver.close();
                return Err(e);
            }
            if ctx.is_done() {
                break;
            }

            if self.tick.is_zero() {
                tx.send(Msg::Tick).ok();
            } else {
                let now = Instant::now();
                while next_tick <= now {
                    tx.send(Msg::Tick).ok();
                    next_tick += self.tick;
                }
            }

            if let Err(e) = self.process_pending(&rx, &ctx, &mut prev, &mut curr) {
                log::warn!("driver flush failed: {e}");
                self.driver.close();
                return Err(e);
            }
        }

        self.driver.close();
        Ok(())
    }

    /// Drain queued messages, update the model, draw, diff, and flush.
    fn process_pending(
        &mut self,
        rx: &Receiver<Msg>,
        ctx: &Context,
        prev: &mut Screen,
        curr: &mut Screen,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut needs_draw = false;

        while let Ok(msg) = rx.try_recv() {
            if let Some(Effect::End) = self.model.update(msg) {
                ctx.cancel();
                return Ok(());
            }
            needs_draw = true;
        }

        if needs_draw {
            self.model.draw(curr);
            let frame = compute_frame(prev, curr);
            if !frame.cells.is_empty() {
                self.driver.flush(frame)?;
            }
            prev.clone_from(curr);
        }

        Ok(())
    }
}
