//! The interactive A* visualizer: a [`Model`] that lets the user edit a
//! board, then watches [`Engine`] work through it one step at a time.

pub mod config;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use stepstar_core::{
    AttrMask, Color, Effect, Glyph, Grid, GridError, Key, Kind, Model, MouseAction, Msg, Point,
    Range, Screen, Style,
};
use stepstar_search::{DisplayState, Engine, Outcome, Phase};

pub use config::{ConfigError, Settings};

/// Terminal columns per board cell.
const CELL_WIDTH: i32 = 2;
/// Frame around the board, in terminal cells.
const MARGIN: i32 = 1;

const HELP: &str = "enter start | click wall | w scatter | r reset | q quit";

pub mod palette {
    use stepstar_core::Color;

    pub const BACKGROUND: Color = Color(0xfaf8ef);
    pub const FRAME: Color = Color(0xbbada0);
    pub const ENDPOINT: Color = Color(0xffa500);
    pub const OBSTRUCTION: Color = Color(0x131313);
    pub const OPEN: Color = Color(0x1e824c);
    pub const CLOSED: Color = Color(0x96281b);
    pub const PATH: Color = Color(0xadd8e6);
    pub const FREE: Color = Color(0xffffff);
    pub const TEXT: Color = Color(0x776e65);
}

/// Visualizer state. `engine` is `None` until the user starts a search.
pub struct Visualizer {
    settings: Settings,
    blank: Grid,
    grid: Grid,
    engine: Option<Engine>,
    rng: StdRng,
    ticks: u32,
}

impl Visualizer {
    pub fn new(settings: Settings) -> Result<Self, GridError> {
        let blank = Grid::new(settings.height, settings.width)?;
        let seed = settings.seed.unwrap_or_else(|| rand::rng().random());
        log::info!(
            "board {}x{}, {} steps/s, seed {seed}",
            settings.width,
            settings.height,
            settings.frequency
        );
        Ok(Self {
            grid: blank.clone(),
            blank,
            engine: None,
            rng: StdRng::seed_from_u64(seed),
            ticks: 0,
            settings,
        })
    }

    /// The board as the user has edited it.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn engine(&self) -> Option<&Engine> {
        self.engine.as_ref()
    }

    /// Terminal size needed to show the board, status and help lines.
    pub fn screen_size(&self) -> (i32, i32) {
        let board = self.frame_range();
        let width = board
            .width()
            .max(HELP.len() as i32)
            .max(self.status_width() as i32);
        (width, board.height() + 2)
    }

    /// Widest status line this board can produce.
    fn status_width(&self) -> usize {
        let n = self.grid.len();
        // Every g and f stays below two diagonal moves per cell.
        let cost = 2.0 * n as f64 * std::f64::consts::SQRT_2;
        let editing = self.editing_status(n).len();
        let searching = Self::search_status(
            "no path",
            n,
            n,
            n,
            &format!("{cost:.1}"),
            &format!("{cost:.2}"),
        )
        .len();
        editing.max(searching)
    }

    /// Board cells in screen coordinates.
    fn board_range(&self) -> Range {
        let (w, h) = self.grid.dimensions();
        Range::new(MARGIN, MARGIN, MARGIN + w * CELL_WIDTH, MARGIN + h)
    }

    /// Board plus its frame in screen coordinates.
    fn frame_range(&self) -> Range {
        let b = self.board_range();
        Range::new(0, 0, b.max.x + MARGIN, b.max.y + MARGIN)
    }

    fn reset(&mut self) {
        self.grid.clone_from(&self.blank);
        self.engine = None;
        self.ticks = 0;
        log::info!("board reset");
    }

    fn begin(&mut self) {
        if self.engine.is_some() {
            return;
        }
        let walls = self
            .grid
            .iter()
            .filter(|&(_, k)| k == Kind::Obstruction)
            .count();
        log::info!("search started with {walls} obstructions");
        self.engine = Some(Engine::begin(&self.grid));
        self.ticks = 0;
    }

    fn scatter(&mut self) {
        if self.engine.is_some() {
            return;
        }
        let n = self.settings.scatter_count.min(self.grid.free_count());
        self.grid.scatter_obstructions(n, &mut self.rng);
    }

    /// `pos` is relative to the board's top-left cell.
    fn click(&mut self, pos: Point) {
        if self.engine.is_some() {
            return;
        }
        let (w, h) = self.grid.dimensions();
        if !Range::new(0, 0, w * CELL_WIDTH, h).contains(pos) {
            return;
        }
        let cell = Point::new(pos.x / CELL_WIDTH, pos.y);
        let kind = self.grid.toggle_obstruction(cell);
        log::debug!("{cell} is now {kind:?}");
    }

    fn tick(&mut self) {
        let ticks_per_step = self.settings.ticks_per_step();
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        if engine.is_terminated() {
            return;
        }
        self.ticks += 1;
        if self.ticks < ticks_per_step {
            return;
        }
        self.ticks = 0;
        engine.step();
        match engine.outcome() {
            Some(Outcome::Found) => log::info!(
                "path found after {} steps, cost {:.2}",
                engine.steps(),
                engine.path_cost().unwrap_or(0.0)
            ),
            Some(Outcome::NoPath) => log::info!("no path after {} steps", engine.steps()),
            None => {}
        }
    }

    /// What the cell at `p` shows: its state and whether it is on the path.
    fn cell_state(&self, p: Point) -> (DisplayState, bool) {
        match &self.engine {
            Some(e) => (e.display_state(p), e.path_contains(p)),
            None => (
                match self.grid.cell_kind(p) {
                    Kind::Free => DisplayState::Free,
                    Kind::Start => DisplayState::Start,
                    Kind::Goal => DisplayState::Goal,
                    Kind::Obstruction => DisplayState::Obstruction,
                },
                false,
            ),
        }
    }

    fn cell_color(&self, p: Point) -> Color {
        match self.cell_state(p) {
            (DisplayState::Start | DisplayState::Goal, _) => palette::ENDPOINT,
            (DisplayState::Obstruction, _) => palette::OBSTRUCTION,
            (_, true) => palette::PATH,
            (DisplayState::Open, _) => palette::OPEN,
            (DisplayState::Closed, _) => palette::CLOSED,
            (DisplayState::Free, _) => palette::FREE,
        }
    }

    /// Two-column label for a reached cell: its f-value, rounded. Closed
    /// cells keep the value they had when they left the frontier.
    fn cell_label(&self, p: Point) -> [char; 2] {
        let label = self
            .engine
            .as_ref()
            .filter(|e| {
                matches!(
                    e.display_state(p),
                    DisplayState::Open | DisplayState::Closed
                )
            })
            .and_then(|e| e.estimated_total(p))
            .map(|f| {
                if f < 99.5 {
                    format!("{f:>2.0}")
                } else {
                    "++".to_string()
                }
            });
        match label {
            Some(s) => {
                let mut chars = s.chars();
                [chars.next().unwrap_or(' '), chars.next().unwrap_or(' ')]
            }
            None => [' ', ' '],
        }
    }

    fn editing_status(&self, free: usize) -> String {
        format!(
            "editing {}x{} board, {free} free cells",
            self.grid.width(),
            self.grid.height()
        )
    }

    fn search_status(
        phase: &str,
        steps: usize,
        open: usize,
        closed: usize,
        f: &str,
        cost: &str,
    ) -> String {
        format!("{phase}: step {steps} open {open} closed {closed} f {f} cost {cost}")
    }

    fn status(&self) -> String {
        let Some(e) = &self.engine else {
            return self.editing_status(self.grid.free_count());
        };
        let f = e
            .current()
            .and_then(|p| e.estimated_total(p))
            .map_or_else(|| "-".to_string(), |f| format!("{f:.1}"));
        let cost = e
            .path_cost()
            .map_or_else(|| "-".to_string(), |c| format!("{c:.2}"));
        let phase = match (e.phase(), e.outcome()) {
            (Phase::Running, _) => "running",
            (Phase::Terminated, Some(Outcome::Found)) => "found",
            (Phase::Terminated, _) => "no path",
        };
        Self::search_status(phase, e.steps(), e.open_len(), e.closed_len(), &f, &cost)
    }
}

impl Model for Visualizer {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match self.board_range().rel_msg(msg) {
            Msg::Quit
            | Msg::KeyDown {
                key: Key::Escape | Key::Char('q'),
            } => return Some(Effect::End),
            Msg::KeyDown { key: Key::Enter } => self.begin(),
            Msg::KeyDown { key: Key::Char('r') } => self.reset(),
            Msg::KeyDown { key: Key::Char('w') }
            | Msg::Mouse {
                action: MouseAction::Secondary,
                ..
            } => self.scatter(),
            Msg::Mouse {
                action: MouseAction::Main,
                pos,
            } => self.click(pos),
            Msg::Tick => self.tick(),
            Msg::Init | Msg::Screen { .. } | Msg::KeyDown { .. } => {}
        }
        None
    }

    fn draw(&self, screen: &mut Screen) {
        let background = Style::default().with_bg(palette::BACKGROUND);
        screen.fill(Glyph::new(' ', background));

        let frame = Glyph::new(' ', Style::default().with_bg(palette::FRAME));
        for p in self.frame_range() {
            screen.set(p, frame);
        }

        let origin = self.board_range().min;
        for (p, _) in &self.grid {
            let style = Style::default()
                .with_fg(palette::FREE)
                .with_bg(self.cell_color(p));
            let [a, b] = self.cell_label(p);
            let at = origin + Point::new(p.x * CELL_WIDTH, p.y);
            screen.set(at, Glyph::new(a, style));
            screen.set(at.shift(1, 0), Glyph::new(b, style));
        }

        let text = background.with_fg(palette::TEXT);
        let below = self.frame_range().max.y;
        screen.text(
            Point::new(0, below),
            &self.status(),
            text.with_attrs(AttrMask::BOLD),
        );
        screen.text(
            Point::new(0, below + 1),
            HELP,
            text.with_attrs(AttrMask::DIM),
        );
    }
}
