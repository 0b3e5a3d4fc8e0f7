//! Command-line settings for the visualizer.

use std::fmt;

/// Ticks per second of the application loop.
pub const TICKS_PER_SECOND: u32 = 60;

/// Errors from parsing or validating [`Settings`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board height or width was zero or negative.
    InvalidDimensions { width: i32, height: i32 },
    /// Steps per second outside `1..=60`.
    InvalidFrequency(u32),
    /// A flag was given without its value.
    MissingValue(String),
    /// A flag's value did not parse as a number.
    InvalidNumber { flag: String, value: String },
    UnknownArgument(String),
    /// `--help` was given; not a failure, but parsing stops there.
    HelpRequested,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "invalid board size {width}x{height}: both must be positive")
            }
            Self::InvalidFrequency(freq) => write!(
                f,
                "invalid frequency {freq}: must be between 1 and {TICKS_PER_SECOND}"
            ),
            Self::MissingValue(flag) => write!(f, "missing value for {flag}"),
            Self::InvalidNumber { flag, value } => {
                write!(f, "invalid number for {flag}: {value}")
            }
            Self::UnknownArgument(arg) => write!(f, "unknown argument: {arg}"),
            Self::HelpRequested => write!(f, "help requested"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Visualizer settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Board rows.
    pub height: i32,
    /// Board columns.
    pub width: i32,
    /// Search steps per second.
    pub frequency: u32,
    /// Seed for obstruction scattering. `None` picks one at startup.
    pub seed: Option<u64>,
    /// Obstructions placed per scatter.
    pub scatter_count: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            height: 20,
            width: 20,
            frequency: 5,
            seed: None,
            scatter_count: 10,
        }
    }
}

impl Settings {
    /// Parse `args` (program name first) over the defaults, then validate.
    pub fn from_args(args: &[String]) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        let mut i = 1;
        while i < args.len() {
            let flag = args[i].as_str();
            match flag {
                "--height" | "-h" => settings.height = number(flag, args.get(i + 1))?,
                "--width" | "-w" => settings.width = number(flag, args.get(i + 1))?,
                "--frequency" | "-f" => settings.frequency = number(flag, args.get(i + 1))?,
                "--seed" | "-s" => settings.seed = Some(number(flag, args.get(i + 1))?),
                "--scatter" | "-n" => settings.scatter_count = number(flag, args.get(i + 1))?,
                "--help" => return Err(ConfigError::HelpRequested),
                _ => return Err(ConfigError::UnknownArgument(flag.to_string())),
            }
            i += 2;
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height <= 0 || self.width <= 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(1..=TICKS_PER_SECOND).contains(&self.frequency) {
            return Err(ConfigError::InvalidFrequency(self.frequency));
        }
        Ok(())
    }

    /// Loop ticks between two search steps.
    #[inline]
    pub fn ticks_per_step(&self) -> u32 {
        (TICKS_PER_SECOND / self.frequency.max(1)).max(1)
    }
}

fn number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    value.parse().map_err(|_| ConfigError::InvalidNumber {
        flag: flag.to_string(),
        value: value.clone(),
    })
}

/// Usage text printed for `--help` and after argument errors.
pub fn usage(program: &str) -> String {
    format!(
        r#"Usage: {program} [OPTIONS]

Watch A* search a grid one step at a time.

OPTIONS:
    -h, --height <ROWS>      Board rows (default 20)
    -w, --width <COLS>       Board columns (default 20)
    -f, --frequency <N>      Search steps per second, 1-60 (default 5)
    -s, --seed <SEED>        Seed for scattered obstructions (default random)
    -n, --scatter <N>        Obstructions per scatter (default 10)
        --help               Print this help

KEYS:
    click        toggle an obstruction
    right click  scatter obstructions (also 'w')
    enter        start the search
    r            reset the board
    q, esc       quit

Log output goes to stderr; set RUST_LOG=debug and redirect it to a file."#
    )
}
