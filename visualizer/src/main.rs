use std::process::ExitCode;
use std::time::Duration;

use stepstar_core::{App, AppConfig};
use stepstar_crossterm::CrosstermDriver;
use stepstar_visualizer::config::{TICKS_PER_SECOND, usage};
use stepstar_visualizer::{ConfigError, Settings, Visualizer};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("stepstar", String::as_str);

    let settings = match Settings::from_args(&args) {
        Ok(settings) => settings,
        Err(ConfigError::HelpRequested) => {
            println!("{}", usage(program));
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(program));
            return ExitCode::from(2);
        }
    };

    if let Err(e) = run(settings) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
    let model = Visualizer::new(settings)?;
    let (width, height) = model.screen_size();
    let mut app = App::new(AppConfig {
        model,
        driver: CrosstermDriver::new(),
        width,
        height,
        tick: Duration::from_secs(1) / TICKS_PER_SECOND,
    });
    app.run()
}
