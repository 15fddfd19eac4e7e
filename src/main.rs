//! Squish Sparkle - a cosy wellbeing corner in the terminal.
//!
//! ```text
//! main() -> parse_args -> init_tracing -> App::new -> run()
//!                                                  |
//!                                                  v
//!                       tick(now) -> draw -> poll(50ms) -> map_key -> handle
//! ```

mod activities;
mod app;
mod cli;
mod input;
mod models;
mod sparkles;
mod store;
mod text_input;
mod theme;
mod timer;
mod ui;
mod utils;

use std::fs::{self, OpenOptions};
use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::prelude::*;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app::App;
use crate::cli::{CliConfig, Command, VERSION, parse_args, print_usage};
use crate::input::map_key;
use crate::store::{APP_DIR, Store};

/// Poll timeout; also the slowest the clock ticks
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> io::Result<()> {
    let config = match parse_args() {
        Ok(Command::Run(config)) => config,
        Ok(Command::Help) => {
            print_usage();
            return Ok(());
        }
        Ok(Command::Version) => {
            println!("squish-sparkle {}", VERSION);
            return Ok(());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    init_tracing();

    let mut app = build_app(&config, Instant::now());

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .and_then(|mut terminal| run(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Exited with error");
    } else {
        tracing::info!("Goodbye");
    }
    result
}

fn build_app(config: &CliConfig, now: Instant) -> App {
    let store = Store::new(config.data_path.clone().unwrap_or_else(Store::default_path));
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    tracing::info!(
        path = %store.path().display(),
        seeded = config.seed.is_some(),
        sparkles = config.sparkles,
        "Starting"
    );
    App::new(store, rng, config.sparkles, now)
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.tick(Instant::now());

        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.should_quit {
            break;
        }

        // Handle input
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = map_key(app.input_context(), key) {
                    app.handle(action, Instant::now());
                }
            }
        }
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let (log_file, init_warnings) = open_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // Nothing may be written to stdout/stderr while the TUI is up
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_log_file() -> (Option<(PathBuf, fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            let dir = parent.display();
            warnings.push(format!("Failed to create log dir {dir}: {e}"));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                let file = candidate.display();
                warnings.push(format!("Failed to open log file {file}: {e}"));
            }
        }
    }

    (None, warnings)
}

fn log_file_candidates() -> Vec<PathBuf> {
    let log_name = format!("{APP_DIR}.log");
    vec![
        Store::app_dir().join("logs").join(&log_name),
        PathBuf::from(format!(".{APP_DIR}"))
            .join("logs")
            .join(log_name),
    ]
}
