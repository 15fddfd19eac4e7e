//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Profile file override; `None` means the platform data dir
    pub data_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub sparkles: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            seed: None,
            sparkles: true,
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(CliConfig),
    Help,
    Version,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Squish Sparkle - a cosy corner for your terminal");
    eprintln!();
    eprintln!("Usage: squish-sparkle [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --data <FILE>     Profile file");
    eprintln!("                    (default: <data dir>/squish-sparkle/squish-sparkle-app.json)");
    eprintln!("  --seed <N>        Seed the random source for repeatable puzzles and stories");
    eprintln!("  --no-sparkles     Turn off the floating sparkles");
    eprintln!("  -h, --help        Show this help message");
    eprintln!("  -V, --version     Show version");
    eprintln!();
    eprintln!("Logs go to <data dir>/squish-sparkle/logs/squish-sparkle.log");
    eprintln!("(filter with RUST_LOG).");
}

/// Parse the process arguments
pub fn parse_args() -> io::Result<Command> {
    parse_from(std::env::args().skip(1))
}

/// Parse arguments, excluding the program name
pub fn parse_from<I>(args: I) -> io::Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut config = CliConfig::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--no-sparkles" => config.sparkles = false,
            "--data" => {
                let value = args.next().ok_or_else(|| missing_value("--data"))?;
                config.data_path = Some(PathBuf::from(value));
            }
            "--seed" => {
                let value = args.next().ok_or_else(|| missing_value("--seed"))?;
                let seed = value.parse().map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("Invalid seed value: {}", value),
                    )
                })?;
                config.seed = Some(seed);
            }
            _ => {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unknown argument: {}", arg),
                ));
            }
        }
    }

    Ok(Command::Run(config))
}

fn missing_value(flag: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("Missing value for {}", flag),
    )
}
