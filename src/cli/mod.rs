//! Command line parsing for squish-sparkle.

mod args;

pub use args::{CliConfig, Command, VERSION, parse_args, print_usage};
