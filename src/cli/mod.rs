//! # CLI
//!
//! Command-line interface:
//! - `wattsage advise --facts <json> [--offline]`: one-shot evaluation
//! - `wattsage serve`: start the HTTP surface
//! - `wattsage rules`: list the builtin catalog

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run_command;
pub use errors::{CliError, CliResult};

/// Parse arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}
