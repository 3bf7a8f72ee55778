//! CLI argument definitions using clap
//!
//! Commands:
//! - wattsage advise --facts <path> [--config <path>] [--offline]
//! - wattsage serve [--config <path>]
//! - wattsage rules

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// WattSage - a rule-based home energy advisor for Sri Lankan households
#[derive(Parser, Debug)]
#[command(name = "wattsage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a fact file and print the advice triple as JSON
    Advise {
        /// Path to a JSON object of household facts
        #[arg(long)]
        facts: PathBuf,

        /// Path to configuration file
        #[arg(long, default_value = "./wattsage.json")]
        config: PathBuf,

        /// Skip the external rephrasing call; every explanation uses the
        /// deterministic fallback
        #[arg(long)]
        offline: bool,
    },

    /// Start the HTTP surface
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./wattsage.json")]
        config: PathBuf,
    },

    /// List the builtin rule catalog
    Rules,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
