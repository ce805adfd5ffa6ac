//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod check;
mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::log::LogFormat;

/// Exit codes for the `bitmap` binary
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Bitmap editor - interpret drawing commands against a text bitmap
#[derive(Parser)]
#[command(name = "bitmap")]
#[command(about = "Bitmap editor - interpret drawing commands (I, C, L, V, H, S) against a text bitmap")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a command file, printing the bitmap on every `S`
    Run {
        /// File with one command per line
        input: PathBuf,

        /// Diagnostic log file (default: error_log.txt, or log.path in bitmap.toml)
        #[arg(short, long)]
        log: Option<PathBuf>,

        /// Diagnostic log format
        #[arg(long, value_enum)]
        log_format: Option<LogFormat>,

        /// Also print diagnostics to stderr
        #[arg(long)]
        echo: bool,

        /// Path to bitmap.toml (default: search upward from the current directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a command file without executing it
    Check {
        /// File with one command per line
        input: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { input, log, log_format, echo, config } => {
            run::run_commands(&input, log, log_format, echo, config.as_deref())
        }
        Commands::Check { input, json } => check::run_check(&input, json),
    }
}
