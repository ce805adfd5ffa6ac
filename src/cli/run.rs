//! The `run` command: interpret a command file

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{load_config, merge_cli_overrides, CliOverrides};
use crate::log::{FileLog, LogFormat};
use crate::session::{run_file, SessionError};

use super::{EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// Execute the run command
pub fn run_commands(
    input: &Path,
    log: Option<PathBuf>,
    log_format: Option<LogFormat>,
    echo: bool,
    config_path: Option<&Path>,
) -> ExitCode {
    let mut config = match load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_INVALID_ARGS);
        }
    };

    let overrides = CliOverrides { log_path: log, log_format, echo: echo.then_some(true) };
    merge_cli_overrides(&mut config, &overrides);

    // Opened before reading input so the log is truncated on every run
    let mut sink = match FileLog::create(&config.log.path, config.log.format) {
        Ok(sink) => sink.with_echo(config.log.echo),
        Err(e) => {
            eprintln!("Error: Cannot open log file '{}': {}", config.log.path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run_file(input, &mut sink, &mut out) {
        Ok(_) => ExitCode::from(EXIT_SUCCESS),
        Err(e @ SessionError::Io(_)) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
        Err(e) => {
            if !config.log.echo {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(EXIT_ERROR)
        }
    }
}
