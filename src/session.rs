//! Interpreter pipeline: parse, validate, execute, in line order
//!
//! A [`Session`] feeds raw commands through the validator and executor one at
//! a time. Rejected lines go to the diagnostic sink and are skipped. Output
//! from `S` goes to the writer. Neither destination is global, so callers (and
//! tests) choose where each one goes.
//!
//! A failed log write does not stop the run. The first failure is reported on
//! stderr, and the lost entries are counted in [`Session::unlogged`].

use crate::executor::{Effect, Executor, NO_BITMAP_MESSAGE};
use crate::log::DiagnosticSink;
use crate::parser::{parse_stream, RawCommand};
use crate::validate::validate_command;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that stop a run.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Path was empty or the file does not exist
    #[error("Commands file not present at {}", .path.display())]
    MissingCommandsFile { path: PathBuf },
    /// File exists but could not be read in full
    #[error("Commands file could not be read at {}: {source}", .path.display())]
    UnreadableCommandsFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing the output (or the startup error) failed
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Counts for a completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from the input
    pub lines: usize,
    /// Lines that passed validation and were executed
    pub executed: usize,
    /// Lines rejected with a diagnostic
    pub rejected: usize,
}

/// Interpreter state for one run.
#[derive(Debug, Default)]
pub struct Session {
    executor: Executor,
    summary: RunSummary,
    unlogged: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn executor(&self) -> &Executor {
        &self.executor
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Diagnostics the sink failed to write.
    pub fn unlogged(&self) -> usize {
        self.unlogged
    }

    /// Validate and execute a single command.
    pub fn process(
        &mut self,
        raw: &RawCommand,
        sink: &mut dyn DiagnosticSink,
        out: &mut dyn Write,
    ) -> Result<(), SessionError> {
        self.summary.lines += 1;

        let command = match validate_command(raw) {
            Ok(command) => command,
            Err(diagnostic) => {
                self.summary.rejected += 1;
                if let Err(e) = sink.record(&diagnostic) {
                    if self.unlogged == 0 {
                        eprintln!("Warning: could not write to diagnostic log: {}", e);
                    }
                    self.unlogged += 1;
                }
                return Ok(());
            }
        };

        self.summary.executed += 1;
        match self.executor.execute(&command) {
            Effect::Rendered(text) => writeln!(out, "{}", text)?,
            Effect::NoBitmap => writeln!(out, "{}", NO_BITMAP_MESSAGE)?,
            Effect::Applied | Effect::Skipped => {}
        }

        Ok(())
    }

    /// Process commands strictly in order.
    pub fn run<'a, I>(
        &mut self,
        commands: I,
        sink: &mut dyn DiagnosticSink,
        out: &mut dyn Write,
    ) -> Result<RunSummary, SessionError>
    where
        I: IntoIterator<Item = &'a RawCommand>,
    {
        for raw in commands {
            self.process(raw, sink, out)?;
        }
        out.flush()?;
        Ok(self.summary)
    }
}

/// Read a command file and interpret it.
///
/// A missing or unreadable file writes one line to the sink and returns an
/// error before any command runs.
pub fn run_file(
    path: &Path,
    sink: &mut dyn DiagnosticSink,
    out: &mut dyn Write,
) -> Result<RunSummary, SessionError> {
    let commands = match read_commands(path) {
        Ok(commands) => commands,
        Err(e) => {
            sink.fatal(&e.to_string())?;
            return Err(e);
        }
    };

    Session::new().run(&commands, sink, out)
}

/// Read and parse a whole command file.
pub fn read_commands(path: &Path) -> Result<Vec<RawCommand>, SessionError> {
    if path.as_os_str().is_empty() || !path.exists() {
        return Err(SessionError::MissingCommandsFile { path: path.to_path_buf() });
    }

    let unreadable =
        |source: io::Error| SessionError::UnreadableCommandsFile { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(unreadable)?;
    parse_stream(file).map_err(unreadable)
}
