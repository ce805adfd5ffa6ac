//! Diagnostic log for rejected command lines
//!
//! The interpreter writes every rejected line and every fatal startup error to
//! an injected [`DiagnosticSink`]. [`FileLog`] truncates its target when it is
//! opened, so each run starts with a fresh log even if nothing is written.

use crate::validate::Diagnostic;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default log file name, relative to the working directory
pub const DEFAULT_LOG_PATH: &str = "error_log.txt";

/// How entries are written to the log file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// `Line <n> : <message>`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Destination for diagnostics.
pub trait DiagnosticSink {
    /// Record a rejected command line.
    fn record(&mut self, diagnostic: &Diagnostic) -> io::Result<()>;

    /// Record an error that stopped the run before any command was processed.
    fn fatal(&mut self, message: &str) -> io::Result<()>;
}

#[derive(Serialize)]
struct FatalEntry<'a> {
    message: &'a str,
}

/// Log sink backed by a file.
pub struct FileLog {
    path: PathBuf,
    writer: BufWriter<File>,
    format: LogFormat,
    echo: bool,
}

impl FileLog {
    /// Open the log, truncating any previous contents.
    pub fn create(path: impl AsRef<Path>, format: LogFormat) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(Self { path, writer: BufWriter::new(file), format, echo: false })
    }

    /// Also print each entry to stderr.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&mut self, text: &str, json: serde_json::Result<String>) -> io::Result<()> {
        if self.echo {
            eprintln!("{}", text);
        }

        match self.format {
            LogFormat::Text => writeln!(self.writer, "{}", text)?,
            LogFormat::Json => {
                let json =
                    json.map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
                writeln!(self.writer, "{}", json)?;
            }
        }
        // Flush per entry so the log survives an abrupt exit
        self.writer.flush()
    }
}

impl DiagnosticSink for FileLog {
    fn record(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        self.write_line(&diagnostic.to_string(), serde_json::to_string(diagnostic))
    }

    fn fatal(&mut self, message: &str) -> io::Result<()> {
        self.write_line(message, serde_json::to_string(&FatalEntry { message }))
    }
}

/// In-memory sink, for tests and for callers that render diagnostics themselves.
#[derive(Debug, Default, Clone)]
pub struct MemoryLog {
    pub diagnostics: Vec<Diagnostic>,
    pub fatal: Vec<String>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in the text log format, in the order they were recorded.
    pub fn lines(&self) -> Vec<String> {
        self.fatal.iter().cloned().chain(self.diagnostics.iter().map(|d| d.to_string())).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty() && self.fatal.is_empty()
    }
}

impl DiagnosticSink for MemoryLog {
    fn record(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        self.diagnostics.push(diagnostic.clone());
        Ok(())
    }

    fn fatal(&mut self, message: &str) -> io::Result<()> {
        self.fatal.push(message.to_string());
        Ok(())
    }
}
