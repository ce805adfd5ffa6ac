//! Validation of raw commands
//!
//! Turns a [`RawCommand`] into a typed [`Command`] or exactly one
//! [`Diagnostic`]. Checks run in a fixed order per command key: argument
//! count, color token shape, numeric coordinates, then coordinate range. The
//! first failing check wins.

use crate::color::Color;
use crate::command::{Command, CommandKind};
use crate::grid::{MAX_PIXEL, MIN_PIXEL};
use crate::parser::{parse_stream, RawCommand};
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::num::IntErrorKind;
use std::path::Path;

/// Type of validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// Command key is not one of I, C, L, V, H, S (or the line is blank)
    Unsupported,
    /// Wrong number of arguments for the key
    Arity,
    /// A coordinate or dimension is not an integer
    NotNumeric,
    /// A coordinate or dimension is outside [MIN_PIXEL, MAX_PIXEL]
    OutOfRange,
    /// The color argument has no alphabetic character
    InvalidColor,
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueType::Unsupported => write!(f, "unsupported"),
            IssueType::Arity => write!(f, "arity"),
            IssueType::NotNumeric => write!(f, "not_numeric"),
            IssueType::OutOfRange => write!(f, "out_of_range"),
            IssueType::InvalidColor => write!(f, "invalid_color"),
        }
    }
}

/// A rejected line.
///
/// Displays as `Line <n> : <message>`, the format written to the diagnostic log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Line number (1-indexed) of the rejected command
    pub line: usize,
    pub issue_type: IssueType,
    /// Human-readable reason
    pub message: String,
}

impl Diagnostic {
    pub fn new(line: usize, issue_type: IssueType, message: impl Into<String>) -> Self {
        Self { line, issue_type, message: message.into() }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {} : {}", self.line, self.message)
    }
}

/// Validate one raw command.
///
/// # Examples
///
/// ```
/// use bitmap_editor::parser::parse_line;
/// use bitmap_editor::validate::validate_command;
///
/// assert!(validate_command(&parse_line("I 5 6", 1)).is_ok());
///
/// let err = validate_command(&parse_line("L 1 2", 3)).unwrap_err();
/// assert_eq!(err.to_string(), "Line 3 : Command key L requires 3 parameters");
/// ```
pub fn validate_command(raw: &RawCommand) -> Result<Command, Diagnostic> {
    let Some(kind) = CommandKind::from_key(&raw.kind) else {
        let message = if raw.kind.is_empty() {
            "Unsupported command (empty line)".to_string()
        } else {
            format!("Unsupported command key {}", raw.kind)
        };
        return Err(Diagnostic::new(raw.line, IssueType::Unsupported, message));
    };

    if raw.args.len() != kind.arity() {
        let message = match kind.arity() {
            0 => format!("Command key {} does not require any parameters", kind),
            n => format!("Command key {} requires {} parameters", kind, n),
        };
        return Err(Diagnostic::new(raw.line, IssueType::Arity, message));
    }

    match kind {
        CommandKind::Init => {
            let [height, width] = coordinates::<2>(raw, kind)?;
            Ok(Command::Init { height, width })
        }
        CommandKind::Clear => Ok(Command::Clear),
        CommandKind::Show => Ok(Command::Show),
        CommandKind::ColorPixel => {
            let color = color_argument(raw, kind, 2)?;
            let [x, y] = coordinates::<2>(raw, kind)?;
            Ok(Command::ColorPixel { x, y, color })
        }
        CommandKind::DrawVertical => {
            let color = color_argument(raw, kind, 3)?;
            let [x, y1, y2] = coordinates::<3>(raw, kind)?;
            Ok(Command::DrawVertical { x, y1, y2, color })
        }
        CommandKind::DrawHorizontal => {
            let color = color_argument(raw, kind, 3)?;
            let [y, x1, x2] = coordinates::<3>(raw, kind)?;
            Ok(Command::DrawHorizontal { y, x1, x2, color })
        }
    }
}

enum CoordinateError {
    NotNumeric,
    OutOfRange,
}

/// Parse one coordinate token. Integers too large for `i64` count as out of range.
fn parse_coordinate(token: &str) -> Result<usize, CoordinateError> {
    match token.parse::<i64>() {
        Ok(v) if v >= MIN_PIXEL as i64 && v <= MAX_PIXEL as i64 => Ok(v as usize),
        Ok(_) => Err(CoordinateError::OutOfRange),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                Err(CoordinateError::OutOfRange)
            }
            _ => Err(CoordinateError::NotNumeric),
        },
    }
}

/// Parse the first `N` arguments as coordinates.
///
/// A non-numeric token anywhere is reported before any range problem.
fn coordinates<const N: usize>(
    raw: &RawCommand,
    kind: CommandKind,
) -> Result<[usize; N], Diagnostic> {
    let mut values = [0usize; N];
    let mut out_of_range = false;

    for (slot, token) in values.iter_mut().zip(&raw.args) {
        match parse_coordinate(token) {
            Ok(v) => *slot = v,
            Err(CoordinateError::OutOfRange) => out_of_range = true,
            Err(CoordinateError::NotNumeric) => {
                let message = if kind == CommandKind::Init {
                    "Command key I requires all parameters to be numeric".to_string()
                } else {
                    format!("Command key {} requires all coordinate parameters to be numeric", kind)
                };
                return Err(Diagnostic::new(raw.line, IssueType::NotNumeric, message));
            }
        }
    }

    if out_of_range {
        return Err(Diagnostic::new(
            raw.line,
            IssueType::OutOfRange,
            "Pixels value out of valid range",
        ));
    }

    Ok(values)
}

fn color_argument(raw: &RawCommand, kind: CommandKind, index: usize) -> Result<Color, Diagnostic> {
    let token = raw.args.get(index).map(String::as_str).unwrap_or_default();

    Color::parse(token).map_err(|_| {
        let ordinal = match index {
            2 => "Third",
            _ => "Fourth",
        };
        Diagnostic::new(
            raw.line,
            IssueType::InvalidColor,
            format!("{} parameter with Command key {} should not be numeric", ordinal, kind),
        )
    })
}

/// Validator that collects diagnostics across a whole command file.
#[derive(Debug, Default)]
pub struct Validator {
    issues: Vec<Diagnostic>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a single command, recording a diagnostic on failure.
    pub fn validate(&mut self, raw: &RawCommand) -> Option<Command> {
        match validate_command(raw) {
            Ok(command) => Some(command),
            Err(diagnostic) => {
                self.issues.push(diagnostic);
                None
            }
        }
    }

    /// Validate every line of a command file without executing anything.
    pub fn validate_file(&mut self, path: &Path) -> Result<(), std::io::Error> {
        let file = File::open(path)?;
        for raw in parse_stream(file)? {
            self.validate(&raw);
        }
        Ok(())
    }

    /// Get all collected issues, in line order
    pub fn issues(&self) -> &[Diagnostic] {
        &self.issues
    }

    /// Consume the validator and return all issues
    pub fn into_issues(self) -> Vec<Diagnostic> {
        self.issues
    }

    pub fn has_errors(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.issues.len()
    }
}
