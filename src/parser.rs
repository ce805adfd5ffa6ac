//! Line parsing for bitmap command files
//!
//! Each line becomes one [`RawCommand`]: the first whitespace-separated token is
//! the command key and the rest are argument tokens. No argument is interpreted
//! here; see [`crate::validate`].

use std::io::{self, BufRead, Read};

/// A line split into key and arguments, tagged with its 1-indexed line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    pub line: usize,
    pub kind: String,
    pub args: Vec<String>,
}

/// Split a single line into a raw command.
///
/// Blank lines produce an empty `kind`, which the validator rejects.
///
/// # Examples
///
/// ```
/// use bitmap_editor::parser::parse_line;
///
/// let cmd = parse_line("L 3 2 A", 1);
/// assert_eq!(cmd.kind, "L");
/// assert_eq!(cmd.args, vec!["3", "2", "A"]);
/// ```
pub fn parse_line(line: &str, line_number: usize) -> RawCommand {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut tokens = line.split_whitespace().map(str::to_string);
    let kind = tokens.next().unwrap_or_default();

    RawCommand { line: line_number, kind, args: tokens.collect() }
}

/// Parse a whole stream of commands in a single pass, preserving line order.
///
/// Fails only if the reader fails (including on invalid UTF-8).
pub fn parse_stream<R: Read>(reader: R) -> io::Result<Vec<RawCommand>> {
    let buf_reader = io::BufReader::new(reader);

    buf_reader
        .lines()
        .enumerate()
        .map(|(index, line)| line.map(|l| parse_line(&l, index + 1)))
        .collect()
}
