//! Validated command types

use crate::color::Color;
use std::fmt;

/// The six supported command keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// `I <height> <width>`
    Init,
    /// `C`
    Clear,
    /// `L <x> <y> <color>`
    ColorPixel,
    /// `V <x> <y1> <y2> <color>`
    DrawVertical,
    /// `H <y> <x1> <x2> <color>`
    DrawHorizontal,
    /// `S`
    Show,
}

impl CommandKind {
    pub const ALL: [CommandKind; 6] = [
        CommandKind::Init,
        CommandKind::Clear,
        CommandKind::ColorPixel,
        CommandKind::DrawVertical,
        CommandKind::DrawHorizontal,
        CommandKind::Show,
    ];

    /// Look up a kind by its key. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn key(self) -> &'static str {
        match self {
            CommandKind::Init => "I",
            CommandKind::Clear => "C",
            CommandKind::ColorPixel => "L",
            CommandKind::DrawVertical => "V",
            CommandKind::DrawHorizontal => "H",
            CommandKind::Show => "S",
        }
    }

    /// Number of argument tokens the command takes.
    pub fn arity(self) -> usize {
        match self {
            CommandKind::Init => 2,
            CommandKind::ColorPixel => 3,
            CommandKind::DrawVertical | CommandKind::DrawHorizontal => 4,
            CommandKind::Clear | CommandKind::Show => 0,
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A command whose arguments passed validation.
///
/// Coordinates are 1-based and already known to lie in
/// [`MIN_PIXEL`](crate::grid::MIN_PIXEL)..=[`MAX_PIXEL`](crate::grid::MAX_PIXEL).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Init { height: usize, width: usize },
    Clear,
    Show,
    ColorPixel { x: usize, y: usize, color: Color },
    DrawVertical { x: usize, y1: usize, y2: usize, color: Color },
    DrawHorizontal { y: usize, x1: usize, x2: usize, color: Color },
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Init { .. } => CommandKind::Init,
            Command::Clear => CommandKind::Clear,
            Command::Show => CommandKind::Show,
            Command::ColorPixel { .. } => CommandKind::ColorPixel,
            Command::DrawVertical { .. } => CommandKind::DrawVertical,
            Command::DrawHorizontal { .. } => CommandKind::DrawHorizontal,
        }
    }
}
