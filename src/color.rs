//! Color tokens stored in bitmap cells
//!
//! A color is any non-empty token that carries at least one cased character,
//! so `A`, `z` and `Red` are colors while `7`, `-3` and `#` are not. The
//! conventional alphabet is the single letters `A`-`Z`.
//!
//! Tokens are not limited to one character. A multi-character token is stored
//! and rendered verbatim, so a row holding one is wider than the grid when
//! printed. Callers that need fixed-width output should stick to single
//! letters.

use std::fmt;
use thiserror::Error;

/// Token every cell holds after `I` and `C`
pub const DEFAULT_COLOR: &str = "O";

/// Error type for color token parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input token was empty
    #[error("empty color token")]
    Empty,
    /// Token has no character with distinct upper and lower case forms
    #[error("color token '{0}' has no alphabetic character")]
    NotAlphabetic(String),
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Parse a raw argument token into a color.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitmap_editor::color::Color;
    ///
    /// assert_eq!(Color::parse("A").unwrap().as_str(), "A");
    /// assert!(Color::parse("12").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, ColorError> {
        if token.is_empty() {
            return Err(ColorError::Empty);
        }
        if !is_cased(token) {
            return Err(ColorError::NotAlphabetic(token.to_string()));
        }
        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// True when upper- and lower-casing the token give different strings.
fn is_cased(token: &str) -> bool {
    token.to_uppercase() != token.to_lowercase()
}
