//! Bitmap editor - Library for interpreting text drawing commands
//!
//! This library provides functionality to:
//! - Parse command files (`I`, `C`, `L`, `V`, `H`, `S`) into raw commands
//! - Validate each command's arguments, logging rejected lines
//! - Execute validated commands against an in-memory color grid
//! - Render the grid as text

pub mod cli;
pub mod color;
pub mod command;
pub mod config;
pub mod executor;
pub mod grid;
pub mod log;
pub mod parser;
pub mod renderer;
pub mod session;
pub mod validate;
