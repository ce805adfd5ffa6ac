//! Bitmap editor - Command-line tool for interpreting bitmap drawing commands

use std::process::ExitCode;

use bitmap_editor::cli;

fn main() -> ExitCode {
    cli::run()
}
