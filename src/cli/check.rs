//! The `check` command: validate a command file without executing it

use std::path::Path;
use std::process::ExitCode;

use crate::validate::Validator;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the check command
pub fn run_check(input: &Path, json: bool) -> ExitCode {
    let mut validator = Validator::new();

    if !input.exists() {
        eprintln!("Error: Commands file not present at {}", input.display());
        return ExitCode::from(EXIT_ERROR);
    }
    if let Err(e) = validator.validate_file(input) {
        eprintln!("Error: Cannot read '{}': {}", input.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    let has_errors = validator.has_errors();
    let error_count = validator.error_count();
    let issues = validator.into_issues();

    if json {
        let output = serde_json::json!({
            "valid": !has_errors,
            "errors": issues,
        });
        match serde_json::to_string_pretty(&output) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else if issues.is_empty() {
        println!("No issues found.");
    } else {
        for issue in &issues {
            println!("{}", issue);
        }
        println!();
        println!("Found {} error{}.", error_count, if error_count == 1 { "" } else { "s" });
    }

    if has_errors {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
