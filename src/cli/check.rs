//! Validate hyperchunk selectors and render them as JSON

use super::{hyperchunks_to_json, CliError};
use crate::parse_hyperchunks;

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The selector to parse
    pub selector: String,
    /// Only validate syntax, don't render the AST
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed
    SyntaxValid,
    /// Selector parsed; JSON rendering of the AST
    Success(serde_json::Value),
}

/// Execute a hyperchunks check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let hyperchunks = parse_hyperchunks(&options.selector)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }
    Ok(CheckResult::Success(hyperchunks_to_json(&hyperchunks)))
}
