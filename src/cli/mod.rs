//! CLI support for hyperchunks
//!
//! Provides programmatic access to the hyperchunks CLI functionality for
//! embedding in other tools.

mod check;
mod convert;
mod docs;
mod format;

pub use check::{execute_check, CheckOptions, CheckResult};
pub use convert::{attribute_expression_to_json, hyperchunk_to_json, hyperchunks_to_json};
pub use docs::{get_doc_category, get_docs_overview, DocCategory};
pub use format::execute_format;

use std::io;

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Parse error: {0}")]
    Parse(#[from] crate::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("No selector provided. Pass one as an argument or pipe it to stdin.")]
    NoInput,

    #[error("Unknown category: '{0}'\nRun 'hyperchunks docs' to see available categories.")]
    UnknownCategory(String),
}
