//! Rewrite selectors in canonical form

use super::CliError;
use crate::{parse_hyperchunks, to_selector_string};

/// Parse `selector` and return its canonical text
pub fn execute_format(selector: &str) -> Result<String, CliError> {
    let hyperchunks = parse_hyperchunks(selector)?;
    Ok(to_selector_string(&hyperchunks))
}
