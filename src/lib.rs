pub mod ast;
pub mod cli;
pub mod error;
pub mod format;
pub mod lexer;
pub mod parser;

pub use ast::{
    Argument, AttributeExpr, AttributeIndex, Comparator, Comparison, DimensionSelector,
    FunctionCall, Hyperchunk, Hyperchunks, Hyperslice, Literal, LogicalExpr, LogicalOp, Number,
    Slice,
};
pub use error::{Expected, ParseError, ParseErrorKind};
pub use format::to_selector_string;
pub use lexer::Lexer;
pub use parser::Parser;

/// Parses a `;`-separated sequence of hyperchunks.
///
/// The whole input must be valid: there is no partial result.
///
/// # Examples
///
/// ```
/// use hyperchunks::{parse_hyperchunks, DimensionSelector, Slice};
///
/// let hyperchunks = parse_hyperchunks("0:5|2").unwrap();
/// assert_eq!(
///     hyperchunks[0].arrays,
///     vec![DimensionSelector::Slice(Slice::range(0, 5)), DimensionSelector::Index(2)]
/// );
/// assert!(hyperchunks[0].attributes.is_none());
/// ```
pub fn parse_hyperchunks(text: &str) -> Result<Hyperchunks, ParseError> {
    tracing::debug!(length = text.len(), "parsing hyperchunks");

    let result = Parser::new(Lexer::new(text)).parse();
    match &result {
        Ok(hyperchunks) => tracing::debug!(count = hyperchunks.len(), "parsed hyperchunks"),
        Err(e) => tracing::debug!(offset = e.offset, error = %e, "rejected hyperchunks"),
    }
    result
}
