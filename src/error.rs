//! Errors raised while parsing hyperchunk selectors.
//!
//! Every failure carries the byte offset where parsing stopped. Syntax
//! errors report the furthest offset the parser reached together with
//! everything that would have been accepted there.

use std::fmt;

use thiserror::Error;

/// Something the parser would have accepted at the failure offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Literal text such as `/`, `order:` or `and`
    Symbol(&'static str),
    /// A token class such as "integer" or "attribute index"
    Token(&'static str),
    EndOfInput,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Symbol(s) => write!(f, "'{}'", s),
            Expected::Token(name) => write!(f, "{}", name),
            Expected::EndOfInput => write!(f, "end of input"),
        }
    }
}

fn describe(expected: &[Expected]) -> String {
    match expected {
        [] => "valid selector".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let init: Vec<String> = init.iter().map(|e| e.to_string()).collect();
            format!("{} or {}", init.join(", "), last)
        }
    }
}

/// The kind of parse failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// A string literal with no closing quote
    #[error("unterminated string literal")]
    UnterminatedString,

    /// A number that does not fit its type
    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    /// A separator followed by another separator or the end of input
    #[error("empty section after '{0}'")]
    EmptySection(char),

    #[error("expected {}", describe(.0))]
    Expected(Vec<Expected>),
}

/// A selector that could not be parsed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind} at offset {offset}{}", found_suffix(.found))]
pub struct ParseError {
    /// Byte offset into the selector text
    pub offset: usize,
    pub kind: ParseErrorKind,
    /// Text of the unexpected token, if any
    pub found: Option<String>,
}

fn found_suffix(found: &Option<String>) -> String {
    match found {
        Some(text) => format!(", found '{}'", text),
        None => String::new(),
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        ParseError {
            offset,
            kind,
            found: None,
        }
    }

    pub fn with_found(mut self, found: impl Into<String>) -> Self {
        self.found = Some(found.into());
        self
    }

    pub fn unterminated_string(offset: usize) -> Self {
        Self::new(ParseErrorKind::UnterminatedString, offset)
    }

    pub fn invalid_number(text: &str, offset: usize) -> Self {
        Self::new(ParseErrorKind::InvalidNumber(text.to_string()), offset)
    }

    /// True for errors about the shape of the selector rather than a
    /// malformed literal.
    pub fn is_structural(&self) -> bool {
        matches!(
            self.kind,
            ParseErrorKind::EmptySection(_) | ParseErrorKind::Expected(_)
        )
    }
}
