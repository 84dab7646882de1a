//! Recursive-descent parser for hyperchunk selectors.
//!
//! Every grammar rule is a method returning `Ok(Some(node))` on a match and
//! `Ok(None)` when it does not match, with the cursor left untouched so
//! the caller can try the next alternative. `Err` is reserved for input
//! that can never become valid, such as an unterminated string.
//!
//! The rules live in three groups:
//!
//! - [`selectors`] - dimension selectors: ranges, `...`, exact indices
//! - [`expressions`] - comparisons, `and`/`or` expressions, function calls
//! - [`hyperchunks`] - sections of one hyperchunk and the `;` sequence

mod expressions;
mod hyperchunks;
mod selectors;

use crate::{
    ast::{AttributeExpr, DimensionSelector, FunctionCall, Hyperchunk, Hyperchunks},
    error::ParseError,
    lexer::Lexer,
};

/// Result of trying one grammar rule.
type Attempt<T> = Result<Option<T>, ParseError>;

pub struct Parser<'a> {
    lexer: Lexer<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Parser { lexer }
    }

    /// Runs `rule` and requires it to consume the whole input.
    fn complete<T>(&mut self, rule: impl FnOnce(&mut Self) -> Attempt<T>) -> Result<T, ParseError> {
        match rule(self)? {
            Some(node) if self.lexer.at_end() => Ok(node),
            _ => Err(self.lexer.error()),
        }
    }

    /// `item (sep item)*`. A separator not followed by an item is left
    /// unconsumed.
    fn separated<T>(
        &mut self,
        separator: &'static str,
        mut item: impl FnMut(&mut Self) -> Attempt<T>,
    ) -> Attempt<Vec<T>> {
        let Some(first) = item(self)? else {
            return Ok(None);
        };

        let mut items = vec![first];
        loop {
            let mark = self.lexer.position();
            if !self.lexer.symbol(separator) {
                break;
            }
            match item(self)? {
                Some(next) => items.push(next),
                None => {
                    self.lexer.reset(mark);
                    break;
                }
            }
        }
        Ok(Some(items))
    }

    /// Parse a complete `;`-separated sequence of hyperchunks
    pub fn parse(&mut self) -> Result<Hyperchunks, ParseError> {
        self.complete(Self::hyperchunks)
    }

    /// Parse exactly one hyperchunk
    pub fn parse_hyperchunk(&mut self) -> Result<Hyperchunk, ParseError> {
        self.complete(Self::hyperchunk)
    }

    /// Parse exactly one attribute expression
    pub fn parse_attribute_expression(&mut self) -> Result<AttributeExpr, ParseError> {
        self.complete(Self::attribute_expression)
    }

    /// Parse exactly one dimension selector
    pub fn parse_dimension_selector(&mut self) -> Result<DimensionSelector, ParseError> {
        self.complete(Self::dimension_selector)
    }

    /// Parse exactly one function call
    pub fn parse_function_call(&mut self) -> Result<FunctionCall, ParseError> {
        self.complete(Self::function_call)
    }
}
