use crate::ast::{DimensionSelector, Slice};

use super::{Attempt, Parser};

impl Parser<'_> {
    /// `range_index ":" range_index [":" range_index]`, where an empty
    /// range index is `None`
    pub(super) fn range(&mut self) -> Attempt<Slice> {
        let mark = self.lexer.position();
        let start = self.lexer.integer()?;

        if !self.lexer.symbol(":") {
            self.lexer.reset(mark);
            return Ok(None);
        }

        let stop = self.lexer.integer()?;
        // "1:5:" is the same as "1:5"
        let step = if self.lexer.symbol(":") {
            self.lexer.integer()?
        } else {
            None
        };

        Ok(Some(Slice { start, stop, step }))
    }

    /// Range first: a bare integer is a prefix of a range.
    pub(super) fn dimension_selector(&mut self) -> Attempt<DimensionSelector> {
        if let Some(slice) = self.range()? {
            return Ok(Some(DimensionSelector::Slice(slice)));
        }
        if self.lexer.symbol("...") {
            return Ok(Some(DimensionSelector::Ellipsis));
        }
        Ok(self.lexer.integer()?.map(DimensionSelector::Index))
    }
}

#[cfg(test)]
mod tests {
    use crate::{ast::DimensionSelector, ast::Slice, lexer::Lexer, parser::Parser};

    fn selector(input: &str) -> DimensionSelector {
        Parser::new(Lexer::new(input))
            .parse_dimension_selector()
            .unwrap()
    }

    #[test]
    fn test_range_components() {
        let test_cases = vec![
            ("0:5", Slice::new(Some(0), Some(5), None)),
            ("1:5:", Slice::new(Some(1), Some(5), None)),
            ("1:10:2", Slice::new(Some(1), Some(10), Some(2))),
            (":", Slice::new(None, None, None)),
            ("::", Slice::new(None, None, None)),
            (":-1", Slice::new(None, Some(-1), None)),
            ("3:", Slice::new(Some(3), None, None)),
            ("::-1", Slice::new(None, None, Some(-1))),
            (" 2 : 8 ", Slice::new(Some(2), Some(8), None)),
        ];

        for (input, expected) in test_cases {
            assert_eq!(
                selector(input),
                DimensionSelector::Slice(expected),
                "Failed for input: {}",
                input
            );
        }
    }

    #[test]
    fn test_ellipsis_and_index() {
        assert_eq!(selector("..."), DimensionSelector::Ellipsis);
        assert_eq!(selector("7"), DimensionSelector::Index(7));
        assert_eq!(selector("-3"), DimensionSelector::Index(-3));
    }

    #[test]
    fn test_malformed_selectors() {
        for input in ["", "007", "1.5", "..", "a0", "1:2:3:4"] {
            assert!(
                Parser::new(Lexer::new(input))
                    .parse_dimension_selector()
                    .is_err(),
                "Expected failure for input: {}",
                input
            );
        }
    }
}
