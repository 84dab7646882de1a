//! Cursor-based literal lexer.
//!
//! Each token method skips leading whitespace and tries to match one token
//! at the cursor. On success the cursor moves past the token; on failure it
//! is left where it was and the attempt is recorded so the parser can report
//! the furthest point it reached and what it expected there.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{AttributeIndex, Comparator, Number};
use crate::error::{Expected, ParseError, ParseErrorKind};

/// `[-]([1-9][0-9]*|0)`
static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:-?[1-9][0-9]*|0)").unwrap());

/// `[-] [digits] "." digits | digits "."`
static POINT_FLOAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:-?[0-9]*\.[0-9]+|[0-9]+\.)").unwrap());

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^a[0-9]+").unwrap());

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*").unwrap());

/// Section, alternative, hyperchunk and dimension separators.
const SEPARATORS: [char; 4] = ['/', '|', ';', ','];

pub struct Lexer<'a> {
    input: &'a str,
    position: usize,
    furthest: usize,
    expected: Vec<Expected>,
    /// Well-formed token whose value is out of range, with its end offset.
    /// Reported only if nothing else gets past it.
    overflow: Option<(ParseError, usize)>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            position: 0,
            furthest: 0,
            expected: Vec::new(),
            overflow: None,
        }
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Moves the cursor back to a position returned by [`Lexer::position`].
    pub fn reset(&mut self, position: usize) {
        self.position = position;
    }

    fn rest(&self) -> &'a str {
        &self.input[self.position..]
    }

    fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.position += rest.len() - rest.trim_start().len();
    }

    /// Records a failed attempt. Only the furthest offset is kept.
    fn expect(&mut self, offset: usize, expected: Expected) {
        if offset > self.furthest {
            self.furthest = offset;
            self.expected.clear();
        }
        if offset == self.furthest && !self.expected.contains(&expected) {
            self.expected.push(expected);
        }
    }

    fn lex(&mut self, pattern: &Regex, expected: Expected) -> Option<(usize, &'a str)> {
        let mark = self.position;
        self.skip_whitespace();
        let start = self.position;

        match pattern.find(self.rest()) {
            Some(m) => {
                self.position += m.end();
                Some((start, m.as_str()))
            }
            None => {
                self.expect(start, expected);
                self.position = mark;
                None
            }
        }
    }

    /// Matches literal text such as `/`, `...`, `and` or `order:`.
    pub fn symbol(&mut self, symbol: &'static str) -> bool {
        let mark = self.position;
        self.skip_whitespace();

        if self.rest().starts_with(symbol) {
            self.position += symbol.len();
            true
        } else {
            self.expect(self.position, Expected::Symbol(symbol));
            self.position = mark;
            false
        }
    }

    /// True if only whitespace remains.
    pub fn at_end(&mut self) -> bool {
        let mark = self.position;
        self.skip_whitespace();

        if self.position == self.input.len() {
            true
        } else {
            self.expect(self.position, Expected::EndOfInput);
            self.position = mark;
            false
        }
    }

    /// Integer without leading zeros. `007` and `-0` do not match.
    pub fn integer(&mut self) -> Result<Option<i64>, ParseError> {
        let mark = self.position;
        let Some((start, text)) = self.lex(&INTEGER, Expected::Token("integer")) else {
            return Ok(None);
        };

        if text == "0" && self.current_char().is_some_and(|c| c.is_ascii_digit()) {
            self.expect(start, Expected::Token("integer"));
            self.position = mark;
            return Ok(None);
        }

        text.parse::<i64>()
            .map(Some)
            .map_err(|_| ParseError::invalid_number(text, start))
    }

    /// Point float: `3.5`, `-.5`, `007.5` or `3.` (the last form takes no sign).
    pub fn float(&mut self) -> Result<Option<f64>, ParseError> {
        let Some((start, text)) = self.lex(&POINT_FLOAT, Expected::Token("float")) else {
            return Ok(None);
        };

        match text.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Some(n)),
            _ => Err(ParseError::invalid_number(text, start)),
        }
    }

    /// Float first, falling back to integer, so `3.` is a float and `3` is not.
    pub fn number(&mut self) -> Result<Option<Number>, ParseError> {
        if let Some(n) = self.float()? {
            return Ok(Some(Number::Float(n)));
        }
        Ok(self.integer()?.map(Number::Int))
    }

    /// Double-quoted string. Backslash escapes the next character;
    /// `\n`, `\t`, `\r` and `\f` become control characters.
    pub fn string(&mut self) -> Result<Option<String>, ParseError> {
        let mark = self.position;
        self.skip_whitespace();
        let start = self.position;

        if self.current_char() != Some('"') {
            self.expect(start, Expected::Token("string"));
            self.position = mark;
            return Ok(None);
        }

        let mut result = String::new();
        let mut chars = self.rest()[1..].char_indices();

        while let Some((i, ch)) = chars.next() {
            match ch {
                '"' => {
                    self.position = start + 1 + i + 1;
                    return Ok(Some(result));
                }
                // Strings do not span lines
                '\n' => break,
                '\\' => match chars.next() {
                    Some((_, 'n')) => result.push('\n'),
                    Some((_, 't')) => result.push('\t'),
                    Some((_, 'r')) => result.push('\r'),
                    Some((_, 'f')) => result.push('\x0c'),
                    Some((_, c)) => result.push(c),
                    None => break,
                },
                c => result.push(c),
            }
        }

        Err(ParseError::unterminated_string(start))
    }

    /// `a` followed by digits, e.g. `a0` or `a12`. An index too large for
    /// `usize` is no match, so `a99999999999999999999(1)` can still be read
    /// as a function call.
    pub fn attribute(&mut self) -> Result<Option<AttributeIndex>, ParseError> {
        let mark = self.position;
        let Some((start, text)) = self.lex(&ATTRIBUTE, Expected::Token("attribute index")) else {
            return Ok(None);
        };

        match text[1..].parse::<usize>() {
            Ok(n) => Ok(Some(AttributeIndex(n))),
            Err(_) => {
                self.expect(start, Expected::Token("attribute index"));
                self.overflow = Some((ParseError::invalid_number(text, start), self.position));
                self.position = mark;
                Ok(None)
            }
        }
    }

    /// Function name: a letter followed by letters or digits.
    pub fn identifier(&mut self) -> Option<String> {
        self.lex(&IDENTIFIER, Expected::Token("identifier"))
            .map(|(_, text)| text.to_string())
    }

    pub fn comparator(&mut self) -> Option<Comparator> {
        let mark = self.position;
        self.skip_whitespace();
        let rest = self.rest();

        for op in Comparator::ALL {
            if rest.starts_with(op.symbol()) {
                self.position += op.symbol().len();
                return Some(op);
            }
        }

        self.expect(self.position, Expected::Token("comparator"));
        self.position = mark;
        None
    }

    /// Error describing the furthest failed attempt.
    pub fn error(&self) -> ParseError {
        let offset = self.furthest;

        // An out-of-range token wins when parsing stopped on or right after it
        if let Some((error, end)) = &self.overflow {
            let stopped_on = offset == error.offset
                || (offset >= *end && self.input[*end..offset].trim().is_empty());
            if stopped_on {
                return error.clone();
            }
        }

        let rest = &self.input[offset..];
        let next = rest.chars().next();
        let previous = self.input[..offset].trim_end().chars().last();

        let kind = match previous {
            Some(sep)
                if SEPARATORS.contains(&sep)
                    && next.is_none_or(|c| SEPARATORS.contains(&c)) =>
            {
                ParseErrorKind::EmptySection(sep)
            }
            _ => ParseErrorKind::Expected(self.expected.clone()),
        };

        let error = ParseError::new(kind, offset);
        match found_token(rest) {
            Some(token) => error.with_found(token),
            None => error,
        }
    }
}

fn found_token(rest: &str) -> Option<String> {
    let is_word = |c: char| c.is_alphanumeric() || matches!(c, '.' | '-' | ':' | '_');
    let first = rest.chars().next()?;

    if !is_word(first) {
        return Some(first.to_string());
    }
    Some(rest.chars().take_while(|&c| is_word(c)).take(32).collect())
}

#[test]
fn test_integer_forms() {
    let mut lexer = Lexer::new("42 -7 0");
    assert_eq!(lexer.integer().unwrap(), Some(42));
    assert_eq!(lexer.integer().unwrap(), Some(-7));
    assert_eq!(lexer.integer().unwrap(), Some(0));
    assert!(lexer.at_end());
}

#[test]
fn test_leading_zero_is_not_integer() {
    let mut lexer = Lexer::new("007");
    assert_eq!(lexer.integer().unwrap(), None);
    assert_eq!(lexer.position(), 0);
}

#[test]
fn test_failed_attempt_restores_cursor() {
    let mut lexer = Lexer::new("  x");
    assert!(!lexer.symbol("/"));
    assert_eq!(lexer.position(), 0);
    assert_eq!(lexer.error().offset, 2);
}

#[test]
fn test_attribute_overflow_is_no_match() {
    let mut lexer = Lexer::new(" a99999999999999999999");
    assert_eq!(lexer.attribute().unwrap(), None);
    assert_eq!(lexer.position(), 0);

    let err = lexer.error();
    assert_eq!(
        err.kind,
        ParseErrorKind::InvalidNumber("a99999999999999999999".to_string())
    );
    assert_eq!(err.offset, 1);
}
