// tests/lexer_tests.rs

use hyperchunks::ast::{AttributeIndex, Comparator, Number};
use hyperchunks::error::ParseErrorKind;
use hyperchunks::lexer::Lexer;
use proptest::prelude::*;

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn test_integers() {
    let test_cases = vec![("0", 0), ("7", 7), ("42", 42), ("-7", -7), ("  123", 123)];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.integer().unwrap(), Some(expected), "Failed for input: {}", input);
        assert!(lexer.at_end(), "Trailing input for: {}", input);
    }
}

#[test]
fn test_invalid_integers_do_not_match() {
    for input in ["007", "-0", "- 5", "x", ""] {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.integer().unwrap(), None, "Failed for input: {}", input);
        assert_eq!(lexer.position(), 0);
    }
}

#[test]
fn test_integer_overflow_is_an_error() {
    let mut lexer = Lexer::new("99999999999999999999");
    let err = lexer.integer().unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::InvalidNumber("99999999999999999999".to_string())
    );
    assert_eq!(err.offset, 0);
}

#[test]
fn test_floats() {
    let test_cases = vec![
        ("3.5", 3.5),
        ("3.", 3.0),
        ("-.25", -0.25),
        (".5", 0.5),
        ("007.5", 7.5),
        ("-0.5", -0.5),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.float().unwrap(), Some(expected), "Failed for input: {}", input);
        assert!(lexer.at_end(), "Trailing input for: {}", input);
    }
}

#[test]
fn test_signed_trailing_point_is_not_float() {
    let mut lexer = Lexer::new("-3.");
    assert_eq!(lexer.float().unwrap(), None);

    // Falls back to the integer, leaving the point behind
    assert_eq!(lexer.number().unwrap(), Some(Number::Int(-3)));
    assert!(!lexer.at_end());
}

#[test]
fn test_number_prefers_float() {
    let test_cases = vec![
        ("3", Number::Int(3)),
        ("3.", Number::Float(3.0)),
        ("3.5", Number::Float(3.5)),
        ("-12", Number::Int(-12)),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.number().unwrap(), Some(expected), "Failed for input: {}", input);
    }
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn test_strings() {
    let test_cases = vec![
        (r#""hello""#, "hello"),
        (r#""x;y""#, "x;y"),
        (r#""say \"hi\"""#, r#"say "hi""#),
        (r#""back\\slash""#, r"back\slash"),
        (r#""tab\there""#, "tab\there"),
        (r#""\q""#, "q"),
        (r#""""#, ""),
    ];

    for (input, expected) in test_cases {
        let mut lexer = Lexer::new(input);
        assert_eq!(
            lexer.string().unwrap(),
            Some(expected.to_string()),
            "Failed for input: {}",
            input
        );
        assert!(lexer.at_end());
    }
}

#[test]
fn test_unterminated_string_points_at_opening_quote() {
    for input in [r#"  "abc"#, r#"  "abc\""#, "  \"abc\ndef\""] {
        let mut lexer = Lexer::new(input);
        let err = lexer.string().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnterminatedString, "Failed for input: {}", input);
        assert_eq!(err.offset, 2);
    }
}

// ============================================================================
// Attributes, identifiers, symbols
// ============================================================================

#[test]
fn test_attribute_indices() {
    let mut lexer = Lexer::new("a0 a12 a007");
    assert_eq!(lexer.attribute().unwrap(), Some(AttributeIndex(0)));
    assert_eq!(lexer.attribute().unwrap(), Some(AttributeIndex(12)));
    assert_eq!(lexer.attribute().unwrap(), Some(AttributeIndex(7)));

    for input in ["a", "b0", "A0", "a-1"] {
        let mut lexer = Lexer::new(input);
        assert_eq!(lexer.attribute().unwrap(), None, "Failed for input: {}", input);
    }
}

#[test]
fn test_attribute_stops_at_digits() {
    let mut lexer = Lexer::new("a12b");
    assert_eq!(lexer.attribute().unwrap(), Some(AttributeIndex(12)));
    assert_eq!(lexer.identifier(), Some("b".to_string()));
}

#[test]
fn test_identifiers() {
    let mut lexer = Lexer::new("top rank2 a0");
    assert_eq!(lexer.identifier(), Some("top".to_string()));
    assert_eq!(lexer.identifier(), Some("rank2".to_string()));
    assert_eq!(lexer.identifier(), Some("a0".to_string()));
    assert_eq!(Lexer::new("2top").identifier(), None);
}

#[test]
fn test_comparators_longest_first() {
    let mut lexer = Lexer::new("== >= <= != < >");
    assert_eq!(lexer.comparator(), Some(Comparator::Equal));
    assert_eq!(lexer.comparator(), Some(Comparator::GreaterEqual));
    assert_eq!(lexer.comparator(), Some(Comparator::LessEqual));
    assert_eq!(lexer.comparator(), Some(Comparator::NotEqual));
    assert_eq!(lexer.comparator(), Some(Comparator::LessThan));
    assert_eq!(lexer.comparator(), Some(Comparator::GreaterThan));
    assert_eq!(Lexer::new("=").comparator(), None);
}

#[test]
fn test_symbols_skip_whitespace() {
    let mut lexer = Lexer::new("  /\t... order:");
    assert!(lexer.symbol("/"));
    assert!(lexer.symbol("..."));
    assert!(lexer.symbol("order:"));
    assert!(lexer.at_end());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn integers_round_trip(n in any::<i64>()) {
        let text = n.to_string();
        let mut lexer = Lexer::new(&text);
        prop_assert_eq!(lexer.number().unwrap(), Some(Number::Int(n)));
        prop_assert!(lexer.at_end());
    }

    #[test]
    fn point_floats_lex_as_floats(
        negative in any::<bool>(),
        int_part in "[0-9]{0,6}",
        fraction in "[0-9]{1,6}",
    ) {
        let text = format!("{}{}.{}", if negative { "-" } else { "" }, int_part, fraction);
        let expected: f64 = text.parse().unwrap();
        let mut lexer = Lexer::new(&text);
        prop_assert_eq!(lexer.number().unwrap(), Some(Number::Float(expected)));
        prop_assert!(lexer.at_end());
    }

    #[test]
    fn trailing_point_floats_lex_as_floats(int_part in "[0-9]{1,6}") {
        let text = format!("{}.", int_part);
        let expected: f64 = int_part.parse().unwrap();
        let mut lexer = Lexer::new(&text);
        prop_assert_eq!(lexer.number().unwrap(), Some(Number::Float(expected)));
        prop_assert!(lexer.at_end());
    }
}
