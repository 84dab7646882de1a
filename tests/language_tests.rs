// Selector Language Tests
//
// Each test pins down one documented behavior of the selector language.

use hyperchunks::{
    parse_hyperchunks, Argument, AttributeExpr, AttributeIndex, Comparator, Comparison,
    DimensionSelector, FunctionCall, Hyperslice, Literal, LogicalExpr, Number, ParseErrorKind,
    Slice,
};

fn slice(start: i64, stop: i64) -> DimensionSelector {
    DimensionSelector::Slice(Slice::range(start, stop))
}

fn cmp(index: usize, op: Comparator, right: i64) -> Comparison {
    Comparison::new(AttributeIndex(index), op, right)
}

// ============================================================================
// Section: Arrays
// ============================================================================

#[test]
fn lang_single_range() {
    let result = parse_hyperchunks("0:5").unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].arrays, vec![slice(0, 5)]);
    assert_eq!(result[0].attributes, None);
    assert_eq!(result[0].order, None);
    assert_eq!(result[0].hyperslices, None);
}

#[test]
fn lang_ellipsis() {
    let result = parse_hyperchunks("...").unwrap();
    assert_eq!(result[0].arrays, vec![DimensionSelector::Ellipsis]);
}

#[test]
fn lang_array_alternatives() {
    let result = parse_hyperchunks("0:5|2").unwrap();
    assert_eq!(result[0].arrays, vec![slice(0, 5), DimensionSelector::Index(2)]);
}

#[test]
fn lang_trailing_empty_step() {
    let with_step = parse_hyperchunks("1:5:").unwrap();
    let without_step = parse_hyperchunks("1:5").unwrap();
    assert_eq!(with_step, without_step);
}

// ============================================================================
// Section: Attribute expressions
// ============================================================================

#[test]
fn lang_and_expression() {
    let result = parse_hyperchunks("0:5/a0>=3 and a1<2").unwrap();
    assert_eq!(
        result[0].attributes,
        Some(vec![AttributeExpr::Logical(LogicalExpr::and(
            cmp(0, Comparator::GreaterEqual, 3),
            cmp(1, Comparator::LessThan, 2),
        ))])
    );
}

#[test]
fn lang_and_precedence_over_or() {
    let result = parse_hyperchunks("0/a0>=1 or a1<2 and a2==3").unwrap();
    assert_eq!(
        result[0].attributes,
        Some(vec![AttributeExpr::Logical(LogicalExpr::or(
            cmp(0, Comparator::GreaterEqual, 1),
            LogicalExpr::and(cmp(1, Comparator::LessThan, 2), cmp(2, Comparator::Equal, 3)),
        ))])
    );
}

#[test]
fn lang_float_comparison_keeps_float() {
    let result = parse_hyperchunks("0/a0 < 3.").unwrap();
    match &result[0].attributes.as_ref().unwrap()[0] {
        AttributeExpr::Logical(LogicalExpr::Comparison(comparison)) => {
            assert_eq!(comparison.right, Literal::Number(Number::Float(3.0)));
        }
        other => panic!("Expected comparison, got {:?}", other),
    }
}

// ============================================================================
// Section: Order and hyperslices
// ============================================================================

#[test]
fn lang_full_hyperchunk() {
    let result = parse_hyperchunks("0:5/a0/order:top(a0,5)/0:2,1:3").unwrap();
    let chunk = &result[0];
    assert_eq!(chunk.attributes, Some(vec![AttributeExpr::Attribute(AttributeIndex(0))]));
    assert_eq!(
        chunk.order,
        Some(FunctionCall::new(
            "top",
            vec![Argument::Attribute(AttributeIndex(0)), Argument::Number(Number::Int(5))]
        ))
    );
    assert_eq!(chunk.hyperslices, Some(vec![Hyperslice(vec![slice(0, 2), slice(1, 3)])]));
}

#[test]
fn lang_hyperslices_with_order_skipped() {
    let result = parse_hyperchunks("0:5/a0/0:2").unwrap();
    assert_eq!(result[0].order, None);
    assert_eq!(result[0].hyperslices, Some(vec![Hyperslice(vec![slice(0, 2)])]));
}

// ============================================================================
// Section: Sequences
// ============================================================================

#[test]
fn lang_sequence_in_source_order() {
    let result = parse_hyperchunks("0:5;6:10").unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].arrays, vec![slice(0, 5)]);
    assert_eq!(result[1].arrays, vec![slice(6, 10)]);
}

#[test]
fn lang_no_split_inside_string() {
    let result = parse_hyperchunks(r#"0:5/a0=="x;y""#).unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(
        result[0].attributes,
        Some(vec![AttributeExpr::Logical(LogicalExpr::Comparison(Comparison::new(
            AttributeIndex(0),
            Comparator::Equal,
            "x;y"
        )))])
    );
}

// ============================================================================
// Section: Malformed input
// ============================================================================

#[test]
fn lang_empty_attributes_section_fails() {
    let err = parse_hyperchunks("0:5//order:f()").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EmptySection('/'));
}

#[test]
fn lang_empty_input_fails() {
    assert!(parse_hyperchunks("").is_err());
}

#[test]
fn lang_trailing_semicolon_fails() {
    let err = parse_hyperchunks("0:5;").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EmptySection(';'));
}

#[test]
fn lang_integer_is_never_float() {
    let result = parse_hyperchunks("0/f(3, 3., 3.5)").unwrap();
    assert_eq!(
        result[0].attributes,
        Some(vec![AttributeExpr::Call(FunctionCall::new(
            "f",
            vec![
                Argument::Number(Number::Int(3)),
                Argument::Number(Number::Float(3.0)),
                Argument::Number(Number::Float(3.5)),
            ]
        ))])
    );
}
