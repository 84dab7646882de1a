//! Hyperchunks AST -> JSON conversion utilities

use serde_json::{json, Value};

use crate::ast::{
    Argument, AttributeExpr, Comparison, DimensionSelector, FunctionCall, Hyperchunk, Hyperchunks,
    Hyperslice, Literal, LogicalExpr, Number,
};

fn number_to_json(n: &Number) -> Value {
    match n {
        Number::Int(i) => json!({ "int": i }),
        // Parsed floats are always finite
        Number::Float(f) => json!({ "float": f }),
    }
}

fn literal_to_json(literal: &Literal) -> Value {
    match literal {
        Literal::Number(n) => number_to_json(n),
        Literal::String(s) => json!({ "string": s }),
    }
}

fn selector_to_json(selector: &DimensionSelector) -> Value {
    match selector {
        DimensionSelector::Slice(slice) => json!({
            "slice": {
                "start": slice.start,
                "stop": slice.stop,
                "step": slice.step,
            }
        }),
        DimensionSelector::Ellipsis => json!("ellipsis"),
        DimensionSelector::Index(i) => json!({ "index": i }),
    }
}

fn hyperslice_to_json(hyperslice: &Hyperslice) -> Value {
    Value::Array(hyperslice.dimensions().iter().map(selector_to_json).collect())
}

fn comparison_to_json(comparison: &Comparison) -> Value {
    json!({
        "comparison": {
            "attribute": comparison.left.index(),
            "op": comparison.op.symbol(),
            "value": literal_to_json(&comparison.right),
        }
    })
}

fn logical_to_json(expr: &LogicalExpr) -> Value {
    match expr {
        LogicalExpr::Comparison(comparison) => comparison_to_json(comparison),
        LogicalExpr::Chain { op, operands } => {
            let key = op.keyword();
            let operands: Vec<Value> = operands.iter().map(logical_to_json).collect();
            json!({ key: operands })
        }
    }
}

fn call_to_json(call: &FunctionCall) -> Value {
    let args: Vec<Value> = call
        .args
        .iter()
        .map(|arg| match arg {
            Argument::Attribute(index) => json!({ "attribute": index.index() }),
            Argument::String(s) => json!({ "string": s }),
            Argument::Number(n) => number_to_json(n),
        })
        .collect();

    json!({ "call": { "name": call.name, "args": args } })
}

/// Convert one attribute expression to a tagged JSON object
pub fn attribute_expression_to_json(expr: &AttributeExpr) -> Value {
    match expr {
        AttributeExpr::Logical(logical) => logical_to_json(logical),
        AttributeExpr::Call(call) => call_to_json(call),
        AttributeExpr::Attribute(index) => json!({ "attribute": index.index() }),
        AttributeExpr::Dimension(selector) => selector_to_json(selector),
    }
}

/// Convert a hyperchunk to a JSON object; absent sections become `null`
pub fn hyperchunk_to_json(hyperchunk: &Hyperchunk) -> Value {
    let arrays: Vec<Value> = hyperchunk.arrays.iter().map(selector_to_json).collect();
    let attributes = hyperchunk
        .attributes
        .as_ref()
        .map(|attrs| attrs.iter().map(attribute_expression_to_json).collect::<Vec<_>>());
    let order = hyperchunk.order.as_ref().map(call_to_json);
    let hyperslices = hyperchunk
        .hyperslices
        .as_ref()
        .map(|slices| slices.iter().map(hyperslice_to_json).collect::<Vec<_>>());

    json!({
        "arrays": arrays,
        "attributes": attributes,
        "order": order,
        "hyperslices": hyperslices,
    })
}

/// Convert hyperchunks to a JSON array, preserving order
pub fn hyperchunks_to_json(hyperchunks: &Hyperchunks) -> Value {
    Value::Array(hyperchunks.iter().map(hyperchunk_to_json).collect())
}
