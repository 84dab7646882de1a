use crate::ast::{AttributeIndex, Comparator, DimensionSelector, Literal, LogicalOp, Number};

/// `attribute comparator literal`
///
/// # Example
/// ```text
/// a0 >= 3.5
/// a2 == "x;y"
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub left: AttributeIndex,
    pub op: Comparator,
    pub right: Literal,
}

impl Comparison {
    pub fn new(left: AttributeIndex, op: Comparator, right: impl Into<Literal>) -> Self {
        Comparison {
            left,
            op,
            right: right.into(),
        }
    }
}

/// Comparisons joined with `and` / `or`.
///
/// Both connectives are left-associative and `and` binds tighter, so
/// `a0>=1 or a1<2 and a2==3` is `Or[a0>=1, And[a1<2, a2==3]]`. There is no
/// grouping with parentheses.
///
/// A run of the same connective is kept as one flat `Chain` read left to
/// right: `a0>1 and a1>2 and a2>3` is `And[a0>1, a1>2, a2>3]`, the left-leaning
/// tree `And(And(a0>1, a1>2), a2>3)` without the nesting. Parsed expressions
/// are at most two chains deep however many terms they have.
#[derive(Debug, Clone, PartialEq)]
pub enum LogicalExpr {
    /// A lone comparison is a logical expression of arity 1
    Comparison(Comparison),

    /// Two or more operands joined by `op`
    Chain {
        op: LogicalOp,
        operands: Vec<LogicalExpr>,
    },
}

impl LogicalExpr {
    /// `left and right`. Extends `left` when it is already an `and` chain.
    pub fn and(left: impl Into<LogicalExpr>, right: impl Into<LogicalExpr>) -> Self {
        LogicalExpr::join(LogicalOp::And, left.into(), right.into())
    }

    /// `left or right`. Extends `left` when it is already an `or` chain.
    pub fn or(left: impl Into<LogicalExpr>, right: impl Into<LogicalExpr>) -> Self {
        LogicalExpr::join(LogicalOp::Or, left.into(), right.into())
    }

    fn join(op: LogicalOp, left: LogicalExpr, right: LogicalExpr) -> Self {
        match left {
            LogicalExpr::Chain {
                op: left_op,
                mut operands,
            } if left_op == op => {
                operands.push(right);
                LogicalExpr::Chain { op, operands }
            }
            left => LogicalExpr::Chain {
                op,
                operands: vec![left, right],
            },
        }
    }
}

impl From<Comparison> for LogicalExpr {
    fn from(comparison: Comparison) -> Self {
        LogicalExpr::Comparison(comparison)
    }
}

/// Function call argument, kept in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Attribute(AttributeIndex),
    String(String),
    Number(Number),
}

/// `name(arg, ...)`, used for order sections and in attribute position.
///
/// # Examples
/// ```text
/// top(a0, 5)
/// now()
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Argument>,
}

impl FunctionCall {
    pub fn new(name: impl Into<String>, args: Vec<Argument>) -> Self {
        FunctionCall {
            name: name.into(),
            args,
        }
    }
}

/// One alternative in the attributes section.
///
/// Alternatives are tried in declaration order: a logical expression
/// first, since `a0` alone is also the left side of `a0 > 1`.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeExpr {
    Logical(LogicalExpr),
    Call(FunctionCall),
    Attribute(AttributeIndex),
    Dimension(DimensionSelector),
}
