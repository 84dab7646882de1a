//! Canonical selector text for parsed hyperchunks.
//!
//! Every AST node implements [`std::fmt::Display`], producing text that
//! parses back to an equal node.
//!
//! # Features
//!
//! - **Minimal spacing** - only around comparators and `and`/`or`
//! - **Type preservation** - floats always carry a decimal point, so `3.0`
//!   never comes back as the integer `3`
//! - **No parentheses** - precedence alone reproduces any logical
//!   expression the parser builds
//!
//! # Examples
//!
//! ```
//! use hyperchunks::{parse_hyperchunks, to_selector_string};
//!
//! let parsed = parse_hyperchunks("0 : 5 / a0>=3.   /order:top( a0,5 )").unwrap();
//! assert_eq!(to_selector_string(&parsed), "0:5/a0 >= 3.0/order:top(a0, 5)");
//! ```

use std::fmt::{self, Display, Formatter, Write};

use crate::ast::{
    Argument, AttributeExpr, AttributeIndex, Comparator, Comparison, DimensionSelector,
    FunctionCall, Hyperchunk, Hyperchunks, Hyperslice, Literal, LogicalExpr, LogicalOp, Number,
    Slice,
};

/// Writes `items` separated by `separator`.
fn join<T: Display>(f: &mut Formatter<'_>, items: &[T], separator: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_string(f: &mut Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\t' => f.write_str("\\t")?,
            '\r' => f.write_str("\\r")?,
            '\x0c' => f.write_str("\\f")?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(n) => {
                let text = n.to_string();
                if text.contains('.') {
                    f.write_str(&text)
                } else {
                    write!(f, "{}.0", text)
                }
            }
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::String(s) => write_string(f, s),
        }
    }
}

impl Display for AttributeIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "a{}", self.0)
    }
}

impl Display for Comparator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Display for LogicalOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl Display for Slice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(start) = self.start {
            write!(f, "{}", start)?;
        }
        f.write_char(':')?;
        if let Some(stop) = self.stop {
            write!(f, "{}", stop)?;
        }
        if let Some(step) = self.step {
            write!(f, ":{}", step)?;
        }
        Ok(())
    }
}

impl Display for DimensionSelector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DimensionSelector::Slice(slice) => write!(f, "{}", slice),
            DimensionSelector::Ellipsis => f.write_str("..."),
            DimensionSelector::Index(n) => write!(f, "{}", n),
        }
    }
}

impl Display for Hyperslice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        join(f, &self.0, ",")
    }
}

impl Display for Comparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.op, self.right)
    }
}

impl Display for LogicalExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LogicalExpr::Comparison(comparison) => write!(f, "{}", comparison),
            LogicalExpr::Chain { op, operands } => join(f, operands, &format!(" {} ", op)),
        }
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Attribute(index) => write!(f, "{}", index),
            Argument::String(s) => write_string(f, s),
            Argument::Number(n) => write!(f, "{}", n),
        }
    }
}

impl Display for FunctionCall {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        join(f, &self.args, ", ")?;
        f.write_char(')')
    }
}

impl Display for AttributeExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AttributeExpr::Logical(expr) => write!(f, "{}", expr),
            AttributeExpr::Call(call) => write!(f, "{}", call),
            AttributeExpr::Attribute(index) => write!(f, "{}", index),
            AttributeExpr::Dimension(selector) => write!(f, "{}", selector),
        }
    }
}

impl Display for Hyperchunk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        join(f, &self.arrays, "|")?;

        if let Some(attributes) = &self.attributes {
            f.write_char('/')?;
            join(f, attributes, "|")?;
        }
        if let Some(order) = &self.order {
            write!(f, "/order:{}", order)?;
        }
        if let Some(hyperslices) = &self.hyperslices {
            f.write_char('/')?;
            join(f, hyperslices, "|")?;
        }
        Ok(())
    }
}

impl Display for Hyperchunks {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        join(f, &self.0, ";")
    }
}

/// Renders hyperchunks as canonical selector text.
///
/// Sections are joined with `/`, alternatives with `|`, hyperslice
/// dimensions with `,` and hyperchunks with `;`.
pub fn to_selector_string(hyperchunks: &Hyperchunks) -> String {
    hyperchunks.to_string()
}
