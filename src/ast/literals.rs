/// Numeric literal.
///
/// Integers and floats stay distinct: `3` is an `Int`, while `3.` and
/// `3.5` are `Float`s.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer without leading zeros
    ///
    /// # Examples
    /// ```text
    /// 0
    /// 42
    /// -7
    /// ```
    Int(i64),

    /// Point float, no exponent notation
    ///
    /// # Examples
    /// ```text
    /// 3.5
    /// -.25
    /// 3.
    /// ```
    Float(f64),
}

impl Number {
    /// Get as float
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(n) => *n as f64,
            Number::Float(n) => *n,
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::Int(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::Float(n)
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(Number),

    /// Double-quoted string with escapes already resolved
    ///
    /// # Example
    /// ```text
    /// "x;y"
    /// ```
    String(String),
}

impl From<Number> for Literal {
    fn from(n: Number) -> Self {
        Literal::Number(n)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Number(Number::Int(n))
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Number(Number::Float(n))
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

/// Position of an attribute, written `a` followed by digits.
///
/// # Examples
/// ```text
/// a0
/// a12
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttributeIndex(pub usize);

impl AttributeIndex {
    pub fn index(&self) -> usize {
        self.0
    }
}
