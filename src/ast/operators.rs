/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// Equal (`==`)
    Equal,
    /// Not equal (`!=`)
    NotEqual,
    /// Less than (`<`)
    LessThan,
    /// Greater than (`>`)
    GreaterThan,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl Comparator {
    /// All comparators, two-character forms first so `<=` wins over `<`.
    pub const ALL: [Comparator; 6] = [
        Comparator::Equal,
        Comparator::GreaterEqual,
        Comparator::LessEqual,
        Comparator::NotEqual,
        Comparator::LessThan,
        Comparator::GreaterThan,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Comparator::Equal => "==",
            Comparator::NotEqual => "!=",
            Comparator::LessThan => "<",
            Comparator::GreaterThan => ">",
            Comparator::LessEqual => "<=",
            Comparator::GreaterEqual => ">=",
        }
    }
}

/// Logical connectives. `And` binds tighter than `Or`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    /// Logical AND (word, not symbol)
    And,
    /// Logical OR (word, not symbol)
    Or,
}

impl LogicalOp {
    pub fn keyword(&self) -> &'static str {
        match self {
            LogicalOp::And => "and",
            LogicalOp::Or => "or",
        }
    }
}
