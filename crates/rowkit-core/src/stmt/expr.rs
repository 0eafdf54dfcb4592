use super::*;

/// A boolean or scalar expression used in WHERE clauses.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// AND a set of binary expressions
    And(ExprAnd),

    /// Binary comparison
    BinaryOp(ExprBinaryOp),

    /// References a column of the statement's table
    Column(ExprColumn),

    /// `<expr> LIKE <pattern>`
    Like(ExprLike),

    /// A literal, bound as a parameter when executed
    Value(Value),
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::Value(value.into())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Value(value.into())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Self::Value(value.into())
    }
}
