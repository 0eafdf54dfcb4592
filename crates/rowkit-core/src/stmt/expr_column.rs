use super::*;

/// Reference to a column by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprColumn {
    pub name: String,
}

impl Expr {
    pub fn column(name: impl Into<String>) -> Self {
        ExprColumn { name: name.into() }.into()
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Self::Column(value)
    }
}
