use super::{Expr, Statement};

/// `DELETE FROM <table> WHERE <filter>`
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    /// Table to delete from
    pub table: String,

    /// WHERE
    pub filter: Expr,
}

impl Delete {
    pub fn new(table: impl Into<String>, filter: impl Into<Expr>) -> Delete {
        Delete {
            table: table.into(),
            filter: filter.into(),
        }
    }
}

impl From<Delete> for Statement {
    fn from(src: Delete) -> Self {
        Self::Delete(src)
    }
}
