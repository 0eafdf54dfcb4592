use super::Operation;

use crate::stmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ExecSql {
    /// The INSERT, UPDATE, DELETE, or raw statement to execute
    pub stmt: stmt::Statement,
}

impl ExecSql {
    pub fn new(stmt: impl Into<stmt::Statement>) -> ExecSql {
        ExecSql { stmt: stmt.into() }
    }
}

impl From<ExecSql> for Operation {
    fn from(value: ExecSql) -> Self {
        Self::ExecSql(value)
    }
}
