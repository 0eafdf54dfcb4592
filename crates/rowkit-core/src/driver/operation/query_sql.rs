use super::Operation;

use crate::stmt;

#[derive(Debug, Clone, PartialEq)]
pub struct QuerySql {
    /// The SELECT or raw statement to execute
    pub stmt: stmt::Statement,
}

impl QuerySql {
    pub fn new(stmt: impl Into<stmt::Statement>) -> QuerySql {
        QuerySql { stmt: stmt.into() }
    }
}

impl From<QuerySql> for Operation {
    fn from(value: QuerySql) -> Self {
        Self::QuerySql(value)
    }
}
