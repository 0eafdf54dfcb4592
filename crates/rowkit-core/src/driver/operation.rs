mod exec_sql;
pub use exec_sql::ExecSql;

mod query_sql;
pub use query_sql::QuerySql;

use crate::stmt::Statement;

#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Run a statement that modifies rows and report how many were affected
    ExecSql(ExecSql),

    /// Run a statement that returns rows
    QuerySql(QuerySql),
}

impl Operation {
    pub fn statement(&self) -> &Statement {
        match self {
            Operation::ExecSql(op) => &op.stmt,
            Operation::QuerySql(op) => &op.stmt,
        }
    }

    pub fn into_statement(self) -> Statement {
        match self {
            Operation::ExecSql(op) => op.stmt,
            Operation::QuerySql(op) => op.stmt,
        }
    }

    pub fn is_exec_sql(&self) -> bool {
        matches!(self, Operation::ExecSql(_))
    }

    pub fn is_query_sql(&self) -> bool {
        matches!(self, Operation::QuerySql(_))
    }
}
