use super::{Expr, Statement, Value};

/// `UPDATE <table> SET <assignments> WHERE <filter>`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    /// Table to update
    pub table: String,

    /// SET clause, in statement order
    pub assignments: Vec<Assignment>,

    /// WHERE
    pub filter: Expr,
}

/// A single `<column> = <value>` entry of a SET clause.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub value: Value,
}

impl Update {
    pub fn new(table: impl Into<String>, filter: impl Into<Expr>) -> Update {
        Update {
            table: table.into(),
            assignments: vec![],
            filter: filter.into(),
        }
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.assignments.push(Assignment {
            column: column.into(),
            value: value.into(),
        });
    }
}

impl From<Update> for Statement {
    fn from(src: Update) -> Self {
        Self::Update(src)
    }
}
