use super::{Statement, Value};

/// `INSERT INTO <table> (<columns>) VALUES (<values>)`
///
/// `columns` and `values` are positional: the value at index `i` is stored
/// in the column at index `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    /// Table to insert into
    pub table: String,

    /// Target columns, in statement order
    pub columns: Vec<String>,

    /// One value per column
    pub values: Vec<Value>,
}

impl Insert {
    pub fn new(table: impl Into<String>) -> Insert {
        Insert {
            table: table.into(),
            columns: vec![],
            values: vec![],
        }
    }

    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push(column.into());
        self.values.push(value.into());
    }
}

impl Statement {
    pub fn is_insert(&self) -> bool {
        matches!(self, Statement::Insert(..))
    }
}

impl From<Insert> for Statement {
    fn from(src: Insert) -> Self {
        Self::Insert(src)
    }
}
