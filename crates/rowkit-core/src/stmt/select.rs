use super::{Expr, Limit, Statement};

/// `SELECT * FROM <table> [WHERE <filter>] [LIMIT n]`
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Table to read from
    pub table: String,

    /// WHERE
    pub filter: Option<Expr>,

    /// LIMIT
    pub limit: Option<Limit>,
}

impl Select {
    /// Selects every row of `table`.
    pub fn all(table: impl Into<String>) -> Select {
        Select {
            table: table.into(),
            filter: None,
            limit: None,
        }
    }

    pub fn filter(mut self, filter: impl Into<Option<Expr>>) -> Select {
        self.filter = filter.into();
        self
    }

    pub fn limit(mut self, limit: u64) -> Select {
        self.limit = Some(Limit::new(limit));
        self
    }
}

impl From<Select> for Statement {
    fn from(src: Select) -> Self {
        Self::Select(src)
    }
}
