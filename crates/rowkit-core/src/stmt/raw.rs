use super::{Limit, Statement};

/// A caller-supplied statement, sent to the database verbatim.
///
/// The only thing rowkit ever adds is an optional trailing `LIMIT`.
#[derive(Debug, Clone, PartialEq)]
pub struct Raw {
    pub sql: String,

    /// Appended as ` LIMIT n` after `sql`
    pub limit: Option<Limit>,
}

impl Raw {
    pub fn new(sql: impl Into<String>) -> Raw {
        Raw {
            sql: sql.into(),
            limit: None,
        }
    }

    pub fn limit(mut self, limit: u64) -> Raw {
        self.limit = Some(Limit::new(limit));
        self
    }
}

impl Statement {
    pub fn raw(sql: impl Into<String>) -> Statement {
        Raw::new(sql).into()
    }
}

impl From<Raw> for Statement {
    fn from(src: Raw) -> Self {
        Self::Raw(src)
    }
}
