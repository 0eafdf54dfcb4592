use super::RowSet;
use crate::{Error, Result};

#[derive(Debug)]
pub struct Response {
    pub rows: Rows,

    /// Key generated by the database for the last inserted row, when the
    /// backend reports one.
    pub last_insert_id: Option<u64>,
}

#[derive(Debug)]
pub enum Rows {
    /// Number of rows impacted by the operation
    Count(u64),

    /// Operation result, as a set of rows
    Values(RowSet),
}

impl Response {
    pub fn count(count: u64) -> Self {
        Self {
            rows: Rows::Count(count),
            last_insert_id: None,
        }
    }

    pub fn inserted(count: u64, last_insert_id: Option<u64>) -> Self {
        Self {
            rows: Rows::Count(count),
            last_insert_id,
        }
    }

    pub fn row_set(rows: RowSet) -> Self {
        Self {
            rows: Rows::Values(rows),
            last_insert_id: None,
        }
    }

    pub fn empty_row_set() -> Self {
        Self::row_set(RowSet::default())
    }
}

impl Rows {
    pub fn into_count(self) -> Result<u64> {
        match self {
            Rows::Count(count) => Ok(count),
            Rows::Values(_) => Err(Error::invalid_result("expected a row count, got rows")),
        }
    }

    pub fn into_row_set(self) -> Result<RowSet> {
        match self {
            Rows::Values(rows) => Ok(rows),
            Rows::Count(_) => Err(Error::invalid_result("expected rows, got a row count")),
        }
    }
}
