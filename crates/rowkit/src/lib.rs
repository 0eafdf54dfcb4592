pub mod db;
pub use db::{Db, ExecResult};

mod record;
pub use record::Record;

pub use rowkit_core::{
    driver::{self, Driver, Row, RowSet},
    stmt, Error, Result,
};

/// Column name → text value, in result column order.
///
/// Rows read through a [`Record`] decode SQL `NULL` to an empty string, so
/// every column of the result is present as a key.
pub type Attributes = indexmap::IndexMap<String, String>;
