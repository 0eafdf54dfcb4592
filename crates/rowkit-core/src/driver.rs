mod response;
pub use response::{Response, Rows};

mod row;
pub use row::{Row, RowSet};

pub mod operation;
pub use operation::Operation;

use crate::async_trait;

use std::{borrow::Cow, fmt::Debug};

/// Opens sessions against a database.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Connection URL the driver was configured with, for diagnostics.
    fn url(&self) -> Cow<'_, str>;

    /// Open a new session.
    async fn connect(&self) -> crate::Result<Box<dyn Connection>>;
}

/// A live database session.
///
/// A connection runs one operation at a time: `exec` takes `&mut self` and
/// the operation is fully materialized before it returns.
#[async_trait]
pub trait Connection: Debug + Send + 'static {
    /// Execute a database operation
    async fn exec(&mut self, op: Operation) -> crate::Result<Response>;
}
