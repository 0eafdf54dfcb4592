mod connect;

use rowkit_core::{
    driver::{
        operation::{ExecSql, QuerySql},
        Connection, Driver, Operation, Response, RowSet,
    },
    err,
    stmt::Statement,
    Result,
};

use std::{borrow::Cow, fmt, sync::Arc};
use tokio::sync::Mutex;

/// A database handle.
///
/// Cloning a `Db` is cheap; every clone shares the same connection. Statements
/// issued through one `Db` run one at a time, in the order they acquire the
/// connection.
#[derive(Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

struct Shared {
    driver: Box<dyn Driver>,
    connection: Mutex<Box<dyn Connection>>,
}

/// Outcome of a statement that does not return rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExecResult {
    /// Number of rows the statement affected
    pub count: u64,

    /// Key the database generated for an inserted row, if it reported one
    pub last_insert_id: Option<u64>,
}

impl Db {
    /// Connects to the database at `url`, choosing the driver by scheme.
    ///
    /// `sqlite:` URLs need the `sqlite` feature (on by default) and
    /// `mysql://` URLs need the `mysql` feature.
    pub async fn connect(url: &str) -> Result<Db> {
        Db::from_boxed_driver(connect::driver(url)?).await
    }

    /// Opens a connection with an explicitly constructed driver.
    pub async fn from_driver(driver: impl Driver) -> Result<Db> {
        Db::from_boxed_driver(Box::new(driver)).await
    }

    async fn from_boxed_driver(driver: Box<dyn Driver>) -> Result<Db> {
        let connection = driver
            .connect()
            .await
            .map_err(|err| err.context(err!("failed to connect to {}", driver.url())))?;

        tracing::debug!(url = %driver.url(), "connected");

        Ok(Db {
            shared: Arc::new(Shared {
                driver,
                connection: Mutex::new(connection),
            }),
        })
    }

    /// URL of the database this handle is connected to.
    pub fn url(&self) -> Cow<'_, str> {
        self.shared.driver.url()
    }

    /// Runs a statement that returns rows.
    pub async fn query(&self, stmt: impl Into<Statement>) -> Result<RowSet> {
        let res = self.exec(QuerySql::new(stmt).into()).await?;
        res.rows.into_row_set()
    }

    /// Runs a statement that modifies rows.
    pub async fn execute(&self, stmt: impl Into<Statement>) -> Result<ExecResult> {
        let res = self.exec(ExecSql::new(stmt).into()).await?;

        Ok(ExecResult {
            count: res.rows.into_count()?,
            last_insert_id: res.last_insert_id,
        })
    }

    /// Runs `sql` verbatim as a mutation, e.g. `CREATE TABLE`.
    pub async fn execute_raw(&self, sql: impl Into<String>) -> Result<ExecResult> {
        self.execute(Statement::raw(sql)).await
    }

    async fn exec(&self, op: Operation) -> Result<Response> {
        tracing::debug!(sql = %rowkit_sql::inline(op.statement()), "exec");

        let mut connection = self.shared.connection.lock().await;
        connection.exec(op).await
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db").field("url", &self.url()).finish()
    }
}
