mod value;
pub(crate) use value::Value;

use rowkit_core::{
    async_trait,
    driver::{Driver, Operation, Response, RowSet},
    stmt, Error, Result,
};
use rowkit_sql as sql;
use rusqlite::Connection as RusqliteConnection;
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};
use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sqlite {
    File(PathBuf),
    InMemory,
}

impl Sqlite {
    /// Create a new SQLite driver from a `sqlite:` connection URL.
    ///
    /// `sqlite::memory:` selects an in-memory database; any other path is
    /// opened as a database file.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str)
            .map_err(|err| Error::invalid_connection_url(format!("{err}; url={url_str}")))?;

        if url.scheme() != "sqlite" {
            return Err(Error::invalid_connection_url(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Ok(Self::InMemory)
        } else if url.path().is_empty() {
            Err(Error::invalid_connection_url(format!(
                "missing database path in connection URL; url={url_str}"
            )))
        } else {
            Ok(Self::File(PathBuf::from(url.path())))
        }
    }

    /// Create an in-memory SQLite database
    ///
    /// Every connection opened by this driver gets its own, empty database.
    pub fn in_memory() -> Self {
        Self::InMemory
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }
}

#[async_trait]
impl Driver for Sqlite {
    fn url(&self) -> Cow<'_, str> {
        match self {
            Sqlite::InMemory => Cow::Borrowed("sqlite::memory:"),
            Sqlite::File(path) => Cow::Owned(format!("sqlite:{}", path.display())),
        }
    }

    async fn connect(&self) -> Result<Box<dyn rowkit_core::Connection>> {
        let connection = match self {
            Sqlite::File(path) => Connection::open(path)?,
            Sqlite::InMemory => Connection::in_memory()?,
        };
        Ok(Box::new(connection))
    }
}

#[derive(Debug)]
pub struct Connection {
    connection: RusqliteConnection,
}

impl Connection {
    pub fn in_memory() -> Result<Self> {
        let connection =
            RusqliteConnection::open_in_memory().map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            RusqliteConnection::open(path).map_err(Error::driver_operation_failed)?;
        Ok(Self { connection })
    }

    fn query(&mut self, sql_str: &str, params: &[Value]) -> Result<RowSet> {
        let mut stmt = self
            .connection
            .prepare_cached(sql_str)
            .map_err(Error::driver_operation_failed)?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        let mut ret = RowSet::new(columns);

        while let Some(row) = rows.next().map_err(Error::driver_operation_failed)? {
            let mut values = Vec::with_capacity(width);

            for index in 0..width {
                values.push(Value::text_from_sql(row, index)?);
            }

            ret.push(values);
        }

        Ok(ret)
    }

    fn execute(&mut self, sql_str: &str, params: &[Value], insert: bool) -> Result<Response> {
        let mut stmt = self
            .connection
            .prepare_cached(sql_str)
            .map_err(Error::driver_operation_failed)?;

        let count = stmt
            .execute(rusqlite::params_from_iter(params.iter()))
            .map_err(Error::driver_operation_failed)?;

        let last_insert_id = insert
            .then(|| self.connection.last_insert_rowid())
            .and_then(|id| u64::try_from(id).ok());

        Ok(Response::inserted(count as u64, last_insert_id))
    }
}

#[async_trait]
impl rowkit_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        let returns_rows = op.is_query_sql();
        let stmt = op.into_statement();

        let mut params = Vec::<stmt::Value>::new();
        let sql_str = sql::Serializer::sqlite().serialize(&stmt, &mut params);

        tracing::trace!(sql = %sql_str, params = params.len(), "sqlite exec");

        let params = params.into_iter().map(Value::from).collect::<Vec<_>>();

        if returns_rows {
            return Ok(Response::row_set(self.query(&sql_str, &params)?));
        }

        self.execute(&sql_str, &params, stmt.is_insert())
    }
}
