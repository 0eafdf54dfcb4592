mod persist;
mod read;

use crate::{Db, Error};

use indexmap::{IndexMap, IndexSet};
use rowkit_core::stmt::{Expr, Raw, Select, Statement, Value};

/// A single table row, held as a mutable map of column name to text.
///
/// A record starts out with every declared column set to the empty string.
/// It is *persisted* once `id` holds a non-empty value, either because
/// [`find`](Record::find) loaded a row or [`create`](Record::create) learned
/// the generated key. Persisted records are updated and deleted by `id`.
///
/// [`filter`](Record::filter) and [`raw`](Record::raw) never modify the
/// receiver; they return a new record for read queries.
#[derive(Debug, Clone)]
pub struct Record {
    db: Db,

    table: String,

    /// Insertion order is INSERT/UPDATE column order.
    columns: IndexSet<String>,

    attributes: IndexMap<String, String>,

    /// `LIKE` filters, AND-ed together
    filters: Vec<Expr>,

    /// Replaces the generated SELECT for reads
    raw: Option<String>,
}

impl Record {
    pub fn new<I>(db: &Db, table: impl Into<String>, columns: I) -> Record
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let columns: IndexSet<String> = columns.into_iter().map(Into::into).collect();
        let attributes = columns
            .iter()
            .map(|column| (column.clone(), String::new()))
            .collect();

        Record {
            db: db.clone(),
            table: table.into(),
            columns,
            attributes,
            filters: vec![],
            raw: None,
        }
    }

    /// Assigns `value` to `field`, adding `field` to the column list if it is
    /// not there yet.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let field = field.into();
        self.columns.insert(field.clone());
        self.attributes.insert(field, value.into());
        self
    }

    /// Returns the value of `field`, or `""` if it was never set.
    pub fn get(&self, field: &str) -> &str {
        self.attributes.get(field).map(String::as_str).unwrap_or("")
    }

    /// Returns a copy of this record that only reads rows where `field`
    /// contains `value`.
    ///
    /// Filters chain conjunctively:
    ///
    /// ```ignore
    /// let adults = personas.filter("NOMBRE", "An").filter("EDAD", "3");
    /// assert_eq!(adults.condition(), "NOMBRE LIKE '%An%' AND EDAD LIKE '%3%'");
    /// ```
    pub fn filter(&self, field: impl Into<String>, value: &str) -> Record {
        let mut ret = self.clone();
        ret.filters.push(Expr::contains(field, value));
        ret
    }

    /// Returns a copy of this record whose reads run `query` verbatim.
    ///
    /// Any filter is ignored while a raw query is set.
    pub fn raw(&self, query: impl Into<String>) -> Record {
        let mut ret = self.clone();
        ret.raw = Some(query.into());
        ret
    }

    pub fn db(&self) -> &Db {
        &self.db
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &IndexSet<String> {
        &self.columns
    }

    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// The accumulated filter as SQL text, or `""` when there is none.
    pub fn condition(&self) -> String {
        self.filter_expr()
            .map(|expr| rowkit_sql::inline_expr(&expr))
            .unwrap_or_default()
    }

    pub fn raw_query(&self) -> Option<&str> {
        self.raw.as_deref().filter(|sql| !sql.is_empty())
    }

    /// The record's key, if it has a non-empty one.
    pub fn id(&self) -> Option<&str> {
        self.attributes
            .get("id")
            .map(String::as_str)
            .filter(|id| !id.is_empty())
    }

    pub fn is_persisted(&self) -> bool {
        self.id().is_some()
    }

    fn filter_expr(&self) -> Option<Expr> {
        Expr::and_from_vec(self.filters.clone())
    }

    fn by_id(id: &str) -> Expr {
        Expr::eq(Expr::column("id"), Value::from_key(id))
    }

    /// The statement `all` and `first` run.
    fn read_statement(&self, limit: Option<u64>) -> Statement {
        if let Some(sql) = self.raw_query() {
            let raw = Raw::new(sql);
            return match limit {
                Some(limit) => raw.limit(limit).into(),
                None => raw.into(),
            };
        }

        let select = Select::all(&self.table).filter(self.filter_expr());
        match limit {
            Some(limit) => select.limit(limit).into(),
            None => select.into(),
        }
    }

    /// Sends the failure of a boolean operation to the diagnostic channel.
    fn report(&self, operation: &'static str, err: &Error) {
        if err.is_missing_key() {
            tracing::warn!(table = %self.table, operation, error = %err, "precondition failed");
        } else {
            tracing::error!(table = %self.table, operation, error = %err, "operation failed");
        }
    }
}
