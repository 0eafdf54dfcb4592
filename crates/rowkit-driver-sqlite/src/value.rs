use rowkit_core::{stmt::Value as CoreValue, Error, Result};
use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};

#[derive(Debug)]
pub struct Value(CoreValue);

impl From<CoreValue> for Value {
    fn from(value: CoreValue) -> Self {
        Self(value)
    }
}

impl Value {
    /// Decodes the column at `index` to text.
    ///
    /// SQLite is dynamically typed, so every storage class is rendered:
    /// integers and reals in decimal, blobs as (lossy) UTF-8.
    pub fn text_from_sql(row: &Row, index: usize) -> Result<Option<String>> {
        let value = row
            .get_ref(index)
            .map_err(Error::driver_operation_failed)?;

        Ok(match value {
            ValueRef::Null => None,
            ValueRef::Integer(value) => Some(value.to_string()),
            ValueRef::Real(value) => Some(value.to_string()),
            ValueRef::Text(value) => Some(String::from_utf8_lossy(value).into_owned()),
            ValueRef::Blob(value) => Some(String::from_utf8_lossy(value).into_owned()),
        })
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match &self.0 {
            CoreValue::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            CoreValue::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            CoreValue::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
        }
    }
}
