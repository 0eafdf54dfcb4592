/// A literal bound into a statement.
///
/// Record attributes are always text. Integers only appear where a key is
/// coerced at statement-construction time (see [`Value::from_key`]).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Value {
    /// Signed 64-bit integer
    I64(i64),

    /// Null value
    #[default]
    Null,

    /// String value
    String(String),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Coerces a textual row key.
    ///
    /// Decimal integers become [`Value::I64`] so they compare against integer
    /// key columns; anything else is kept as text.
    pub fn from_key(key: &str) -> Self {
        match key.trim().parse::<i64>() {
            Ok(id) => Self::I64(id),
            Err(_) => Self::String(key.to_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
