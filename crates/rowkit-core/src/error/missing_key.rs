use super::Error;

/// Error when a record operation needs the row's `id` but it is not set.
///
/// Raised before any statement is sent to the database, so nothing has been
/// executed when the caller sees it.
#[derive(Debug)]
pub(super) struct MissingKey {
    table: Box<str>,
    operation: &'static str,
}

impl std::error::Error for MissingKey {}

impl core::fmt::Display for MissingKey {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "missing key: cannot {} a `{}` record without an `id`",
            self.operation, self.table
        )
    }
}

impl Error {
    /// Creates a missing key error for `operation` on a record of `table`.
    pub fn missing_key(table: impl Into<String>, operation: &'static str) -> Error {
        Error::from(super::ErrorKind::MissingKey(MissingKey {
            table: table.into().into(),
            operation,
        }))
    }

    /// Returns `true` if this error is a missing key error.
    pub fn is_missing_key(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::MissingKey(_))
    }
}
