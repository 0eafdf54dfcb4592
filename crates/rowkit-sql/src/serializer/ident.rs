use super::{Formatter, Params, ToSql};

/// A table or column name.
///
/// Names come from the caller's table definition and are written as-is.
pub(super) struct Ident<S>(pub(super) S);

impl<S: AsRef<str>> ToSql for Ident<S> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        f.dst.push_str(self.0.as_ref());
    }
}
