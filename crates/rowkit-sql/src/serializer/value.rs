use super::{Formatter, Params, ToSql};

use rowkit_core::stmt;

impl ToSql for &stmt::Value {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        if f.serializer.is_inline() {
            return Literal(self).to_sql(f);
        }

        let placeholder = f.params.push(self);
        fmt!(f, placeholder)
    }
}

/// A value written directly into the SQL text.
struct Literal<'a>(&'a stmt::Value);

impl ToSql for Literal<'_> {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        match self.0 {
            stmt::Value::I64(value) => {
                use std::fmt::Write;
                write!(f.dst, "{value}").expect("writing to a String cannot fail");
            }
            stmt::Value::Null => f.dst.push_str("NULL"),
            stmt::Value::String(value) => {
                f.dst.push('\'');
                for ch in value.chars() {
                    if ch == '\'' {
                        f.dst.push('\'');
                    }
                    f.dst.push(ch);
                }
                f.dst.push('\'');
            }
        }
    }
}
