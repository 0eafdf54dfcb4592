use super::{Flavor, Formatter, ToSql};

use rowkit_core::stmt;

pub trait Params {
    /// Stores `value` and returns its 1-based position.
    fn push(&mut self, value: &stmt::Value) -> Placeholder;
}

pub struct Placeholder(pub usize);

impl Params for Vec<stmt::Value> {
    fn push(&mut self, value: &stmt::Value) -> Placeholder {
        self.push(value.clone());
        Placeholder(self.len())
    }
}

impl ToSql for Placeholder {
    fn to_sql<P: Params>(self, f: &mut Formatter<'_, P>) {
        use std::fmt::Write;

        let res = match f.serializer.flavor {
            Flavor::Mysql => write!(f.dst, "?"),
            Flavor::Postgresql => write!(f.dst, "${}", self.0),
            Flavor::Sqlite => write!(f.dst, "?{}", self.0),
            Flavor::Inline => unreachable!("inline serialization does not bind parameters"),
        };

        res.expect("writing to a String cannot fail");
    }
}
