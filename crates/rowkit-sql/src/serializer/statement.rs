use super::{Comma, Flavor, Ident, Params, ToSql};

use rowkit_core::stmt;

impl ToSql for &stmt::Statement {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        match self {
            stmt::Statement::Delete(stmt) => stmt.to_sql(f),
            stmt::Statement::Insert(stmt) => stmt.to_sql(f),
            stmt::Statement::Raw(stmt) => stmt.to_sql(f),
            stmt::Statement::Select(stmt) => stmt.to_sql(f),
            stmt::Statement::Update(stmt) => stmt.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Select {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table);
        let filter = self.filter.as_ref().map(Filter);

        fmt!(f, "SELECT * FROM " table filter self.limit);
    }
}

impl ToSql for &stmt::Insert {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        assert_eq!(
            self.columns.len(),
            self.values.len(),
            "every INSERT column needs exactly one value"
        );

        let table = Ident(&self.table);

        // An empty column list is only valid MySQL; the other dialects spell
        // it `DEFAULT VALUES`.
        if self.columns.is_empty()
            && matches!(f.serializer.flavor, Flavor::Sqlite | Flavor::Postgresql)
        {
            fmt!(f, "INSERT INTO " table " DEFAULT VALUES");
            return;
        }

        let columns = Comma(self.columns.iter().map(Ident));
        let values = Comma(&self.values);

        fmt!(f, "INSERT INTO " table " (" columns ") VALUES (" values ")");
    }
}

impl ToSql for &stmt::Update {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table);
        let assignments = Comma(&self.assignments);

        fmt!(f, "UPDATE " table " SET " assignments Filter(&self.filter));
    }
}

impl ToSql for &stmt::Assignment {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let column = Ident(&self.column);
        let value = &self.value;

        fmt!(f, column " = " value);
    }
}

impl ToSql for &stmt::Delete {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        let table = Ident(&self.table);

        fmt!(f, "DELETE FROM " table Filter(&self.filter));
    }
}

impl ToSql for &stmt::Raw {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, self.sql.as_str() self.limit);
    }
}

impl ToSql for stmt::Limit {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, " LIMIT " self.limit);
    }
}

/// ` WHERE <expr>`
struct Filter<'a>(&'a stmt::Expr);

impl ToSql for Filter<'_> {
    fn to_sql<P: Params>(self, f: &mut super::Formatter<'_, P>) {
        fmt!(f, " WHERE " self.0);
    }
}
