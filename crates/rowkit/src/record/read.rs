use super::Record;
use crate::{Attributes, Result};

use rowkit_core::driver::Row;

impl Record {
    /// Reads every matching row.
    ///
    /// Runs the raw query when one is set, otherwise selects the table
    /// narrowed by the filter. Rows are returned as independent maps; the
    /// record's own attributes are not touched. A failed query reads as no
    /// rows.
    pub async fn all(&self) -> Vec<Attributes> {
        self.try_all().await.unwrap_or_else(|err| {
            self.report("all", &err);
            vec![]
        })
    }

    pub async fn try_all(&self) -> Result<Vec<Attributes>> {
        let rows = self.db.query(self.read_statement(None)).await?;
        Ok(rows.map(Row::into_text_map).collect())
    }

    /// Like [`all`](Record::all) with `LIMIT 1` appended, even to a raw
    /// query. Returns an empty map when nothing matched.
    pub async fn first(&self) -> Attributes {
        match self.try_first().await {
            Ok(row) => row.unwrap_or_default(),
            Err(err) => {
                self.report("first", &err);
                Attributes::default()
            }
        }
    }

    pub async fn try_first(&self) -> Result<Option<Attributes>> {
        let mut rows = self.db.query(self.read_statement(Some(1))).await?;
        Ok(rows.next().map(Row::into_text_map))
    }
}
