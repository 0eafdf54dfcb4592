use super::Record;
use crate::{Error, Result};

use rowkit_core::{
    bail, err,
    stmt::{Delete, Expr, Insert, Select, Update, Value},
};

impl Record {
    /// Loads the row with `id` into this record.
    ///
    /// Every attribute named by a result column is overwritten; attributes
    /// the row does not carry keep their value. Returns `false` when no row
    /// matched or the query failed.
    pub async fn find(&mut self, id: i64) -> bool {
        match self.try_find(id).await {
            Ok(found) => found,
            Err(err) => {
                self.report("find", &err);
                false
            }
        }
    }

    pub async fn try_find(&mut self, id: i64) -> Result<bool> {
        let select = Select::all(&self.table)
            .filter(Expr::eq(Expr::column("id"), Value::from(id)))
            .limit(1);

        let Some(row) = self.db.query(select).await?.next() else {
            return Ok(false);
        };

        self.attributes.extend(row.into_text_map());
        Ok(true)
    }

    /// Inserts the record if it has no `id`, updates it otherwise.
    ///
    /// Whether anything changed since the record was loaded is not tracked:
    /// saving a found record always issues an `UPDATE`.
    pub async fn save(&mut self) -> bool {
        match self.try_save().await {
            Ok(()) => true,
            Err(err) => {
                self.report("save", &err);
                false
            }
        }
    }

    pub async fn try_save(&mut self) -> Result<()> {
        if self.is_persisted() {
            self.try_update().await
        } else {
            self.try_create().await
        }
    }

    /// Inserts every column, in column order.
    ///
    /// When the database reports the generated key and the record has no
    /// `id` yet, it is stored in the `id` attribute.
    pub async fn create(&mut self) -> bool {
        match self.try_create().await {
            Ok(()) => true,
            Err(err) => {
                self.report("create", &err);
                false
            }
        }
    }

    pub async fn try_create(&mut self) -> Result<()> {
        let mut insert = Insert::new(&self.table);

        for column in &self.columns {
            // An empty key is left for the database to generate.
            if column == "id" && self.id().is_none() {
                continue;
            }

            insert.push(column, self.get(column));
        }

        let res = self
            .db
            .execute(insert)
            .await
            .map_err(|e| e.context(err!("failed to insert into `{}`", self.table)))?;

        if let Some(id) = res.last_insert_id {
            if !self.is_persisted() {
                self.attributes.insert("id".to_string(), id.to_string());
            }
        }

        Ok(())
    }

    /// Writes every column except `id` to the row identified by `id`.
    ///
    /// Fails without issuing a statement if the record has no `id`.
    pub async fn update(&mut self) -> bool {
        match self.try_update().await {
            Ok(()) => true,
            Err(err) => {
                self.report("update", &err);
                false
            }
        }
    }

    pub async fn try_update(&mut self) -> Result<()> {
        let Some(id) = self.id() else {
            return Err(Error::missing_key(&self.table, "update"));
        };

        let mut update = Update::new(&self.table, Record::by_id(id));

        for column in self.columns.iter().filter(|column| *column != "id") {
            update.set(column, self.get(column));
        }

        if update.assignments.is_empty() {
            bail!("nothing to update; `{}` has no columns besides `id`", self.table);
        }

        self.db
            .execute(update)
            .await
            .map_err(|e| e.context(err!("failed to update `{}`", self.table)))?;

        Ok(())
    }

    /// Deletes the row identified by `id` and clears the `id` attribute.
    ///
    /// Fails without issuing a statement if the record has no `id`.
    pub async fn delete(&mut self) -> bool {
        match self.try_delete().await {
            Ok(()) => true,
            Err(err) => {
                self.report("delete", &err);
                false
            }
        }
    }

    pub async fn try_delete(&mut self) -> Result<()> {
        let Some(id) = self.id() else {
            return Err(Error::missing_key(&self.table, "delete"));
        };

        let delete = Delete::new(&self.table, Record::by_id(id));
        self.db.execute(delete).await?;

        if let Some(id) = self.attributes.get_mut("id") {
            id.clear();
        }

        Ok(())
    }
}
