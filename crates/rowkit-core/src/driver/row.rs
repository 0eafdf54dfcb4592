use indexmap::IndexMap;
use std::{collections::VecDeque, sync::Arc};

/// Rows returned by a query, decoded to text.
///
/// Column names are the ones the backend reported for the result, in result
/// order. Rows are handed out one at a time by iterating the set.
#[derive(Debug, Clone)]
pub struct RowSet {
    columns: Arc<[String]>,
    rows: VecDeque<Vec<Option<String>>>,
}

/// A single result row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Option<String>>,
}

impl RowSet {
    pub fn new(columns: impl Into<Arc<[String]>>) -> RowSet {
        RowSet {
            columns: columns.into(),
            rows: Default::default(),
        }
    }

    /// Builds a row set from pre-decoded rows.
    ///
    /// # Panics
    ///
    /// If any row has a different width than `columns`.
    pub fn from_vec(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> RowSet {
        let mut set = RowSet::new(columns);
        for row in rows {
            set.push(row);
        }
        set
    }

    /// Appends a row; `values` is positional against [`RowSet::columns`].
    ///
    /// # Panics
    ///
    /// If `values` has a different width than the column list.
    pub fn push(&mut self, values: Vec<Option<String>>) {
        assert_eq!(
            self.columns.len(),
            values.len(),
            "row width does not match column count"
        );
        self.rows.push_back(values);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows not yet consumed.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for RowSet {
    fn default() -> RowSet {
        RowSet::new(Vec::new())
    }
}

impl Iterator for RowSet {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        let values = self.rows.pop_front()?;
        Some(Row {
            columns: self.columns.clone(),
            values,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rows.len(), Some(self.rows.len()))
    }
}

impl ExactSizeIterator for RowSet {}

impl Row {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the value of `column`. SQL `NULL` is `Some(None)`; a column
    /// that is not part of the result is `None`.
    pub fn get(&self, column: &str) -> Option<Option<&str>> {
        let index = self.columns.iter().position(|name| name == column)?;
        Some(self.values[index].as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> + '_ {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(Option::as_deref))
    }

    /// Converts the row to a column → text map. `NULL` decodes to an empty
    /// string; every result column is present.
    pub fn into_text_map(self) -> IndexMap<String, String> {
        self.columns
            .iter()
            .cloned()
            .zip(self.values.into_iter().map(Option::unwrap_or_default))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> RowSet {
        RowSet::from_vec(
            vec!["id".into(), "NOMBRE".into()],
            vec![
                vec![Some("1".into()), Some("Ana".into())],
                vec![Some("2".into()), None],
            ],
        )
    }

    #[test]
    fn iterates_in_order() {
        let mut rows = people();
        assert_eq!(rows.len(), 2);

        let first = rows.next().unwrap();
        assert_eq!(first.get("NOMBRE"), Some(Some("Ana")));
        assert_eq!(rows.len(), 1);

        let second = rows.next().unwrap();
        assert_eq!(second.get("id"), Some(Some("2")));
        assert!(rows.next().is_none());
    }

    #[test]
    fn null_and_missing_are_distinct() {
        let row = people().nth(1).unwrap();
        assert_eq!(row.get("NOMBRE"), Some(None));
        assert_eq!(row.get("EDAD"), None);
    }

    #[test]
    fn null_decodes_to_empty_text() {
        let map = people().nth(1).unwrap().into_text_map();
        assert_eq!(map.get("NOMBRE").map(String::as_str), Some(""));
        assert_eq!(
            map.keys().map(String::as_str).collect::<Vec<_>>(),
            ["id", "NOMBRE"]
        );
    }

    #[test]
    #[should_panic(expected = "row width does not match column count")]
    fn rejects_ragged_rows() {
        let mut rows = RowSet::new(vec!["id".to_string()]);
        rows.push(vec![None, None]);
    }
}
