//! Outcomes of executed statements.

use std::collections::VecDeque;

use oxide_rdb_core::{FromRow, Row};

use crate::driver::ExecOutcome;
use crate::error::{Error, Result};

/// Outcome of an INSERT.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertResult {
    rows_affected: u64,
    last_insert_id: Option<i64>,
}

impl InsertResult {
    pub(crate) const fn new(outcome: ExecOutcome) -> Self {
        Self {
            rows_affected: outcome.rows_affected,
            last_insert_id: outcome.last_insert_id,
        }
    }

    /// Number of rows inserted.
    #[must_use]
    pub const fn row_count(&self) -> u64 {
        self.rows_affected
    }

    /// Auto-generated id of the inserted row.
    ///
    /// Fails with [`Error::NoInsertId`] when the insert generated none, e.g.
    /// into a `WITHOUT ROWID` table or an `INSERT OR IGNORE` that hit a
    /// conflict.
    pub fn last_insert_id(&self) -> Result<i64> {
        match self.last_insert_id {
            Some(id) => Ok(id),
            None => Err(Error::NoInsertId),
        }
    }
}

/// Outcome of an UPDATE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    rows_affected: u64,
}

impl UpdateResult {
    pub(crate) const fn new(rows_affected: u64) -> Self {
        Self { rows_affected }
    }

    /// Number of rows the update matched.
    #[must_use]
    pub const fn row_count(&self) -> u64 {
        self.rows_affected
    }
}

/// Outcome of a DELETE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResult {
    rows_affected: u64,
}

impl DeleteResult {
    pub(crate) const fn new(rows_affected: u64) -> Self {
        Self { rows_affected }
    }

    /// Number of rows deleted.
    #[must_use]
    pub const fn row_count(&self) -> u64 {
        self.rows_affected
    }
}

/// Rows returned by a SELECT, consumed front to back.
///
/// [`row_count`](Self::row_count) is fixed at execution time and does not
/// shrink as rows are fetched. Once a row has been fetched it is gone:
/// a second [`fetch_all`](Self::fetch_all) returns an empty vector.
#[derive(Debug, Clone, Default)]
pub struct SelectResult {
    rows: VecDeque<Row>,
    row_count: u64,
}

impl SelectResult {
    pub(crate) fn new(rows: Vec<Row>) -> Self {
        let row_count = u64::try_from(rows.len()).unwrap_or(u64::MAX);
        Self {
            rows: rows.into(),
            row_count,
        }
    }

    /// Number of rows the query returned.
    #[must_use]
    pub const fn row_count(&self) -> u64 {
        self.row_count
    }

    /// Number of rows not fetched yet.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rows.len()
    }

    /// Next row, or `None` once every row has been fetched.
    pub fn fetch(&mut self) -> Option<Row> {
        self.rows.pop_front()
    }

    /// Every row not fetched yet, in order.
    pub fn fetch_all(&mut self) -> Vec<Row> {
        self.rows.drain(..).collect()
    }

    /// Next row decoded as `T`.
    pub fn fetch_as<T: FromRow>(&mut self) -> Result<Option<T>> {
        self.fetch()
            .map(|row| T::from_row(&row))
            .transpose()
            .map_err(Error::from)
    }

    /// Every row not fetched yet, decoded as `T`. Stops at the first row
    /// that fails to decode; that row and the ones before it are consumed.
    pub fn fetch_all_as<T: FromRow>(&mut self) -> Result<Vec<T>> {
        let mut decoded = Vec::with_capacity(self.rows.len());
        while let Some(row) = self.rows.pop_front() {
            decoded.push(T::from_row(&row)?);
        }
        Ok(decoded)
    }
}

impl Iterator for SelectResult {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.fetch()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rows.len(), Some(self.rows.len()))
    }
}

impl ExactSizeIterator for SelectResult {}

#[cfg(test)]
mod tests {
    use oxide_rdb_core::{DecodeError, SqlValue};

    use super::*;

    fn row(id: i64, title: &str) -> Row {
        [
            ("id", SqlValue::Int(id)),
            ("title", SqlValue::Text(title.to_string())),
        ]
        .into_iter()
        .collect()
    }

    #[derive(Debug, PartialEq)]
    struct Title(String);

    impl FromRow for Title {
        fn from_row(row: &Row) -> std::result::Result<Self, DecodeError> {
            Ok(Self(row.try_get("title")?))
        }
    }

    #[test]
    fn test_fetch_consumes_in_order() {
        let mut result = SelectResult::new(vec![row(1, "a"), row(2, "b")]);
        assert_eq!(result.row_count(), 2);

        assert_eq!(result.fetch(), Some(row(1, "a")));
        assert_eq!(result.fetch_all(), vec![row(2, "b")]);
        assert_eq!(result.fetch(), None);
        assert!(result.fetch_all().is_empty());
        assert_eq!(result.row_count(), 2);
    }

    #[test]
    fn test_fetch_as_decodes() {
        let mut result = SelectResult::new(vec![row(1, "a"), row(2, "b")]);
        assert_eq!(result.fetch_as::<Title>().unwrap(), Some(Title("a".into())));
        assert_eq!(result.fetch_all_as::<Title>().unwrap(), vec![Title("b".into())]);
        assert_eq!(result.fetch_as::<Title>().unwrap(), None);
    }

    #[test]
    fn test_fetch_as_reports_missing_column() {
        let mut result = SelectResult::new(vec![[("id", SqlValue::Int(1))].into_iter().collect()]);
        let err = result.fetch_as::<Title>().unwrap_err();
        assert!(matches!(err, Error::Decode(DecodeError::MissingColumn(ref c)) if c == "title"));
    }

    #[test]
    fn test_iterates() {
        let result = SelectResult::new(vec![row(1, "a"), row(2, "b"), row(3, "c")]);
        assert_eq!(result.len(), 3);
        let ids: Vec<i64> = result.map(|r| r.try_get("id").unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_last_insert_id_absent() {
        let result = InsertResult::new(ExecOutcome {
            rows_affected: 1,
            last_insert_id: None,
        });
        assert_eq!(result.row_count(), 1);
        assert!(matches!(result.last_insert_id(), Err(Error::NoInsertId)));

        let result = InsertResult::new(ExecOutcome {
            rows_affected: 1,
            last_insert_id: Some(42),
        });
        assert_eq!(result.last_insert_id().unwrap(), 42);
    }
}
