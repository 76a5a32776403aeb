//! Ordered column/value maps.

use crate::value::{SqlValue, ToSqlValue};

/// An ordered mapping from column name to value.
///
/// Used for INSERT values, UPDATE assignments and UPDATE/DELETE where-maps.
/// Rendering follows insertion order; setting a column again replaces its value
/// in place.
///
/// # Example
///
/// ```rust
/// use oxide_rdb_core::ColumnValues;
///
/// let values = ColumnValues::new()
///     .set("title", "Hello")
///     .set("views", 3);
/// assert_eq!(values.columns().collect::<Vec<_>>(), vec!["title", "views"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnValues {
    entries: Vec<(String, SqlValue)>,
}

impl ColumnValues {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Sets `column` to `value`.
    #[must_use]
    pub fn set<T: ToSqlValue>(mut self, column: &str, value: T) -> Self {
        self.insert(column, value);
        self
    }

    /// Sets `column` to `value` in place.
    pub fn insert<T: ToSqlValue>(&mut self, column: &str, value: T) {
        let value = value.to_sql_value();
        match self.entries.iter_mut().find(|(c, _)| c == column) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((String::from(column), value)),
        }
    }

    /// Returns the value for `column`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no column is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column names in order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    /// Values in column order.
    pub fn values(&self) -> impl Iterator<Item = &SqlValue> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterates over `(column, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub(crate) fn has_empty_column(&self) -> bool {
        self.entries.iter().any(|(c, _)| c.is_empty())
    }
}

impl<K: AsRef<str>, V: ToSqlValue> FromIterator<(K, V)> for ColumnValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = Self::new();
        for (column, value) in iter {
            values.insert(column.as_ref(), value);
        }
        values
    }
}

impl<K: AsRef<str>, V: ToSqlValue, const N: usize> From<[(K, V); N]> for ColumnValues {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for ColumnValues {
    type Item = (String, SqlValue);
    type IntoIter = std::vec::IntoIter<(String, SqlValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
