//! Fetched rows.

use crate::error::DecodeError;
use crate::value::{FromSqlValue, SqlValue};

/// One fetched row: an ordered mapping from column name to value.
///
/// Column order is the order the driver reported, which for a `SELECT` with
/// explicit columns is the order they were requested in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<SqlValue>,
}

impl Row {
    /// Creates an empty row.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Creates an empty row with room for `n` columns.
    #[must_use]
    pub fn with_capacity(n: usize) -> Self {
        Self {
            columns: Vec::with_capacity(n),
            values: Vec::with_capacity(n),
        }
    }

    /// Appends a column.
    pub fn push(&mut self, column: impl Into<String>, value: SqlValue) {
        self.columns.push(column.into());
        self.values.push(value);
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the row has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names, in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values, in column order.
    #[must_use]
    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Returns the value of the first column named `column`.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| &self.values[i])
    }

    /// Decodes the value of `column` as `T`.
    pub fn try_get<T: FromSqlValue>(&self, column: &str) -> Result<T, DecodeError> {
        let value = self
            .get(column)
            .ok_or_else(|| DecodeError::MissingColumn(String::from(column)))?;
        T::from_sql_value(value)
            .ok_or_else(|| DecodeError::mismatch(column, T::EXPECTED, value.type_name()))
    }

    /// Iterates over `(column, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }
}

impl<K: Into<String>> FromIterator<(K, SqlValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, SqlValue)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (column, value) in iter {
            row.push(column, value);
        }
        row
    }
}

impl IntoIterator for Row {
    type Item = (String, SqlValue);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<String>, std::vec::IntoIter<SqlValue>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter().zip(self.values)
    }
}

/// Maps a fetched [`Row`] onto a caller type.
///
/// # Example
///
/// ```rust
/// use oxide_rdb_core::{DecodeError, FromRow, Row, SqlValue};
///
/// struct Post {
///     id: i64,
///     title: String,
/// }
///
/// impl FromRow for Post {
///     fn from_row(row: &Row) -> Result<Self, DecodeError> {
///         Ok(Self {
///             id: row.try_get("id")?,
///             title: row.try_get("title")?,
///         })
///     }
/// }
///
/// let row: Row = [
///     ("id", SqlValue::Int(1)),
///     ("title", SqlValue::Text(String::from("Hello"))),
/// ]
/// .into_iter()
/// .collect();
/// let post = Post::from_row(&row).unwrap();
/// assert_eq!(post.id, 1);
/// assert_eq!(post.title, "Hello");
/// ```
pub trait FromRow: Sized {
    /// Decodes `row`.
    fn from_row(row: &Row) -> Result<Self, DecodeError>;
}

impl FromRow for Row {
    fn from_row(row: &Row) -> Result<Self, DecodeError> {
        Ok(row.clone())
    }
}
