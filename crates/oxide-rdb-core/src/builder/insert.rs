//! INSERT statement builder.

use crate::columns::ColumnValues;
use crate::error::BuildError;
use crate::value::{placeholders, SqlValue, ToSqlValue};

const STATEMENT: &str = "INSERT";

/// Builds `INSERT INTO <table> (<cols>) VALUES (<placeholders>)`.
///
/// Values are bound in column order.
#[derive(Debug, Clone)]
pub struct Insert {
    table: String,
    values: ColumnValues,
}

impl Insert {
    /// Creates an INSERT of one row.
    #[must_use]
    pub fn into_table(table: &str, values: impl Into<ColumnValues>) -> Self {
        Self {
            table: String::from(table),
            values: values.into(),
        }
    }

    /// Sets one more column value.
    #[must_use]
    pub fn value<T: ToSqlValue>(mut self, column: &str, value: T) -> Self {
        self.values.insert(column, value);
        self
    }

    /// Target table.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Builds the INSERT statement and returns SQL with parameters.
    pub fn build(self) -> Result<(String, Vec<SqlValue>), BuildError> {
        if self.table.is_empty() {
            return Err(BuildError::EmptyTable {
                statement: STATEMENT,
            });
        }
        if self.values.is_empty() {
            return Err(BuildError::NoValues {
                statement: STATEMENT,
            });
        }
        if self.values.has_empty_column() {
            return Err(BuildError::EmptyColumn {
                statement: STATEMENT,
            });
        }

        let mut sql = String::from("INSERT INTO ");
        sql.push_str(&self.table);
        sql.push_str(" (");
        sql.push_str(&self.values.columns().collect::<Vec<_>>().join(", "));
        sql.push_str(") VALUES (");
        sql.push_str(&placeholders(self.values.len()));
        sql.push(')');

        let params = self.values.into_iter().map(|(_, v)| v).collect();
        Ok((sql, params))
    }
}
