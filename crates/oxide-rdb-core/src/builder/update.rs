//! UPDATE statement builder.

use super::Conditional;
use crate::clause::Filter;
use crate::columns::ColumnValues;
use crate::error::BuildError;
use crate::value::{SqlValue, ToSqlValue};

const STATEMENT: &str = "UPDATE";

/// Builds `UPDATE <table> SET <c> = ?, ... WHERE ...`.
///
/// SET values are bound first, then WHERE values. An UPDATE without any
/// condition is rejected rather than rewriting every row.
#[derive(Debug)]
pub struct Update {
    table: String,
    assignments: ColumnValues,
    filter: Filter,
}

impl Update {
    /// Creates an UPDATE of `table` setting `assignments` on the rows matching
    /// every entry of `conditions`.
    #[must_use]
    pub fn table(
        table: &str,
        assignments: impl Into<ColumnValues>,
        conditions: impl Into<ColumnValues>,
    ) -> Self {
        let mut filter = Filter::new();
        filter.equals_all(&conditions.into());
        Self {
            table: String::from(table),
            assignments: assignments.into(),
            filter,
        }
    }

    /// Adds another SET assignment.
    #[must_use]
    pub fn set<T: ToSqlValue>(mut self, column: &str, value: T) -> Self {
        self.assignments.insert(column, value);
        self
    }

    /// Target table.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// Builds the UPDATE statement and returns SQL with parameters.
    pub fn build(self) -> Result<(String, Vec<SqlValue>), BuildError> {
        if self.table.is_empty() {
            return Err(BuildError::EmptyTable {
                statement: STATEMENT,
            });
        }
        if self.assignments.is_empty() {
            return Err(BuildError::NoValues {
                statement: STATEMENT,
            });
        }
        self.filter.check()?;
        if self.filter.is_empty() {
            return Err(BuildError::MissingWhere {
                statement: STATEMENT,
            });
        }
        if self.assignments.has_empty_column() || self.filter.has_empty_column() {
            return Err(BuildError::EmptyColumn {
                statement: STATEMENT,
            });
        }

        let mut sql = String::from("UPDATE ");
        sql.push_str(&self.table);
        sql.push_str(" SET ");

        let set_parts: Vec<String> = self
            .assignments
            .columns()
            .map(|c| format!("{c} = ?"))
            .collect();
        sql.push_str(&set_parts.join(", "));
        sql.push_str(&self.filter.render());

        let mut params: Vec<SqlValue> = self.assignments.into_iter().map(|(_, v)| v).collect();
        params.extend(self.filter.params().iter().cloned());

        Ok((sql, params))
    }
}

impl Conditional for Update {
    fn filter_mut(&mut self) -> &mut Filter {
        &mut self.filter
    }
}
