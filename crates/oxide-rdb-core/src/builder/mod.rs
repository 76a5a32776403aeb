//! SQL statement builders.
//!
//! Each builder renders one parameterized statement and validates it locally:
//! `build()` returns a [`BuildError`] instead of SQL a driver would reject or,
//! worse, accept (an UPDATE with no WHERE).
//!
//! # Example
//!
//! ```rust
//! use oxide_rdb_core::builder::{Conditional, Select};
//!
//! let (sql, params) = Select::from_table("posts", &["title", "description"])
//!     .and_where("id", "=", 7)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(sql, "SELECT title, description FROM posts WHERE id = ?");
//! assert_eq!(params.len(), 1);
//! ```

mod delete;
mod insert;
mod select;
mod update;

pub use delete::Delete;
pub use insert::Insert;
pub use select::{Order, Select};
pub use update::Update;

use crate::clause::{Clause, Filter, LogicalOperator};
use crate::value::{SqlValue, ToSqlValue};

/// Fluent WHERE methods for anything that owns a [`Filter`].
///
/// Conditions are rendered in the order they are added; the first one drops
/// its conjunction. AND/OR mixing follows SQL precedence.
pub trait Conditional: Sized {
    /// The filter conditions are appended to.
    fn filter_mut(&mut self) -> &mut Filter;

    /// Adds `AND <column> <op> ?`. `=`/`!=` against a NULL value render
    /// `IS NULL`/`IS NOT NULL`.
    #[must_use]
    fn and_where<T: ToSqlValue>(mut self, column: &str, op: &str, value: T) -> Self {
        self.filter_mut()
            .compare(LogicalOperator::And, column, op, value.to_sql_value());
        self
    }

    /// Adds `OR <column> <op> ?`.
    #[must_use]
    fn or_where<T: ToSqlValue>(mut self, column: &str, op: &str, value: T) -> Self {
        self.filter_mut()
            .compare(LogicalOperator::Or, column, op, value.to_sql_value());
        self
    }

    /// Adds `AND <column> BETWEEN ? AND ?`.
    #[must_use]
    fn where_between<T: ToSqlValue, U: ToSqlValue>(mut self, column: &str, low: T, high: U) -> Self {
        self.filter_mut().between(
            LogicalOperator::And,
            column,
            false,
            low.to_sql_value(),
            high.to_sql_value(),
        );
        self
    }

    /// Adds `OR <column> BETWEEN ? AND ?`.
    #[must_use]
    fn or_where_between<T: ToSqlValue, U: ToSqlValue>(
        mut self,
        column: &str,
        low: T,
        high: U,
    ) -> Self {
        self.filter_mut().between(
            LogicalOperator::Or,
            column,
            false,
            low.to_sql_value(),
            high.to_sql_value(),
        );
        self
    }

    /// Adds `AND <column> NOT BETWEEN ? AND ?`.
    #[must_use]
    fn where_not_between<T: ToSqlValue, U: ToSqlValue>(
        mut self,
        column: &str,
        low: T,
        high: U,
    ) -> Self {
        self.filter_mut().between(
            LogicalOperator::And,
            column,
            true,
            low.to_sql_value(),
            high.to_sql_value(),
        );
        self
    }

    /// Adds `AND <column> IN (...)`. An empty list is a build error.
    #[must_use]
    fn where_in<T: ToSqlValue>(mut self, column: &str, values: Vec<T>) -> Self {
        let values = values.into_iter().map(ToSqlValue::to_sql_value).collect();
        self.filter_mut()
            .in_list(LogicalOperator::And, column, false, values);
        self
    }

    /// Adds `AND <column> NOT IN (...)`. An empty list is a build error.
    #[must_use]
    fn where_not_in<T: ToSqlValue>(mut self, column: &str, values: Vec<T>) -> Self {
        let values = values.into_iter().map(ToSqlValue::to_sql_value).collect();
        self.filter_mut()
            .in_list(LogicalOperator::And, column, true, values);
        self
    }

    /// Adds `AND <column> IS NULL`.
    #[must_use]
    fn where_null(mut self, column: &str) -> Self {
        self.filter_mut().null(LogicalOperator::And, column, false);
        self
    }

    /// Adds `AND <column> IS NOT NULL`.
    #[must_use]
    fn where_not_null(mut self, column: &str) -> Self {
        self.filter_mut().null(LogicalOperator::And, column, true);
        self
    }

    /// Adds a prebuilt clause with the values for its placeholders.
    #[must_use]
    fn clause<C: Clause + 'static>(mut self, clause: C, values: Vec<SqlValue>) -> Self {
        self.filter_mut().push(clause, values);
        self
    }
}
