//! Error types for statement building and row decoding.

use thiserror::Error;

/// A statement that failed local validation.
///
/// These are raised by `build()` before anything is sent to a driver.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The target table name is empty.
    #[error("{statement} statement has an empty table name")]
    EmptyTable {
        /// Statement kind (`INSERT`, `SELECT`, ...).
        statement: &'static str,
    },

    /// A column name is empty.
    #[error("{statement} statement references an empty column name")]
    EmptyColumn {
        /// Statement kind.
        statement: &'static str,
    },

    /// INSERT values or UPDATE assignments are missing.
    #[error("{statement} statement has no column values")]
    NoValues {
        /// Statement kind.
        statement: &'static str,
    },

    /// UPDATE or DELETE without any condition.
    #[error("{statement} statement requires at least one WHERE condition")]
    MissingWhere {
        /// Statement kind.
        statement: &'static str,
    },

    /// Unknown comparison operator.
    #[error("unsupported comparison operator: {0:?}")]
    UnsupportedOperator(String),

    /// Logical operator other than AND/OR.
    #[error("unsupported logical operator: {0:?}")]
    UnsupportedLogicalOperator(String),

    /// A clause was given a different number of values than it has placeholders.
    #[error("clause `{clause}` expects {expected} value(s), got {actual}")]
    ArityMismatch {
        /// Rendered predicate of the offending clause.
        clause: String,
        /// Placeholder count of the clause.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// IN clause with no values.
    #[error("IN clause on column `{0}` has no values")]
    EmptyInList(String),
}

/// A row value that could not be converted to the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The row has no column with this name.
    #[error("column not found: {0}")]
    MissingColumn(String),

    /// The stored value has an incompatible type.
    #[error("column `{column}`: expected {expected}, found {found}")]
    TypeMismatch {
        /// Column name.
        column: String,
        /// Requested type.
        expected: &'static str,
        /// Variant actually stored.
        found: &'static str,
    },
}

impl DecodeError {
    /// Creates a type mismatch error.
    pub fn mismatch(column: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            column: column.into(),
            expected,
            found,
        }
    }
}
