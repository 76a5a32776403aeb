//! The narrow contract between statements and a database connection.

mod sqlite;

pub use sqlite::SqliteDriver;

use oxide_rdb_core::{Row, SqlValue};

use crate::error::Result;

/// What a non-row-returning statement reports back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Rows inserted, updated or deleted.
    pub rows_affected: u64,
    /// Row id generated by this statement. Only [`Driver::insert`] sets it.
    pub last_insert_id: Option<i64>,
}

/// A blocking database connection.
///
/// Statements only ever talk to the database through these six calls.
/// Implementations pass driver failures through as
/// [`Error::Database`](crate::Error::Database) and must not retry.
pub trait Driver {
    /// Runs a statement that returns no rows.
    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<ExecOutcome>;

    /// Runs a single-row INSERT into `table` and reports the row id it
    /// generated, or `None` when it generated none (no row inserted, or a
    /// table without auto-generated ids).
    fn insert(&mut self, table: &str, sql: &str, params: &[SqlValue]) -> Result<ExecOutcome>;

    /// Runs a statement and returns every row it produced, in order.
    fn query(&mut self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>>;

    /// Starts a transaction.
    fn begin(&mut self) -> Result<()>;

    /// Commits the current transaction.
    fn commit(&mut self) -> Result<()>;

    /// Rolls back the current transaction.
    fn rollback(&mut self) -> Result<()>;
}
