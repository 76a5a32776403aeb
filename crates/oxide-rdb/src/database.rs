//! The database facade.

use std::cell::RefCell;

use oxide_rdb_core::{ColumnValues, Delete, Insert, Row, Select, SqlValue, Update};
use tracing::{debug, warn};

use crate::config::DatabaseConfig;
use crate::driver::{Driver, ExecOutcome, SqliteDriver};
use crate::error::Result;
use crate::statement::{DeleteStatement, InsertStatement, SelectStatement, UpdateStatement};

/// Entry point: one connection, and factories for statements bound to it.
///
/// The factories do no I/O; a statement touches the connection only when it
/// is executed. Transactions are explicit: nothing is wrapped implicitly, so
/// bracket several statements with [`begin_transaction`](Self::begin_transaction)
/// and [`commit`](Self::commit) (or use [`transaction`](Self::transaction))
/// when they must apply atomically.
///
/// The connection lives in a `RefCell`, so a `Database` cannot be shared
/// between threads.
///
/// # Example
///
/// ```rust,no_run
/// use oxide_rdb::prelude::*;
///
/// # fn main() -> oxide_rdb::Result<()> {
/// let db = Database::open_in_memory()?;
/// db.execute_sql("CREATE TABLE posts (id INTEGER PRIMARY KEY AUTOINCREMENT, title TEXT)")?;
///
/// let id = db
///     .insert("posts", [("title", "Hello")])
///     .execute()?
///     .last_insert_id()?;
///
/// let mut result = db
///     .select("posts", &["title"])
///     .and_where("id", "=", id)
///     .execute()?;
/// let row = result.fetch().expect("inserted row");
/// assert_eq!(row.try_get::<String>("title")?, "Hello");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Database<D: Driver = SqliteDriver> {
    driver: RefCell<D>,
}

impl Database<SqliteDriver> {
    /// Opens a SQLite database.
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        Ok(Self::new(SqliteDriver::connect(config)?))
    }

    /// Opens a private in-memory SQLite database.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::new(SqliteDriver::open_in_memory()?))
    }
}

impl<D: Driver> Database<D> {
    /// Wraps an open driver connection.
    pub const fn new(driver: D) -> Self {
        Self {
            driver: RefCell::new(driver),
        }
    }

    /// Returns the driver connection.
    pub fn into_driver(self) -> D {
        self.driver.into_inner()
    }

    /// Creates an INSERT of one row into `table`.
    pub fn insert(&self, table: &str, values: impl Into<ColumnValues>) -> InsertStatement<'_, D> {
        InsertStatement::new(self, Insert::into_table(table, values))
    }

    /// Creates a SELECT of `columns` (all columns when empty) from `table`.
    pub fn select(&self, table: &str, columns: &[&str]) -> SelectStatement<'_, D> {
        SelectStatement::new(self, Select::from_table(table, columns))
    }

    /// Creates an UPDATE of `table` setting `values` where every entry of
    /// `conditions` matches.
    pub fn update(
        &self,
        table: &str,
        values: impl Into<ColumnValues>,
        conditions: impl Into<ColumnValues>,
    ) -> UpdateStatement<'_, D> {
        UpdateStatement::new(self, Update::table(table, values, conditions))
    }

    /// Creates a DELETE from `table` where every entry of `conditions` matches.
    pub fn delete(&self, table: &str, conditions: impl Into<ColumnValues>) -> DeleteStatement<'_, D> {
        DeleteStatement::new(self, Delete::from_table(table, conditions))
    }

    /// Starts a transaction. Nesting is up to the driver; SQLite rejects it.
    pub fn begin_transaction(&self) -> Result<()> {
        debug!("beginning transaction");
        self.driver.borrow_mut().begin()
    }

    /// Commits the current transaction.
    pub fn commit(&self) -> Result<()> {
        debug!("committing transaction");
        self.driver.borrow_mut().commit()
    }

    /// Rolls back the current transaction.
    pub fn roll_back(&self) -> Result<()> {
        debug!("rolling back transaction");
        self.driver.borrow_mut().rollback()
    }

    /// Runs `f` inside a transaction: commits on `Ok`, rolls back on `Err`.
    ///
    /// A failed COMMIT (e.g. a deferred foreign key violation) is rolled back
    /// too, so the connection never stays inside the transaction. The
    /// original error is returned even if the rollback itself fails.
    pub fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Self) -> Result<T>,
    {
        self.begin_transaction()?;
        let outcome = f(self).and_then(|value| self.commit().map(|()| value));
        if outcome.is_err() {
            self.roll_back_quietly();
        }
        outcome
    }

    fn roll_back_quietly(&self) {
        if let Err(err) = self.roll_back() {
            warn!(error = %err, "rollback after failed transaction also failed");
        }
    }

    /// Runs raw SQL without parameters (schema setup, pragmas) and returns
    /// the number of affected rows.
    pub fn execute_sql(&self, sql: &str) -> Result<u64> {
        Ok(self.run_execute("raw", sql, &[])?.rows_affected)
    }

    pub(crate) fn run_execute(
        &self,
        kind: &'static str,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<ExecOutcome> {
        debug!(kind, sql, params = params.len(), "executing statement");
        self.driver
            .borrow_mut()
            .execute(sql, params)
            .inspect_err(|err| warn!(kind, sql, error = %err, "statement failed"))
    }

    pub(crate) fn run_insert(
        &self,
        table: &str,
        sql: &str,
        params: &[SqlValue],
    ) -> Result<ExecOutcome> {
        debug!(kind = "insert", sql, params = params.len(), "executing statement");
        self.driver
            .borrow_mut()
            .insert(table, sql, params)
            .inspect_err(|err| warn!(kind = "insert", sql, error = %err, "statement failed"))
    }

    pub(crate) fn run_query(&self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>> {
        debug!(kind = "select", sql, params = params.len(), "executing statement");
        self.driver
            .borrow_mut()
            .query(sql, params)
            .inspect_err(|err| warn!(kind = "select", sql, error = %err, "statement failed"))
    }
}
