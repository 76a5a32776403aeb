use oxide_rdb_core::{Insert, ToSqlValue};

use crate::database::Database;
use crate::driver::Driver;
use crate::error::Result;
use crate::result::InsertResult;

/// A pending INSERT of one row.
#[derive(Debug)]
#[must_use = "statements do nothing until executed"]
pub struct InsertStatement<'db, D: Driver> {
    db: &'db Database<D>,
    builder: Insert,
}

impl<'db, D: Driver> InsertStatement<'db, D> {
    pub(crate) const fn new(db: &'db Database<D>, builder: Insert) -> Self {
        Self { db, builder }
    }

    /// Sets one more column, replacing an earlier value for it.
    pub fn value<T: ToSqlValue>(mut self, column: &str, value: T) -> Self {
        self.builder = self.builder.value(column, value);
        self
    }

    /// Target table.
    #[must_use]
    pub fn table(&self) -> &str {
        self.builder.table()
    }

    /// Validates and runs the insert.
    pub fn execute(self) -> Result<InsertResult> {
        let table = self.builder.table().to_owned();
        let (sql, params) = self.builder.build()?;
        let outcome = self.db.run_insert(&table, &sql, &params)?;
        Ok(InsertResult::new(outcome))
    }
}
