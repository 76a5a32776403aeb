use oxide_rdb_core::{Conditional, Filter, ToSqlValue, Update};

use crate::database::Database;
use crate::driver::Driver;
use crate::error::Result;
use crate::result::UpdateResult;

/// A pending UPDATE. Refuses to run without a WHERE condition.
#[derive(Debug)]
#[must_use = "statements do nothing until executed"]
pub struct UpdateStatement<'db, D: Driver> {
    db: &'db Database<D>,
    builder: Update,
}

impl<'db, D: Driver> UpdateStatement<'db, D> {
    pub(crate) const fn new(db: &'db Database<D>, builder: Update) -> Self {
        Self { db, builder }
    }

    /// Assigns one more column.
    pub fn set<T: ToSqlValue>(mut self, column: &str, value: T) -> Self {
        self.builder = self.builder.set(column, value);
        self
    }

    /// Target table.
    #[must_use]
    pub fn table(&self) -> &str {
        self.builder.table_name()
    }

    /// Validates and runs the update.
    pub fn execute(self) -> Result<UpdateResult> {
        let (sql, params) = self.builder.build()?;
        let outcome = self.db.run_execute("update", &sql, &params)?;
        Ok(UpdateResult::new(outcome.rows_affected))
    }
}

impl<D: Driver> Conditional for UpdateStatement<'_, D> {
    fn filter_mut(&mut self) -> &mut Filter {
        self.builder.filter_mut()
    }
}
