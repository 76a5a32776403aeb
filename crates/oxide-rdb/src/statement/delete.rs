use oxide_rdb_core::{Conditional, Delete, Filter};

use crate::database::Database;
use crate::driver::Driver;
use crate::error::Result;
use crate::result::DeleteResult;

/// A pending DELETE. Refuses to run without a WHERE condition.
#[derive(Debug)]
#[must_use = "statements do nothing until executed"]
pub struct DeleteStatement<'db, D: Driver> {
    db: &'db Database<D>,
    builder: Delete,
}

impl<'db, D: Driver> DeleteStatement<'db, D> {
    pub(crate) const fn new(db: &'db Database<D>, builder: Delete) -> Self {
        Self { db, builder }
    }

    /// Source table.
    #[must_use]
    pub fn table(&self) -> &str {
        self.builder.table()
    }

    /// Validates and runs the delete.
    pub fn execute(self) -> Result<DeleteResult> {
        let (sql, params) = self.builder.build()?;
        let outcome = self.db.run_execute("delete", &sql, &params)?;
        Ok(DeleteResult::new(outcome.rows_affected))
    }
}

impl<D: Driver> Conditional for DeleteStatement<'_, D> {
    fn filter_mut(&mut self) -> &mut Filter {
        self.builder.filter_mut()
    }
}
