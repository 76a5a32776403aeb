use oxide_rdb_core::{Conditional, Filter, Order, Select};

use crate::database::Database;
use crate::driver::Driver;
use crate::error::Result;
use crate::result::SelectResult;

/// A pending SELECT.
#[derive(Debug)]
#[must_use = "statements do nothing until executed"]
pub struct SelectStatement<'db, D: Driver> {
    db: &'db Database<D>,
    builder: Select,
}

impl<'db, D: Driver> SelectStatement<'db, D> {
    pub(crate) const fn new(db: &'db Database<D>, builder: Select) -> Self {
        Self { db, builder }
    }

    /// Appends an ORDER BY term.
    pub fn order_by(mut self, column: &str, order: Order) -> Self {
        self.builder = self.builder.order_by(column, order);
        self
    }

    /// Caps the number of rows returned.
    pub fn limit(mut self, n: u64) -> Self {
        self.builder = self.builder.limit(n);
        self
    }

    /// Skips the first `n` rows.
    pub fn offset(mut self, n: u64) -> Self {
        self.builder = self.builder.offset(n);
        self
    }

    /// Source table.
    #[must_use]
    pub fn table(&self) -> &str {
        self.builder.table()
    }

    /// Validates and runs the query, buffering every row.
    pub fn execute(self) -> Result<SelectResult> {
        let (sql, params) = self.builder.build()?;
        let rows = self.db.run_query(&sql, &params)?;
        Ok(SelectResult::new(rows))
    }
}

impl<D: Driver> Conditional for SelectStatement<'_, D> {
    fn filter_mut(&mut self) -> &mut Filter {
        self.builder.filter_mut()
    }
}
