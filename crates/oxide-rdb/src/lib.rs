//! # oxide-rdb
//!
//! Fluent INSERT, SELECT, UPDATE and DELETE statements executed against
//! SQLite, with result wrappers for row counts, generated ids and fetched rows.
//!
//! - [`Database`] opens a connection, creates statements and controls
//!   transactions
//! - Statements validate locally before any SQL is sent: an UPDATE or DELETE
//!   without a WHERE condition is refused
//! - [`SelectResult`] buffers the rows of a query and hands them out once
//!
//! SQL composition lives in `oxide-rdb-core` and is re-exported here.
//!
//! ## Example
//!
//! ```rust,no_run
//! use oxide_rdb::prelude::*;
//!
//! # fn main() -> oxide_rdb::Result<()> {
//! let db = Database::open(&DatabaseConfig::from_env())?;
//! db.execute_sql(
//!     "CREATE TABLE IF NOT EXISTS posts (
//!         id INTEGER PRIMARY KEY AUTOINCREMENT,
//!         title TEXT,
//!         description TEXT
//!     )",
//! )?;
//!
//! db.transaction(|db| {
//!     let id = db
//!         .insert("posts", [("title", "Hello"), ("description", "First post")])
//!         .execute()?
//!         .last_insert_id()?;
//!
//!     db.update("posts", [("title", "Hello, world")], [("id", id)])
//!         .execute()?;
//!     Ok(())
//! })?;
//!
//! let titles: Vec<String> = db
//!     .select("posts", &["title"])
//!     .where_between("id", 1, 10)
//!     .order_by("id", Order::Desc)
//!     .execute()?
//!     .map(|row| row.try_get("title"))
//!     .collect::<Result<_, _>>()?;
//! # let _ = titles;
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Every executed statement is logged through `tracing` at `debug` level with
//! its SQL and parameter count (never the parameter values). Driver failures
//! are logged at `warn`. Install any `tracing` subscriber to see them.

pub mod config;
mod database;
pub mod driver;
mod error;
mod result;
pub mod statement;

pub use config::{DatabaseConfig, DATABASE_URL_ENV};
pub use database::Database;
pub use driver::{Driver, ExecOutcome, SqliteDriver};
pub use error::{Error, Result};
pub use result::{DeleteResult, InsertResult, SelectResult, UpdateResult};
pub use statement::{DeleteStatement, InsertStatement, SelectStatement, UpdateStatement};

pub use oxide_rdb_core::{
    clause, Between, BuildError, Clause, ColumnValues, CompareOp, Comparison, Conditional,
    DecodeError, Filter, FromRow, FromSqlValue, InList, LogicalOperator, NullCheck, Order, Row,
    SqlValue, ToSqlValue,
};

/// Everything needed to open a database and run statements.
pub mod prelude {
    pub use crate::{
        ColumnValues, Conditional, Database, DatabaseConfig, FromRow, Order, Row, SqlValue,
    };
}
