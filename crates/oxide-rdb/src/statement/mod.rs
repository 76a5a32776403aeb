//! Statements bound to a [`Database`](crate::Database).
//!
//! A statement wraps a builder from `oxide-rdb-core` and the connection it
//! will run on. `execute` consumes the statement: validation happens first,
//! and a statement that fails validation never reaches the driver.

mod delete;
mod insert;
mod select;
mod update;

pub use delete::DeleteStatement;
pub use insert::InsertStatement;
pub use select::SelectStatement;
pub use update::UpdateStatement;
