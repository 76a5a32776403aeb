//! # oxide-rdb-core
//!
//! Driver-free SQL composition for `oxide-rdb`.
//!
//! This crate provides:
//! - Clause builders that render parameterized WHERE fragments
//!   (`BETWEEN`, comparisons, `IN`, `IS NULL`) joined by `AND`/`OR`
//! - INSERT, SELECT, UPDATE and DELETE builders that validate locally and
//!   return SQL with its bound parameters
//! - Tagged values and rows for reading results back
//!
//! Nothing here performs I/O; `oxide-rdb` binds these builders to a
//! connection.
//!
//! ## Clause composition
//!
//! ```rust
//! use oxide_rdb_core::clause::{Between, Clause};
//!
//! let clause = Between::with("price", "or", true).unwrap();
//! assert_eq!(clause.to_string(), " OR price NOT BETWEEN ? AND ?");
//! assert_eq!(clause.arity(), 2);
//! ```
//!
//! ## SQL Injection Prevention
//!
//! Values are always parameterized. Identifiers (table and column names) are
//! written verbatim and must come from trusted code.
//!
//! ```rust
//! use oxide_rdb_core::builder::{Conditional, Select};
//! use oxide_rdb_core::SqlValue;
//!
//! let user_input = "'; DROP TABLE users; --";
//! let (sql, params) = Select::from_table("users", &["id"])
//!     .and_where("name", "=", user_input)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(sql, "SELECT id FROM users WHERE name = ?");
//! assert_eq!(params, vec![SqlValue::Text(user_input.to_string())]);
//! ```

pub mod builder;
pub mod clause;
mod columns;
mod error;
mod row;
pub mod value;

pub use builder::{Conditional, Delete, Insert, Order, Select, Update};
pub use clause::{Between, Clause, CompareOp, Comparison, Filter, InList, LogicalOperator, NullCheck};
pub use columns::ColumnValues;
pub use error::{BuildError, DecodeError};
pub use row::{FromRow, Row};
pub use value::{FromSqlValue, SqlValue, ToSqlValue};
