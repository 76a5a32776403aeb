//! SQLite driver on top of sqlx.

use std::str::FromStr;

use oxide_rdb_core::{Row, SqlValue};
use sqlx::query::Query;
use sqlx::sqlite::{
    SqliteArguments, SqliteConnectOptions, SqliteConnection, SqliteQueryResult, SqliteRow,
};
use sqlx::{Column, ConnectOptions, Connection, Row as _, Sqlite, TypeInfo, ValueRef};
use tokio::runtime::{Builder, Runtime};
use tracing::info;

use super::{Driver, ExecOutcome};
use crate::config::DatabaseConfig;
use crate::error::Result;

/// A single SQLite connection driven synchronously.
///
/// sqlx is async, so the driver owns a current-thread tokio runtime and blocks
/// on every call. Do not use it from inside another tokio runtime: `block_on`
/// panics there.
pub struct SqliteDriver {
    runtime: Runtime,
    conn: SqliteConnection,
}

impl SqliteDriver {
    /// Opens a connection as described by `config`.
    pub fn connect(config: &DatabaseConfig) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(config.create_if_missing)
            .foreign_keys(config.foreign_keys)
            .busy_timeout(config.busy_timeout())
            .disable_statement_logging();

        let conn = runtime.block_on(options.connect())?;
        info!(url = %config.url, "opened sqlite connection");

        Ok(Self { runtime, conn })
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Self::connect(&DatabaseConfig::default())
    }

    /// Closes the connection, flushing any pending work.
    pub fn close(self) -> Result<()> {
        let Self { runtime, conn } = self;
        runtime.block_on(conn.close())?;
        Ok(())
    }

    fn run(&mut self, sql: &str, params: &[SqlValue]) -> Result<SqliteQueryResult> {
        let query = params.iter().fold(sqlx::query(sql), bind_param);
        Ok(self.runtime.block_on(query.execute(&mut self.conn))?)
    }

    /// Returns true if `table` stores rowids. `WITHOUT ROWID` tables, views
    /// and unknown names return false.
    fn has_rowid(&mut self, table: &str) -> Result<bool> {
        let (schema, name) = match table.split_once('.') {
            Some((schema, name)) => (Some(unquote(schema)), unquote(name)),
            None => (None, unquote(table)),
        };
        let without_rowid = self.runtime.block_on(
            sqlx::query_scalar::<_, i64>(
                "SELECT wr FROM pragma_table_list \
                 WHERE type = 'table' AND name = ?1 COLLATE NOCASE \
                 AND schema = coalesce(?2, schema) COLLATE NOCASE",
            )
            .bind(name)
            .bind(schema)
            .fetch_optional(&mut self.conn),
        )?;
        Ok(without_rowid == Some(0))
    }

    fn run_control(&mut self, sql: &'static str) -> Result<()> {
        self.runtime
            .block_on(sqlx::query(sql).execute(&mut self.conn))?;
        Ok(())
    }
}

impl std::fmt::Debug for SqliteDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteDriver").finish_non_exhaustive()
    }
}

impl Driver for SqliteDriver {
    fn execute(&mut self, sql: &str, params: &[SqlValue]) -> Result<ExecOutcome> {
        let result = self.run(sql, params)?;
        Ok(ExecOutcome {
            rows_affected: result.rows_affected(),
            last_insert_id: None,
        })
    }

    fn insert(&mut self, table: &str, sql: &str, params: &[SqlValue]) -> Result<ExecOutcome> {
        let result = self.run(sql, params)?;
        let rows_affected = result.rows_affected();

        // last_insert_rowid() is connection-wide: it only belongs to this
        // statement if a row went into a table that has rowids.
        let last_insert_id = if rows_affected > 0 && self.has_rowid(table)? {
            Some(result.last_insert_rowid())
        } else {
            None
        };

        Ok(ExecOutcome {
            rows_affected,
            last_insert_id,
        })
    }

    fn query(&mut self, sql: &str, params: &[SqlValue]) -> Result<Vec<Row>> {
        let query = params.iter().fold(sqlx::query(sql), bind_param);
        let rows = self.runtime.block_on(query.fetch_all(&mut self.conn))?;
        rows.iter().map(decode_row).collect()
    }

    fn begin(&mut self) -> Result<()> {
        self.run_control("BEGIN")
    }

    fn commit(&mut self) -> Result<()> {
        self.run_control("COMMIT")
    }

    fn rollback(&mut self) -> Result<()> {
        self.run_control("ROLLBACK")
    }
}

/// Binds a SqlValue parameter to a query.
fn bind_param<'q>(
    query: Query<'q, Sqlite, SqliteArguments<'q>>,
    value: &SqlValue,
) -> Query<'q, Sqlite, SqliteArguments<'q>> {
    match value {
        SqlValue::Null => query.bind(Option::<i64>::None),
        SqlValue::Bool(b) => query.bind(*b),
        SqlValue::Int(i) => query.bind(*i),
        SqlValue::Float(f) => query.bind(*f),
        SqlValue::Text(s) => query.bind(s.clone()),
        SqlValue::Blob(b) => query.bind(b.clone()),
    }
}

fn unquote(ident: &str) -> &str {
    ident.trim().trim_matches(|c| matches!(c, '"' | '`' | '[' | ']'))
}

/// Converts a sqlx row using the storage class of each value, not the
/// declared column type: SQLite lets any column hold any class.
fn decode_row(row: &SqliteRow) -> Result<Row> {
    let mut decoded = Row::with_capacity(row.len());
    for column in row.columns() {
        let index = column.ordinal();
        let raw = row.try_get_raw(index)?;
        let value = if raw.is_null() {
            SqlValue::Null
        } else {
            let type_info = raw.type_info();
            match type_info.name() {
                "INTEGER" | "BOOLEAN" => SqlValue::Int(row.try_get_unchecked::<i64, _>(index)?),
                "REAL" => SqlValue::Float(row.try_get_unchecked::<f64, _>(index)?),
                "BLOB" => SqlValue::Blob(row.try_get_unchecked::<Vec<u8>, _>(index)?),
                _ => SqlValue::Text(row.try_get_unchecked::<String, _>(index)?),
            }
        };
        decoded.push(column.name(), value);
    }
    Ok(decoded)
}
