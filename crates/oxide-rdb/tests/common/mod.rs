#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use oxide_rdb::{Database, Driver, Error, ExecOutcome, Result, Row, SqlValue};

pub const CREATE_POSTS: &str = "CREATE TABLE posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title STRING,
    description STRING
)";

/// An in-memory database holding an empty `posts` table.
pub fn posts_db() -> Database {
    let db = Database::open_in_memory().expect("Failed to open in-memory SQLite");
    db.execute_sql(CREATE_POSTS).expect("Failed to create posts");
    db
}

pub fn post(title: &str, description: &str) -> [(&'static str, String); 2] {
    [
        ("title", title.to_string()),
        ("description", description.to_string()),
    ]
}

/// Inserts a post and returns its id.
pub fn insert_post(db: &Database, title: &str, description: &str) -> i64 {
    db.insert("posts", post(title, description))
        .execute()
        .expect("insert failed")
        .last_insert_id()
        .expect("no id generated")
}

pub fn text(row: &Row, column: &str) -> String {
    row.try_get(column)
        .unwrap_or_else(|e| panic!("column {column}: {e}"))
}

/// Driver that records every call and answers with canned values.
#[derive(Debug, Clone, Default)]
pub struct RecordingDriver {
    pub calls: Rc<RefCell<Vec<String>>>,
    /// Makes COMMIT fail after being recorded.
    pub fail_commit: bool,
}

impl RecordingDriver {
    pub fn failing_commit() -> Self {
        Self {
            fail_commit: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.borrow_mut().push(call.into());
    }
}

impl Driver for RecordingDriver {
    fn execute(&mut self, sql: &str, _params: &[SqlValue]) -> Result<ExecOutcome> {
        self.record(sql);
        Ok(ExecOutcome {
            rows_affected: 1,
            last_insert_id: None,
        })
    }

    fn insert(&mut self, _table: &str, sql: &str, _params: &[SqlValue]) -> Result<ExecOutcome> {
        self.record(sql);
        Ok(ExecOutcome {
            rows_affected: 1,
            last_insert_id: Some(1),
        })
    }

    fn query(&mut self, sql: &str, _params: &[SqlValue]) -> Result<Vec<Row>> {
        self.record(sql);
        Ok(Vec::new())
    }

    fn begin(&mut self) -> Result<()> {
        self.record("BEGIN");
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.record("COMMIT");
        if self.fail_commit {
            return Err(Error::NoInsertId);
        }
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        self.record("ROLLBACK");
        Ok(())
    }
}
