//! Statements that fail validation never reach the driver.

mod common;

use common::RecordingDriver;
use oxide_rdb::prelude::*;
use oxide_rdb::{BuildError, Error};

fn recording_db() -> (Database<RecordingDriver>, RecordingDriver) {
    let driver = RecordingDriver::default();
    (Database::new(driver.clone()), driver)
}

fn build_error(err: Error) -> BuildError {
    match err {
        Error::Build(e) => e,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn update_without_where_is_refused() {
    let (db, driver) = recording_db();
    let err = db
        .update("posts", [("title", "x")], ColumnValues::new())
        .execute()
        .unwrap_err();

    assert_eq!(
        build_error(err),
        BuildError::MissingWhere {
            statement: "UPDATE"
        }
    );
    assert!(driver.calls().is_empty());
}

#[test]
fn delete_without_where_is_refused() {
    let (db, driver) = recording_db();
    let err = db.delete("posts", ColumnValues::new()).execute().unwrap_err();

    assert_eq!(
        build_error(err),
        BuildError::MissingWhere {
            statement: "DELETE"
        }
    );
    assert!(driver.calls().is_empty());
}

#[test]
fn insert_without_values_is_refused() {
    let (db, driver) = recording_db();
    let err = db.insert("posts", ColumnValues::new()).execute().unwrap_err();

    assert!(err.is_validation());
    assert!(driver.calls().is_empty());
}

#[test]
fn empty_table_is_refused() {
    let (db, driver) = recording_db();
    let err = db.select("", &[]).execute().unwrap_err();

    assert_eq!(build_error(err), BuildError::EmptyTable { statement: "SELECT" });
    assert!(driver.calls().is_empty());
}

#[test]
fn unsupported_operator_is_refused() {
    let (db, driver) = recording_db();
    let err = db
        .select("posts", &[])
        .and_where("id", "===", 1)
        .execute()
        .unwrap_err();

    assert_eq!(
        build_error(err),
        BuildError::UnsupportedOperator(String::from("==="))
    );
    assert!(driver.calls().is_empty());
}

#[test]
fn empty_in_list_is_refused() {
    let (db, driver) = recording_db();
    let err = db
        .delete("posts", [("title", "x")])
        .where_in("id", Vec::<i64>::new())
        .execute()
        .unwrap_err();

    assert!(matches!(build_error(err), BuildError::EmptyInList(_)));
    assert!(driver.calls().is_empty());
}

#[test]
fn valid_statements_reach_the_driver_once_each() {
    let (db, driver) = recording_db();

    db.transaction(|db| {
        db.insert("posts", [("title", "a")]).execute()?;
        db.update("posts", [("title", "b")], [("id", 1)]).execute()?;
        db.select("posts", &["title"])
            .and_where("id", "=", 1)
            .execute()?;
        db.delete("posts", [("id", 1)]).execute()?;
        Ok(())
    })
    .unwrap();

    assert_eq!(
        driver.calls(),
        vec![
            "BEGIN",
            "INSERT INTO posts (title) VALUES (?)",
            "UPDATE posts SET title = ? WHERE id = ?",
            "SELECT title FROM posts WHERE id = ?",
            "DELETE FROM posts WHERE id = ?",
            "COMMIT",
        ]
    );
}

#[test]
fn failed_transaction_body_rolls_back() {
    let (db, driver) = recording_db();

    let err = db
        .transaction(|db| {
            db.insert("posts", [("title", "a")]).execute()?;
            db.update("posts", [("title", "b")], ColumnValues::new())
                .execute()?;
            Ok(())
        })
        .unwrap_err();

    assert!(err.is_validation());
    assert_eq!(
        driver.calls(),
        vec!["BEGIN", "INSERT INTO posts (title) VALUES (?)", "ROLLBACK"]
    );
}

#[test]
fn failed_commit_rolls_back() {
    let driver = RecordingDriver::failing_commit();
    let db = Database::new(driver.clone());

    let err = db
        .transaction(|db| {
            db.insert("posts", [("title", "a")]).execute()?;
            Ok(())
        })
        .unwrap_err();

    assert!(matches!(err, Error::NoInsertId));
    assert_eq!(
        driver.calls(),
        vec![
            "BEGIN",
            "INSERT INTO posts (title) VALUES (?)",
            "COMMIT",
            "ROLLBACK"
        ]
    );
}
