//! Error types for executing statements.

use oxide_rdb_core::{BuildError, DecodeError};
use thiserror::Error;

/// Errors raised by the database facade, its statements and results.
#[derive(Debug, Error)]
pub enum Error {
    /// The statement failed local validation and was never sent.
    #[error("invalid statement: {0}")]
    Build(#[from] BuildError),

    /// A fetched row could not be decoded into the requested type.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error reported by the database driver, passed through unmodified.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The blocking runtime driving the connection could not be started.
    #[error("runtime error: {0}")]
    Runtime(#[from] std::io::Error),

    /// The driver reported no auto-generated row id for an INSERT.
    #[error("no auto-increment id was generated by this insert")]
    NoInsertId,
}

impl Error {
    /// Returns true for errors raised before contacting the driver.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Build(_))
    }

    /// Returns true for errors that originated in the driver.
    #[must_use]
    pub const fn is_driver(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}

/// Result type alias for database operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let build: Error = BuildError::MissingWhere {
            statement: "DELETE",
        }
        .into();
        assert!(build.is_validation());
        assert!(!build.is_driver());

        let driver: Error = sqlx::Error::RowNotFound.into();
        assert!(driver.is_driver());
        assert!(!driver.is_validation());
    }

    #[test]
    fn test_error_messages() {
        let err: Error = BuildError::EmptyTable { statement: "INSERT" }.into();
        assert_eq!(
            err.to_string(),
            "invalid statement: INSERT statement has an empty table name"
        );
        assert_eq!(
            Error::NoInsertId.to_string(),
            "no auto-increment id was generated by this insert"
        );
    }
}
