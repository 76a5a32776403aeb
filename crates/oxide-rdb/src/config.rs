//! Connection configuration.

use std::time::Duration;

use serde::Deserialize;

/// Environment variable read by [`DatabaseConfig::from_env`].
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// Settings used to open a SQLite connection.
///
/// Every field has a default, so a partial TOML/JSON document deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite URL, e.g. `sqlite:blog.db` or `sqlite::memory:`.
    pub url: String,
    /// Create the database file if it does not exist.
    pub create_if_missing: bool,
    /// Enforce foreign key constraints.
    pub foreign_keys: bool,
    /// How long to wait on a locked database, in milliseconds.
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::from("sqlite::memory:"),
            create_if_missing: true,
            foreign_keys: true,
            busy_timeout_ms: 5_000,
        }
    }
}

impl DatabaseConfig {
    /// Defaults, with `url` taken from `DATABASE_URL` when set.
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(DATABASE_URL_ENV) {
            Ok(url) if !url.is_empty() => config.with_url(url),
            _ => config,
        }
    }

    /// Replaces the URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Busy timeout as a `Duration`.
    #[must_use]
    pub const fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }
}
