// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::PathBuf;

/// Storage failures raised by [`crate::Persistence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The database could not be opened.
    Connection(String),
    /// The embedded schema migrations did not apply.
    Migration(String),
    /// `PRAGMA foreign_keys` reads back as off after being enabled.
    ForeignKeysDisabled,
    /// A database file path that is not valid UTF-8.
    InvalidDatabasePath(PathBuf),
    /// A statement failed.
    Query(String),
    /// A stored row could not be turned back into a domain value.
    CorruptRow {
        /// The table the row came from.
        table: &'static str,
        /// Why the row was rejected.
        reason: String,
    },
    /// No schedule entry has this id.
    ScheduleEntryNotFound(i64),
}

impl PersistenceError {
    pub(crate) fn corrupt(table: &'static str, reason: impl std::fmt::Display) -> Self {
        Self::CorruptRow {
            table,
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connection(msg) => write!(f, "Cannot open database: {msg}"),
            Self::Migration(msg) => write!(f, "Schema migration failed: {msg}"),
            Self::ForeignKeysDisabled => {
                write!(f, "SQLite foreign key enforcement could not be enabled")
            }
            Self::InvalidDatabasePath(path) => {
                write!(f, "Database path is not valid UTF-8: {}", path.display())
            }
            Self::Query(msg) => write!(f, "Query failed: {msg}"),
            Self::CorruptRow { table, reason } => {
                write!(f, "Invalid row in {table}: {reason}")
            }
            Self::ScheduleEntryNotFound(id) => write!(f, "Schedule entry not found: {id}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        Self::Query(err.to_string())
    }
}
