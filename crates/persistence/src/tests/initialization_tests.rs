// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend initialization tests.
//!
//! Connection setup, migrations and foreign key enforcement are also
//! exercised implicitly by every other test in this crate.

use super::{create_test_lectionary_entry, create_test_persistence};
use crate::{Persistence, PersistenceError};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_enabled() {
    let mut persistence: Persistence = create_test_persistence();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = create_test_persistence();
    let mut db2: Persistence = create_test_persistence();

    db1.upsert_lectionary(&[create_test_lectionary_entry(1, "Fourth Sunday of Lent", "Jn 9:1-41")])
        .unwrap();

    assert_eq!(db1.count_lectionary().unwrap(), 1);
    assert_eq!(db2.count_lectionary().unwrap(), 0, "db2 must not see db1's rows");
    assert_ne!(db1.database_url(), db2.database_url());
}

#[test]
fn test_migrations_applied_on_initialization() {
    let mut persistence: Persistence = create_test_persistence();

    assert!(persistence.list_year_cycles().is_ok());
    assert!(persistence.list_lectionary().is_ok());
}

#[test]
fn test_file_database_persists_between_connections() {
    let path: std::path::PathBuf = std::env::temp_dir().join(format!(
        "lectio_persistence_test_{}.sqlite",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut persistence: Persistence = Persistence::new_with_file(&path).unwrap();
        persistence
            .upsert_lectionary(&[create_test_lectionary_entry(7, "Palm Sunday", "Mt 26:14-27:66")])
            .unwrap();
    }

    let mut reopened: Persistence = Persistence::new_with_file(&path).unwrap();
    let entry = reopened.get_lectionary_entry(7).unwrap();
    assert_eq!(entry.map(|e| e.liturgical_day), Some(String::from("Palm Sunday")));

    drop(reopened);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_missing_directory_is_a_connection_error() {
    let path: std::path::PathBuf = std::env::temp_dir()
        .join(format!("lectio_missing_dir_{}", std::process::id()))
        .join("calendar.sqlite");

    let result: Result<Persistence, PersistenceError> = Persistence::new_with_file(&path);

    assert!(matches!(result, Err(PersistenceError::Connection(_))));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_path_is_rejected() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let path: &std::path::Path = std::path::Path::new(OsStr::from_bytes(b"lectio_\xff.sqlite"));

    let result: Result<Persistence, PersistenceError> = Persistence::new_with_file(path);

    assert_eq!(
        result.err(),
        Some(PersistenceError::InvalidDatabasePath(path.to_path_buf()))
    );
}
