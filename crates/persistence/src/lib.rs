// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Lectio calendar engine.
//!
//! This crate stores the year-cycle reference table, the lectionary, the
//! extracted Ordo days, the calendar to lectionary mapping and schedule
//! entries in `SQLite` through Diesel.
//!
//! ## Tables
//!
//! - `liturgical_years` — one row per calendar year, replaced wholesale
//! - `lectionary` — canonical rows keyed by `admin_order`
//! - `ordo_entries` — one extracted day per calendar date
//! - `ordo_lectionary_mapping` — one mapping per calendar date, upserted on re-runs
//! - `schedule` — authored entries with their status and frozen readings
//!
//! ## Snapshots
//!
//! A schedule entry's `readings_data` is written once, by a conditional
//! update that only succeeds while the column is empty. Two concurrent
//! submits cannot both write it; the loser's update matches no row.
//!
//! ## Testing
//!
//! Every `new_in_memory()` instance is a separate shared-cache in-memory
//! database, so tests never see each other's rows.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use lectio_domain::{
    LectionaryEntry, OrdoEntry, ProcessedOrdoEntry, ScheduleEntry, ScheduleStatus,
    YearCycleEntry, YearCycleTable,
};
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use time::Date;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;
mod year_cycle_source;

#[cfg(test)]
mod tests;

pub use data_models::{MappedDay, SnapshotWrite, date_key};
pub use error::PersistenceError;
pub use year_cycle_source::SqliteYearCycleSource;

/// Persistence adapter over a single `SQLite` connection.
pub struct Persistence {
    conn: SqliteConnection,
    database_url: String,
}

impl Persistence {
    /// Creates a persistence adapter over a fresh in-memory database.
    ///
    /// The database is shared-cache, so other connections opened with
    /// [`Persistence::database_url`] see the same data while this adapter
    /// is alive.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let database_url: String = format!("file:memdb_lectio_{db_id}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&database_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn, database_url })
    }

    /// Creates a persistence adapter over a database file, creating it if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let database_url: String = path
            .as_ref()
            .to_str()
            .ok_or_else(|| PersistenceError::InvalidDatabasePath(path.as_ref().to_path_buf()))?
            .to_string();

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&database_url)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn, database_url })
    }

    /// The URL this adapter's connection was opened with.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// A year-cycle source reading from this adapter's database.
    #[must_use]
    pub fn year_cycle_source(&self) -> SqliteYearCycleSource {
        SqliteYearCycleSource::new(self.database_url.clone())
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Year cycles
    // ========================================================================

    /// Replaces the stored year-cycle table.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn replace_year_cycles(&mut self, table: &YearCycleTable) -> Result<usize, PersistenceError> {
        mutations::calendar::replace_year_cycles(&mut self.conn, table)
    }

    /// Lists the stored year-cycle rows in year order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed.
    pub fn list_year_cycles(&mut self) -> Result<Vec<YearCycleEntry>, PersistenceError> {
        queries::calendar::list_year_cycles(&mut self.conn)
    }

    /// Loads the stored year-cycle rows as a resolver table.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the rows are invalid.
    pub fn load_year_cycle_table(&mut self) -> Result<YearCycleTable, PersistenceError> {
        queries::calendar::load_year_cycle_table(&mut self.conn)
    }

    // ========================================================================
    // Lectionary
    // ========================================================================

    /// Inserts or updates lectionary rows by `admin_order`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn upsert_lectionary(&mut self, entries: &[LectionaryEntry]) -> Result<usize, PersistenceError> {
        mutations::lectionary::upsert_lectionary(&mut self.conn, entries)
    }

    /// Loads the lectionary in `admin_order`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_lectionary(&mut self) -> Result<Vec<LectionaryEntry>, PersistenceError> {
        queries::lectionary::list_lectionary(&mut self.conn)
    }

    /// Retrieves one lectionary row.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_lectionary_entry(
        &mut self,
        admin_order: i64,
    ) -> Result<Option<LectionaryEntry>, PersistenceError> {
        queries::lectionary::get_lectionary_entry(&mut self.conn, admin_order)
    }

    /// Counts the lectionary rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_lectionary(&mut self) -> Result<i64, PersistenceError> {
        queries::lectionary::count_lectionary(&mut self.conn)
    }

    // ========================================================================
    // Ordo entries
    // ========================================================================

    /// Stores extracted days, replacing earlier rows for the same dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn upsert_ordo_entries(&mut self, entries: &[OrdoEntry]) -> Result<usize, PersistenceError> {
        mutations::ordo::upsert_ordo_entries(&mut self.conn, entries)
    }

    /// Lists extracted days in an inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed.
    pub fn list_ordo_entries(
        &mut self,
        start: Date,
        end: Date,
    ) -> Result<Vec<OrdoEntry>, PersistenceError> {
        queries::ordo::list_ordo_entries(&mut self.conn, start, end)
    }

    // ========================================================================
    // Calendar to lectionary mapping
    // ========================================================================

    /// Upserts mappings by calendar date.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn upsert_mappings(
        &mut self,
        entries: &[ProcessedOrdoEntry],
    ) -> Result<usize, PersistenceError> {
        mutations::mapping::upsert_mappings(&mut self.conn, entries)
    }

    /// Loads one date's mapping with its lectionary row.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed.
    pub fn get_mapped_day(&mut self, date: Date) -> Result<Option<MappedDay>, PersistenceError> {
        queries::mapping::get_mapped_day(&mut self.conn, date)
    }

    /// Loads several dates' mappings with their lectionary rows in one query.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed.
    pub fn get_mapped_days(
        &mut self,
        dates: &BTreeSet<Date>,
    ) -> Result<Vec<MappedDay>, PersistenceError> {
        queries::mapping::get_mapped_days(&mut self.conn, dates)
    }

    /// Lists mappings in an inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed.
    pub fn list_mappings(
        &mut self,
        start: Date,
        end: Date,
    ) -> Result<Vec<ProcessedOrdoEntry>, PersistenceError> {
        queries::mapping::list_mappings(&mut self.conn, start, end)
    }

    // ========================================================================
    // Schedule
    // ========================================================================

    /// Inserts a schedule entry and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_schedule_entry(&mut self, entry: &ScheduleEntry) -> Result<i64, PersistenceError> {
        mutations::schedule::insert_schedule_entry(&mut self.conn, entry)
    }

    /// Retrieves a schedule entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the row is malformed.
    pub fn get_schedule_entry(
        &mut self,
        schedule_id: i64,
    ) -> Result<Option<ScheduleEntry>, PersistenceError> {
        queries::schedule::get_schedule_entry(&mut self.conn, schedule_id)
    }

    /// Lists schedule entries in an inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row is malformed.
    pub fn list_schedule_entries(
        &mut self,
        start: Date,
        end: Date,
    ) -> Result<Vec<ScheduleEntry>, PersistenceError> {
        queries::schedule::list_schedule_entries(&mut self.conn, start, end)
    }

    /// Sets a schedule entry's status.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleEntryNotFound` if the entry does not exist.
    pub fn update_schedule_status(
        &mut self,
        schedule_id: i64,
        status: ScheduleStatus,
    ) -> Result<(), PersistenceError> {
        mutations::schedule::update_schedule_status(&mut self.conn, schedule_id, status)
    }

    /// Writes a snapshot only if the entry has none. Returns `true` if this
    /// call wrote it.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn set_snapshot_if_empty(
        &mut self,
        schedule_id: i64,
        snapshot: &SnapshotWrite,
        observed_empty: Option<&str>,
    ) -> Result<bool, PersistenceError> {
        mutations::schedule::set_snapshot_if_empty(
            &mut self.conn,
            schedule_id,
            snapshot,
            observed_empty,
        )
    }

    /// Overwrites a snapshot unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleEntryNotFound` if the entry does not exist.
    pub fn replace_snapshot(
        &mut self,
        schedule_id: i64,
        readings_data: Option<&str>,
    ) -> Result<(), PersistenceError> {
        mutations::schedule::replace_snapshot(&mut self.conn, schedule_id, readings_data)
    }
}
