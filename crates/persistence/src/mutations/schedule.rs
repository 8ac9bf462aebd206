// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule entry writes, including the conditional snapshot update.

use diesel::SqliteConnection;
use diesel::dsl::sql;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use lectio_domain::{ScheduleEntry, ScheduleStatus};
use tracing::debug;

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{NewScheduleRow, SnapshotWrite};
use crate::diesel_schema::schedule;
use crate::error::PersistenceError;

/// The SQL test for a snapshot column that holds nothing.
const BLANK_SNAPSHOT: &str = "(readings_data IS NULL OR trim(readings_data) IN ('', '{}'))";

/// Inserts a schedule entry and returns its id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_schedule_entry(
    conn: &mut SqliteConnection,
    entry: &ScheduleEntry,
) -> Result<i64, PersistenceError> {
    let row: NewScheduleRow = NewScheduleRow::from(entry);
    diesel::insert_into(schedule::table)
        .values(&row)
        .execute(conn)
        .map_err(|e| PersistenceError::Query(format!("insert_schedule_entry: {e}")))?;
    let schedule_id: i64 = get_last_insert_rowid(conn)?;
    debug!(schedule_id, date = %entry.date, "Inserted schedule entry");
    Ok(schedule_id)
}

/// Sets the status of a schedule entry. Transition rules are the caller's
/// concern.
///
/// # Errors
///
/// Returns `ScheduleEntryNotFound` if no row was updated.
pub fn update_schedule_status(
    conn: &mut SqliteConnection,
    schedule_id: i64,
    status: ScheduleStatus,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(schedule::table.filter(schedule::schedule_id.eq(schedule_id)))
        .set(schedule::status.eq(status.as_str()))
        .execute(conn)
        .map_err(|e| PersistenceError::Query(format!("update_schedule_status: {e}")))?;
    if updated == 0 {
        return Err(PersistenceError::ScheduleEntryNotFound(schedule_id));
    }
    Ok(())
}

/// Writes a snapshot only if the entry has none.
///
/// The emptiness test runs inside the `UPDATE` itself, so of two concurrent
/// callers exactly one can win. A column that is NULL, blank or `{}` is
/// empty. A caller that has parsed a stored value and found it structurally
/// empty passes that exact value as `observed_empty`; the update then also
/// accepts a column still holding it, which is a compare-and-set on the
/// value the caller saw.
///
/// Returns `true` if this call wrote the snapshot.
///
/// # Errors
///
/// Returns an error if the update fails.
pub fn set_snapshot_if_empty(
    conn: &mut SqliteConnection,
    schedule_id: i64,
    snapshot: &SnapshotWrite,
    observed_empty: Option<&str>,
) -> Result<bool, PersistenceError> {
    let columns = (
        schedule::readings_data.eq(Some(snapshot.readings_data.as_str())),
        schedule::liturgical_date.eq(snapshot.liturgical_date.as_deref()),
        schedule::gospel_reference.eq(snapshot.gospel_reference.as_deref()),
    );
    let target = schedule::table.filter(schedule::schedule_id.eq(schedule_id));

    let updated: usize = match observed_empty {
        Some(observed) => diesel::update(
            target.filter(sql::<Bool>(BLANK_SNAPSHOT).or(schedule::readings_data.eq(observed))),
        )
        .set(columns)
        .execute(conn),
        None => diesel::update(target.filter(sql::<Bool>(BLANK_SNAPSHOT)))
            .set(columns)
            .execute(conn),
    }
    .map_err(|e| PersistenceError::Query(format!("set_snapshot_if_empty: {e}")))?;

    debug!(schedule_id, written = updated > 0, "Conditional snapshot write");
    Ok(updated > 0)
}

/// Overwrites the snapshot unconditionally, as an editor correcting it by
/// hand would.
///
/// # Errors
///
/// Returns `ScheduleEntryNotFound` if no row was updated.
pub fn replace_snapshot(
    conn: &mut SqliteConnection,
    schedule_id: i64,
    readings_data: Option<&str>,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(schedule::table.filter(schedule::schedule_id.eq(schedule_id)))
        .set(schedule::readings_data.eq(readings_data))
        .execute(conn)
        .map_err(|e| PersistenceError::Query(format!("replace_snapshot: {e}")))?;
    if updated == 0 {
        return Err(PersistenceError::ScheduleEntryNotFound(schedule_id));
    }
    Ok(())
}
