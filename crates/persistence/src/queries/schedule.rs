// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use lectio_domain::ScheduleEntry;
use time::Date;

use crate::data_models::{ScheduleRow, date_key};
use crate::diesel_schema::schedule;
use crate::error::PersistenceError;

/// Retrieves a schedule entry by id.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is malformed.
/// Returns `Ok(None)` if the entry does not exist.
pub fn get_schedule_entry(
    conn: &mut SqliteConnection,
    schedule_id: i64,
) -> Result<Option<ScheduleEntry>, PersistenceError> {
    schedule::table
        .filter(schedule::schedule_id.eq(schedule_id))
        .select(ScheduleRow::as_select())
        .first::<ScheduleRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::Query(format!("get_schedule_entry: {e}")))?
        .map(ScheduleEntry::try_from)
        .transpose()
}

/// Lists the schedule entries dated between `start` and `end` inclusive.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn list_schedule_entries(
    conn: &mut SqliteConnection,
    start: Date,
    end: Date,
) -> Result<Vec<ScheduleEntry>, PersistenceError> {
    schedule::table
        .filter(schedule::calendar_date.between(date_key(start), date_key(end)))
        .order((schedule::calendar_date.asc(), schedule::schedule_id.asc()))
        .select(ScheduleRow::as_select())
        .load::<ScheduleRow>(conn)
        .map_err(|e| PersistenceError::Query(format!("list_schedule_entries: {e}")))?
        .into_iter()
        .map(ScheduleEntry::try_from)
        .collect()
}
