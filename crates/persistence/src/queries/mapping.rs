// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar to lectionary mapping queries.
//!
//! The joined queries return each mapping with the lectionary row it
//! points at, so a multi-date view costs one round trip however many
//! dates it shows.

use diesel::SqliteConnection;
use diesel::prelude::*;
use lectio_domain::{LectionaryEntry, ProcessedOrdoEntry};
use std::collections::BTreeSet;
use time::Date;
use tracing::debug;

use crate::data_models::{LectionaryRow, MappedDay, MappingRow, date_key};
use crate::diesel_schema::{lectionary, ordo_lectionary_mapping};
use crate::error::PersistenceError;

fn mapped_day(
    (mapping, row): (MappingRow, Option<LectionaryRow>),
) -> Result<MappedDay, PersistenceError> {
    Ok(MappedDay {
        entry: ProcessedOrdoEntry::try_from(mapping)?,
        lectionary: row.map(LectionaryEntry::from),
    })
}

/// Loads the mapping for one date with its lectionary row.
///
/// # Errors
///
/// Returns an error if the query fails or the stored row is malformed.
/// Returns `Ok(None)` if the date has not been mapped.
pub fn get_mapped_day(
    conn: &mut SqliteConnection,
    date: Date,
) -> Result<Option<MappedDay>, PersistenceError> {
    ordo_lectionary_mapping::table
        .left_join(lectionary::table)
        .filter(ordo_lectionary_mapping::calendar_date.eq(date_key(date)))
        .select((MappingRow::as_select(), Option::<LectionaryRow>::as_select()))
        .first::<(MappingRow, Option<LectionaryRow>)>(conn)
        .optional()
        .map_err(|e| PersistenceError::Query(format!("get_mapped_day: {e}")))?
        .map(mapped_day)
        .transpose()
}

/// Loads the mappings for a set of dates with their lectionary rows in a
/// single query. Dates without a mapping are simply absent from the result.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn get_mapped_days(
    conn: &mut SqliteConnection,
    dates: &BTreeSet<Date>,
) -> Result<Vec<MappedDay>, PersistenceError> {
    if dates.is_empty() {
        return Ok(Vec::new());
    }
    let keys: Vec<String> = dates.iter().copied().map(date_key).collect();
    debug!(dates = keys.len(), "Loading mapped days");

    ordo_lectionary_mapping::table
        .left_join(lectionary::table)
        .filter(ordo_lectionary_mapping::calendar_date.eq_any(keys))
        .order(ordo_lectionary_mapping::calendar_date.asc())
        .select((MappingRow::as_select(), Option::<LectionaryRow>::as_select()))
        .load::<(MappingRow, Option<LectionaryRow>)>(conn)
        .map_err(|e| PersistenceError::Query(format!("get_mapped_days: {e}")))?
        .into_iter()
        .map(mapped_day)
        .collect()
}

/// Loads the mappings between `start` and `end` inclusive, in date order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn list_mappings(
    conn: &mut SqliteConnection,
    start: Date,
    end: Date,
) -> Result<Vec<ProcessedOrdoEntry>, PersistenceError> {
    ordo_lectionary_mapping::table
        .filter(ordo_lectionary_mapping::calendar_date.between(date_key(start), date_key(end)))
        .order(ordo_lectionary_mapping::calendar_date.asc())
        .select(MappingRow::as_select())
        .load::<MappingRow>(conn)
        .map_err(|e| PersistenceError::Query(format!("list_mappings: {e}")))?
        .into_iter()
        .map(ProcessedOrdoEntry::try_from)
        .collect()
}
