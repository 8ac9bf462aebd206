// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use lectio_domain::OrdoEntry;
use time::Date;

use crate::data_models::{OrdoEntryRow, date_key};
use crate::diesel_schema::ordo_entries;
use crate::error::PersistenceError;

/// Loads the extracted days between `start` and `end` inclusive, in date order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn list_ordo_entries(
    conn: &mut SqliteConnection,
    start: Date,
    end: Date,
) -> Result<Vec<OrdoEntry>, PersistenceError> {
    ordo_entries::table
        .filter(ordo_entries::calendar_date.between(date_key(start), date_key(end)))
        .order(ordo_entries::calendar_date.asc())
        .select(OrdoEntryRow::as_select())
        .load::<OrdoEntryRow>(conn)
        .map_err(|e| PersistenceError::Query(format!("list_ordo_entries: {e}")))?
        .into_iter()
        .map(OrdoEntry::try_from)
        .collect()
}
