// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use lectio_domain::ProcessedOrdoEntry;
use tracing::info;

use crate::data_models::MappingRow;
use crate::diesel_schema::ordo_lectionary_mapping;
use crate::error::PersistenceError;

/// Upserts the calendar to lectionary mapping by calendar date.
///
/// A corrective re-run replaces each date's row; it never appends a second
/// mapping for the same day.
///
/// # Errors
///
/// Returns an error if the transaction fails, including when a mapping
/// names a lectionary row that does not exist.
pub fn upsert_mappings(
    conn: &mut SqliteConnection,
    entries: &[ProcessedOrdoEntry],
) -> Result<usize, PersistenceError> {
    let written: usize = conn.transaction::<usize, PersistenceError, _>(|conn| {
        let mut written: usize = 0;
        for entry in entries {
            let row: MappingRow = MappingRow::from(entry);
            written += diesel::insert_into(ordo_lectionary_mapping::table)
                .values(&row)
                .on_conflict(ordo_lectionary_mapping::calendar_date)
                .do_update()
                .set(&row)
                .execute(conn)?;
        }
        Ok(written)
    })?;

    info!(days = written, "Stored calendar to lectionary mapping");
    Ok(written)
}
