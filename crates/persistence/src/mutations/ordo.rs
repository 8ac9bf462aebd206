// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use lectio_domain::OrdoEntry;
use tracing::info;

use crate::data_models::OrdoEntryRow;
use crate::diesel_schema::ordo_entries;
use crate::error::PersistenceError;

/// Stores extracted days, replacing any earlier extraction of the same dates.
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn upsert_ordo_entries(
    conn: &mut SqliteConnection,
    entries: &[OrdoEntry],
) -> Result<usize, PersistenceError> {
    let written: usize = conn.transaction::<usize, PersistenceError, _>(|conn| {
        let mut written: usize = 0;
        for entry in entries {
            let row: OrdoEntryRow = OrdoEntryRow::from(entry);
            written += diesel::insert_into(ordo_entries::table)
                .values(&row)
                .on_conflict(ordo_entries::calendar_date)
                .do_update()
                .set(&row)
                .execute(conn)?;
        }
        Ok(written)
    })?;

    info!(days = written, "Stored Ordo entries");
    Ok(written)
}
