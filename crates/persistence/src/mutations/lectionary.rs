// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use lectio_domain::LectionaryEntry;
use tracing::info;

use crate::data_models::LectionaryRow;
use crate::diesel_schema::lectionary;
use crate::error::PersistenceError;

/// Inserts or updates lectionary rows by `admin_order`.
///
/// Rows are updated in place so mappings that reference them stay valid.
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn upsert_lectionary(
    conn: &mut SqliteConnection,
    entries: &[LectionaryEntry],
) -> Result<usize, PersistenceError> {
    let written: usize = conn.transaction::<usize, PersistenceError, _>(|conn| {
        let mut written: usize = 0;
        for entry in entries {
            let row: LectionaryRow = LectionaryRow::from(entry);
            written += diesel::insert_into(lectionary::table)
                .values(&row)
                .on_conflict(lectionary::admin_order)
                .do_update()
                .set(&row)
                .execute(conn)?;
        }
        Ok(written)
    })?;

    info!(rows = written, "Stored lectionary rows");
    Ok(written)
}
