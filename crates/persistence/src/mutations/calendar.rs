// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use lectio_domain::YearCycleTable;
use tracing::info;

use crate::data_models::YearCycleRow;
use crate::diesel_schema::liturgical_years;
use crate::error::PersistenceError;

/// Replaces the stored year-cycle table with `table`.
///
/// The table is reference data that is only ever replaced wholesale, so
/// the old rows are deleted first.
///
/// # Errors
///
/// Returns an error if the transaction fails.
pub fn replace_year_cycles(
    conn: &mut SqliteConnection,
    table: &YearCycleTable,
) -> Result<usize, PersistenceError> {
    let rows: Vec<YearCycleRow> = table.entries().map(YearCycleRow::from).collect();

    let inserted: usize = conn.transaction::<usize, PersistenceError, _>(|conn| {
        diesel::delete(liturgical_years::table).execute(conn)?;
        let mut inserted: usize = 0;
        for row in &rows {
            inserted += diesel::insert_into(liturgical_years::table)
                .values(row)
                .execute(conn)?;
        }
        Ok(inserted)
    })?;

    info!(years = inserted, "Replaced year-cycle table");
    Ok(inserted)
}
