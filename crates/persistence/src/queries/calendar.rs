// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use lectio_domain::{YearCycleEntry, YearCycleTable};

use crate::data_models::YearCycleRow;
use crate::diesel_schema::liturgical_years;
use crate::error::PersistenceError;

/// Loads the stored year-cycle rows in year order.
///
/// # Errors
///
/// Returns an error if the query fails or a row is not a valid year-cycle row.
pub fn list_year_cycles(conn: &mut SqliteConnection) -> Result<Vec<YearCycleEntry>, PersistenceError> {
    liturgical_years::table
        .order(liturgical_years::year.asc())
        .select(YearCycleRow::as_select())
        .load::<YearCycleRow>(conn)
        .map_err(|e| PersistenceError::Query(format!("list_year_cycles: {e}")))?
        .into_iter()
        .map(YearCycleEntry::try_from)
        .collect()
}

/// Loads the stored year-cycle rows as a resolver table.
///
/// # Errors
///
/// Returns an error if the query fails or the rows do not form a valid table.
pub fn load_year_cycle_table(
    conn: &mut SqliteConnection,
) -> Result<YearCycleTable, PersistenceError> {
    let entries: Vec<YearCycleEntry> = list_year_cycles(conn)?;
    YearCycleTable::from_entries(entries)
        .map_err(|e| PersistenceError::corrupt("liturgical_years", e))
}
