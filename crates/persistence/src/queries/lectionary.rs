// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use lectio_domain::LectionaryEntry;

use crate::data_models::LectionaryRow;
use crate::diesel_schema::lectionary;
use crate::error::PersistenceError;

/// Loads the whole lectionary in `admin_order`.
///
/// Row order matters to the matching engine, which takes the first
/// acceptable candidate.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_lectionary(conn: &mut SqliteConnection) -> Result<Vec<LectionaryEntry>, PersistenceError> {
    let rows: Vec<LectionaryRow> = lectionary::table
        .order(lectionary::admin_order.asc())
        .select(LectionaryRow::as_select())
        .load(conn)
        .map_err(|e| PersistenceError::Query(format!("list_lectionary: {e}")))?;
    Ok(rows.into_iter().map(LectionaryEntry::from).collect())
}

/// Retrieves one lectionary row by its `admin_order`.
///
/// # Errors
///
/// Returns an error if the query fails.
/// Returns `Ok(None)` if no such row exists.
pub fn get_lectionary_entry(
    conn: &mut SqliteConnection,
    admin_order: i64,
) -> Result<Option<LectionaryEntry>, PersistenceError> {
    lectionary::table
        .filter(lectionary::admin_order.eq(admin_order))
        .select(LectionaryRow::as_select())
        .first::<LectionaryRow>(conn)
        .optional()
        .map(|row| row.map(LectionaryEntry::from))
        .map_err(|e| PersistenceError::Query(format!("get_lectionary_entry: {e}")))
}

/// Counts the lectionary rows.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn count_lectionary(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    lectionary::table
        .count()
        .get_result::<i64>(conn)
        .map_err(|e| PersistenceError::Query(format!("count_lectionary: {e}")))
}
