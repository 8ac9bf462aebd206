// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lectio::{CoreError, YearCycleSource};
use lectio_domain::YearCycleTable;
use tracing::debug;

use crate::backend::sqlite::initialize_database;
use crate::error::PersistenceError;
use crate::queries;

/// Reads the year-cycle table from the `liturgical_years` table.
///
/// Each load opens its own connection, so the source can sit inside a
/// long-lived `YearCycleCache` independently of any `Persistence` handle.
#[derive(Debug, Clone)]
pub struct SqliteYearCycleSource {
    database_url: String,
}

impl SqliteYearCycleSource {
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    fn load_table(&self) -> Result<YearCycleTable, PersistenceError> {
        let mut conn = initialize_database(&self.database_url)?;
        queries::calendar::load_year_cycle_table(&mut conn)
    }
}

impl YearCycleSource for SqliteYearCycleSource {
    fn load(&self) -> Result<YearCycleTable, CoreError> {
        let table: YearCycleTable = self
            .load_table()
            .map_err(|e| CoreError::YearCycleSource(e.to_string()))?;
        debug!(years = table.len(), "Loaded year-cycle table from database");
        Ok(table)
    }
}
