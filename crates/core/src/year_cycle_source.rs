// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Where the year-cycle table comes from.
//!
//! The pipeline never reads year cycles from an ambient global. A
//! [`YearCycleSource`] is injected, and a [`YearCycleCache`] loads it lazily
//! once and serves every lookup from memory until invalidated.

use crate::error::CoreError;
use lectio_domain::{SundayCycle, WeekdayCycle, YearCycleEntry, YearCycleTable, YearCycles};
use serde::Deserialize;
use std::io::Read;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};
use time::{Date, Month};
use tracing::{debug, info};

/// Loads a complete year-cycle table.
pub trait YearCycleSource {
    /// Loads every row the source holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or a row is invalid.
    fn load(&self) -> Result<YearCycleTable, CoreError>;
}

/// A source holding a table already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticYearCycleSource {
    table: YearCycleTable,
}

impl StaticYearCycleSource {
    #[must_use]
    pub const fn new(table: YearCycleTable) -> Self {
        Self { table }
    }
}

impl YearCycleSource for StaticYearCycleSource {
    fn load(&self) -> Result<YearCycleTable, CoreError> {
        Ok(self.table.clone())
    }
}

/// A source reading a CSV file with the columns `year`, `sunday_cycle`,
/// `weekday_cycle` and `first_sunday_of_advent`. Extra columns are ignored.
#[derive(Debug, Clone)]
pub struct CsvYearCycleSource {
    path: PathBuf,
}

impl CsvYearCycleSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl YearCycleSource for CsvYearCycleSource {
    fn load(&self) -> Result<YearCycleTable, CoreError> {
        let file: std::fs::File = std::fs::File::open(&self.path).map_err(|e| {
            CoreError::YearCycleSource(format!("{}: {e}", self.path.display()))
        })?;
        parse_year_cycle_csv(file)
    }
}

#[derive(Debug, Deserialize)]
struct YearCycleRow {
    year: i32,
    sunday_cycle: String,
    weekday_cycle: String,
    first_sunday_of_advent: String,
}

/// Parses a year-cycle CSV document into a validated table.
///
/// The advent date may be ISO (`2025-11-30`) or the short legacy form
/// (`Nov-30` or `Nov 30`), which takes its year from the row.
///
/// # Errors
///
/// Returns an error naming the offending line if a row is malformed,
/// fails validation, or repeats a year.
pub fn parse_year_cycle_csv<R: Read>(reader: R) -> Result<YearCycleTable, CoreError> {
    let mut csv_reader: csv::Reader<R> = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers: csv::StringRecord = csv_reader
        .headers()
        .map_err(|e| CoreError::YearCycleCsv {
            line: None,
            reason: e.to_string(),
        })?
        .clone();
    let mut table: YearCycleTable = YearCycleTable::new();

    for result in csv_reader.records() {
        let record: csv::StringRecord = result.map_err(|e| CoreError::YearCycleCsv {
            line: e.position().map(csv::Position::line),
            reason: e.to_string(),
        })?;
        let line: Option<u64> = record.position().map(csv::Position::line);
        let row: YearCycleRow =
            record
                .deserialize(Some(&headers))
                .map_err(|e| CoreError::YearCycleCsv {
                    line,
                    reason: e.to_string(),
                })?;
        let entry: YearCycleEntry = row_to_entry(&row).map_err(|reason| CoreError::YearCycleCsv {
            line,
            reason: format!("year {}: {reason}", row.year),
        })?;
        table.insert(entry).map_err(|e| CoreError::YearCycleCsv {
            line,
            reason: e.to_string(),
        })?;
    }

    debug!(rows = table.len(), "Parsed year cycle CSV");
    Ok(table)
}

fn row_to_entry(row: &YearCycleRow) -> Result<YearCycleEntry, String> {
    let sunday_cycle: SundayCycle = row
        .sunday_cycle
        .parse()
        .map_err(|e: lectio_domain::DomainError| e.to_string())?;
    let weekday_cycle: WeekdayCycle = row
        .weekday_cycle
        .parse()
        .map_err(|e: lectio_domain::DomainError| e.to_string())?;
    let advent: Date = parse_advent_date(&row.first_sunday_of_advent, row.year)
        .ok_or_else(|| format!("unreadable date '{}'", row.first_sunday_of_advent))?;
    YearCycleEntry::new(row.year, sunday_cycle, weekday_cycle, advent).map_err(|e| e.to_string())
}

fn parse_advent_date(text: &str, year: i32) -> Option<Date> {
    let iso = time::macros::format_description!("[year]-[month]-[day]");
    if let Ok(date) = Date::parse(text, &iso) {
        return Some(date);
    }

    let (month, day) = text.split_once(['-', ' '])?;
    let month: Month = match month.trim().to_ascii_lowercase().as_str() {
        "nov" | "november" => Month::November,
        "dec" | "december" => Month::December,
        _ => return None,
    };
    let day: u8 = day.trim().parse().ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Lazily loaded, shared year-cycle table.
///
/// The first lookup loads the source; later lookups are served from
/// memory. [`YearCycleCache::invalidate`] forces the next lookup to reload.
#[derive(Debug)]
pub struct YearCycleCache<S: YearCycleSource> {
    source: S,
    table: RwLock<Option<Arc<YearCycleTable>>>,
}

impl<S: YearCycleSource> YearCycleCache<S> {
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
            table: RwLock::new(None),
        }
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the cached table, loading it on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the source fails to load.
    pub fn table(&self) -> Result<Arc<YearCycleTable>, CoreError> {
        if let Some(table) = self
            .table
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(Arc::clone(table));
        }

        let mut guard = self.table.write().unwrap_or_else(PoisonError::into_inner);
        // Another caller may have loaded it while we waited for the lock.
        if let Some(table) = guard.as_ref() {
            return Ok(Arc::clone(table));
        }
        let loaded: Arc<YearCycleTable> = Arc::new(self.source.load()?);
        info!(years = loaded.len(), "Loaded year cycle table");
        *guard = Some(Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Resolves the cycles in force on a date.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be loaded or has no row for the
    /// date's liturgical year.
    pub fn resolve(&self, date: Date) -> Result<YearCycles, CoreError> {
        Ok(self.table()?.resolve(date)?)
    }

    /// Drops the cached table so the next lookup reloads the source.
    pub fn invalidate(&self) {
        *self.table.write().unwrap_or_else(PoisonError::into_inner) = None;
        debug!("Invalidated year cycle cache");
    }
}
