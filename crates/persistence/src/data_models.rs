// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row types and their conversions to and from domain values.
//!
//! Enumerations are stored as their `as_str` text and dates as ISO
//! `YYYY-MM-DD`, so the tables stay readable with the `sqlite3` shell.

use diesel::prelude::*;
use lectio_domain::{
    LectionaryEntry, LectionaryMatch, MatchType, NameSource, OrdoEntry, ProcessedOrdoEntry,
    Rank, Readings, ScheduleEntry, ScheduleStatus, ScriptureReference, Season, SundayCycle,
    WeekdayCycle, YearCycleEntry,
};
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::diesel_schema::{
    lectionary, liturgical_years, ordo_entries, ordo_lectionary_mapping, schedule,
};
use crate::error::PersistenceError;

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Formats a date the way every table stores it.
#[must_use]
pub fn date_key(date: Date) -> String {
    date.to_string()
}

pub(crate) fn parse_date(table: &'static str, value: &str) -> Result<Date, PersistenceError> {
    Date::parse(value, DATE_FORMAT)
        .map_err(|e| PersistenceError::corrupt(table, format!("date '{value}': {e}")))
}

fn parse_field<T>(table: &'static str, value: &str) -> Result<T, PersistenceError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| PersistenceError::corrupt(table, e))
}

const fn name_source_str(source: NameSource) -> &'static str {
    match source {
        NameSource::Header => "header",
        NameSource::Placeholder => "placeholder",
    }
}

fn parse_name_source(value: &str) -> Result<NameSource, PersistenceError> {
    match value {
        "header" => Ok(NameSource::Header),
        "placeholder" => Ok(NameSource::Placeholder),
        other => Err(PersistenceError::corrupt(
            "ordo_entries",
            format!("unknown name source '{other}'"),
        )),
    }
}

// ============================================================================
// Year cycles
// ============================================================================

#[derive(Debug, Clone, Queryable, Selectable, Insertable)]
#[diesel(table_name = liturgical_years)]
pub struct YearCycleRow {
    pub year: i32,
    pub sunday_cycle: String,
    pub weekday_cycle: String,
    pub first_sunday_of_advent: String,
}

impl From<&YearCycleEntry> for YearCycleRow {
    fn from(entry: &YearCycleEntry) -> Self {
        Self {
            year: entry.year(),
            sunday_cycle: entry.sunday_cycle().as_str().to_string(),
            weekday_cycle: entry.weekday_cycle().as_str().to_string(),
            first_sunday_of_advent: date_key(entry.first_sunday_of_advent()),
        }
    }
}

impl TryFrom<YearCycleRow> for YearCycleEntry {
    type Error = PersistenceError;

    fn try_from(row: YearCycleRow) -> Result<Self, Self::Error> {
        const TABLE: &str = "liturgical_years";
        let entry: Self = Self::new(
            row.year,
            parse_field::<SundayCycle>(TABLE, &row.sunday_cycle)?,
            parse_field::<WeekdayCycle>(TABLE, &row.weekday_cycle)?,
            parse_date(TABLE, &row.first_sunday_of_advent)?,
        )
        .map_err(|e| PersistenceError::corrupt(TABLE, e))?;
        Ok(entry)
    }
}

// ============================================================================
// Lectionary
// ============================================================================

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = lectionary, treat_none_as_null = true)]
pub struct LectionaryRow {
    pub admin_order: i64,
    pub liturgical_day: String,
    pub year: Option<String>,
    pub week: Option<String>,
    pub day: Option<String>,
    pub time: Option<String>,
    pub first_reading: Option<String>,
    pub psalm: Option<String>,
    pub second_reading: Option<String>,
    pub gospel_reading: Option<String>,
}

impl From<&LectionaryEntry> for LectionaryRow {
    fn from(entry: &LectionaryEntry) -> Self {
        Self {
            admin_order: entry.admin_order,
            liturgical_day: entry.liturgical_day.clone(),
            year: entry.year.clone(),
            week: entry.week.clone(),
            day: entry.day.clone(),
            time: entry.time.clone(),
            first_reading: entry.first_reading.clone(),
            psalm: entry.psalm.clone(),
            second_reading: entry.second_reading.clone(),
            gospel_reading: entry.gospel_reading.clone(),
        }
    }
}

impl From<LectionaryRow> for LectionaryEntry {
    fn from(row: LectionaryRow) -> Self {
        Self {
            admin_order: row.admin_order,
            liturgical_day: row.liturgical_day,
            year: row.year,
            week: row.week,
            day: row.day,
            time: row.time,
            first_reading: row.first_reading,
            psalm: row.psalm,
            second_reading: row.second_reading,
            gospel_reading: row.gospel_reading,
        }
    }
}

// ============================================================================
// Ordo entries
// ============================================================================

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = ordo_entries, treat_none_as_null = true)]
pub struct OrdoEntryRow {
    pub calendar_date: String,
    pub day_of_week: String,
    pub raw_name: String,
    pub declared_rank: Option<String>,
    pub name_source: String,
    pub first_reading: Option<String>,
    pub psalm: Option<String>,
    pub second_reading: Option<String>,
    pub gospel: Option<String>,
}

impl From<&OrdoEntry> for OrdoEntryRow {
    fn from(entry: &OrdoEntry) -> Self {
        let citation =
            |reference: Option<&ScriptureReference>| reference.map(ToString::to_string);
        Self {
            calendar_date: date_key(entry.date),
            day_of_week: entry.day_of_week.to_string(),
            raw_name: entry.raw_name.clone(),
            declared_rank: entry.declared_rank.map(|rank| rank.as_str().to_string()),
            name_source: name_source_str(entry.name_source).to_string(),
            first_reading: citation(entry.readings.first_reading.as_ref()),
            psalm: citation(entry.readings.psalm.as_ref()),
            second_reading: citation(entry.readings.second_reading.as_ref()),
            gospel: citation(entry.readings.gospel.as_ref()),
        }
    }
}

impl TryFrom<OrdoEntryRow> for OrdoEntry {
    type Error = PersistenceError;

    fn try_from(row: OrdoEntryRow) -> Result<Self, Self::Error> {
        const TABLE: &str = "ordo_entries";
        let date: Date = parse_date(TABLE, &row.calendar_date)?;
        let declared_rank: Option<Rank> = row
            .declared_rank
            .as_deref()
            .map(|rank| parse_field::<Rank>(TABLE, rank))
            .transpose()?;
        let citation =
            |text: Option<String>| text.as_deref().and_then(ScriptureReference::parse);

        Ok(Self {
            date,
            day_of_week: date.weekday(),
            raw_name: row.raw_name,
            declared_rank,
            name_source: parse_name_source(&row.name_source)?,
            readings: Readings {
                first_reading: citation(row.first_reading),
                psalm: citation(row.psalm),
                second_reading: citation(row.second_reading),
                gospel: citation(row.gospel),
            },
        })
    }
}

// ============================================================================
// Calendar to lectionary mapping
// ============================================================================

#[derive(Debug, Clone, Queryable, Selectable, Insertable, AsChangeset)]
#[diesel(table_name = ordo_lectionary_mapping, treat_none_as_null = true)]
pub struct MappingRow {
    pub calendar_date: String,
    pub liturgical_name: String,
    pub liturgical_rank: String,
    pub liturgical_season: Option<String>,
    pub liturgical_week: Option<i32>,
    pub year_cycle: String,
    pub weekday_cycle: String,
    pub lectionary_id: Option<i64>,
    pub match_type: String,
    pub match_method: String,
}

impl From<&ProcessedOrdoEntry> for MappingRow {
    fn from(entry: &ProcessedOrdoEntry) -> Self {
        let found: &LectionaryMatch = &entry.lectionary_match;
        Self {
            calendar_date: date_key(entry.date),
            liturgical_name: entry.liturgical_name.clone(),
            liturgical_rank: entry.liturgical_rank.as_str().to_string(),
            liturgical_season: entry
                .liturgical_season
                .map(|season| season.as_str().to_string()),
            liturgical_week: entry.liturgical_week.map(i32::from),
            year_cycle: entry.year_cycle.as_str().to_string(),
            weekday_cycle: entry.weekday_cycle.as_str().to_string(),
            lectionary_id: found.lectionary_id(),
            match_type: found.match_type().as_str().to_string(),
            match_method: found.match_method().to_string(),
        }
    }
}

impl TryFrom<MappingRow> for ProcessedOrdoEntry {
    type Error = PersistenceError;

    fn try_from(row: MappingRow) -> Result<Self, Self::Error> {
        const TABLE: &str = "ordo_lectionary_mapping";
        let liturgical_week: Option<u8> = row
            .liturgical_week
            .map(|week| u8::try_from(week).map_err(|e| PersistenceError::corrupt(TABLE, e)))
            .transpose()?;
        let liturgical_season: Option<Season> = row
            .liturgical_season
            .as_deref()
            .map(|season| parse_field::<Season>(TABLE, season))
            .transpose()?;
        let match_type: MatchType = parse_field(TABLE, &row.match_type)?;

        Ok(Self {
            date: parse_date(TABLE, &row.calendar_date)?,
            liturgical_name: row.liturgical_name,
            liturgical_rank: parse_field(TABLE, &row.liturgical_rank)?,
            liturgical_season,
            liturgical_week,
            year_cycle: parse_field(TABLE, &row.year_cycle)?,
            weekday_cycle: parse_field(TABLE, &row.weekday_cycle)?,
            lectionary_match: LectionaryMatch::from_parts(
                row.lectionary_id,
                match_type,
                &row.match_method,
            ),
        })
    }
}

/// A stored mapping together with the lectionary row it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedDay {
    pub entry: ProcessedOrdoEntry,
    pub lectionary: Option<LectionaryEntry>,
}

// ============================================================================
// Schedule
// ============================================================================

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schedule)]
pub struct ScheduleRow {
    pub schedule_id: i64,
    pub calendar_date: String,
    pub status: String,
    pub readings_data: Option<String>,
    pub liturgical_date: Option<String>,
    pub gospel_reference: Option<String>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schedule)]
pub struct NewScheduleRow {
    pub calendar_date: String,
    pub status: String,
    pub readings_data: Option<String>,
    pub liturgical_date: Option<String>,
    pub gospel_reference: Option<String>,
}

impl From<&ScheduleEntry> for NewScheduleRow {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            calendar_date: date_key(entry.date),
            status: entry.status.as_str().to_string(),
            readings_data: entry.readings_data.clone(),
            liturgical_date: entry.liturgical_date.clone(),
            gospel_reference: entry.gospel_reference.clone(),
        }
    }
}

impl TryFrom<ScheduleRow> for ScheduleEntry {
    type Error = PersistenceError;

    fn try_from(row: ScheduleRow) -> Result<Self, Self::Error> {
        const TABLE: &str = "schedule";
        let status: ScheduleStatus = parse_field(TABLE, &row.status)?;
        Ok(Self {
            schedule_id: Some(row.schedule_id),
            date: parse_date(TABLE, &row.calendar_date)?,
            status,
            readings_data: row.readings_data,
            liturgical_date: row.liturgical_date,
            gospel_reference: row.gospel_reference,
        })
    }
}

/// The columns written when a snapshot is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotWrite {
    /// Serialized `ReadingsData`.
    pub readings_data: String,
    pub liturgical_date: Option<String>,
    pub gospel_reference: Option<String>,
}
