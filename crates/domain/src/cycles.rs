// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sunday and weekday lectionary cycles and the year-cycle table.
//!
//! The table is static reference data with one row per calendar year.
//! A calendar date belongs to the liturgical year described by the row for
//! its own calendar year until it reaches that row's First Sunday of
//! Advent; from then on it belongs to the following year's row.

use crate::calendar;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use time::{Date, Month, Weekday};

/// The three-year Sunday lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SundayCycle {
    A,
    B,
    C,
}

impl SundayCycle {
    /// Returns the string representation of the cycle.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Computes the cycle of the liturgical year that ends in `year`.
    #[must_use]
    pub const fn for_liturgical_year(year: i32) -> Self {
        match year.rem_euclid(3) {
            1 => Self::A,
            2 => Self::B,
            _ => Self::C,
        }
    }
}

impl FromStr for SundayCycle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(DomainError::InvalidSundayCycle(s.to_string())),
        }
    }
}

impl std::fmt::Display for SundayCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The two-year weekday lectionary cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeekdayCycle {
    I,
    II,
}

impl WeekdayCycle {
    /// Returns the string representation of the cycle.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::I => "I",
            Self::II => "II",
        }
    }

    /// Returns the numeric tag the lectionary uses for this cycle.
    #[must_use]
    pub const fn lectionary_tag(&self) -> &'static str {
        match self {
            Self::I => "1",
            Self::II => "2",
        }
    }

    /// Computes the cycle of the liturgical year that ends in `year`.
    #[must_use]
    pub const fn for_liturgical_year(year: i32) -> Self {
        if year.rem_euclid(2) == 0 {
            Self::II
        } else {
            Self::I
        }
    }
}

impl FromStr for WeekdayCycle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "I" | "1" => Ok(Self::I),
            "II" | "2" => Ok(Self::II),
            _ => Err(DomainError::InvalidWeekdayCycle(s.to_string())),
        }
    }
}

impl std::fmt::Display for WeekdayCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The pair of cycles that applies to a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearCycles {
    pub sunday_cycle: SundayCycle,
    pub weekday_cycle: WeekdayCycle,
}

/// One row of the year-cycle reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearCycleEntry {
    year: i32,
    sunday_cycle: SundayCycle,
    weekday_cycle: WeekdayCycle,
    first_sunday_of_advent: Date,
}

impl YearCycleEntry {
    /// Creates a validated year-cycle row.
    ///
    /// # Arguments
    ///
    /// * `year` - The calendar year this row describes
    /// * `sunday_cycle` - The Sunday cycle in force until Advent
    /// * `weekday_cycle` - The weekday cycle in force until Advent
    /// * `first_sunday_of_advent` - The date that starts the next liturgical year
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidFirstSundayOfAdvent` if the date is not a
    /// Sunday between 27 November and 3 December of `year`.
    pub fn new(
        year: i32,
        sunday_cycle: SundayCycle,
        weekday_cycle: WeekdayCycle,
        first_sunday_of_advent: Date,
    ) -> Result<Self, DomainError> {
        validate_first_sunday_of_advent(year, first_sunday_of_advent)?;
        Ok(Self {
            year,
            sunday_cycle,
            weekday_cycle,
            first_sunday_of_advent,
        })
    }

    /// Derives the row for `year` from the Gregorian calendar alone.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the supported date range.
    pub fn computed(year: i32) -> Result<Self, DomainError> {
        let advent: Date = calendar::first_sunday_of_advent(year)?;
        Self::new(
            year,
            SundayCycle::for_liturgical_year(year),
            WeekdayCycle::for_liturgical_year(year),
            advent,
        )
    }

    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn sunday_cycle(&self) -> SundayCycle {
        self.sunday_cycle
    }

    #[must_use]
    pub const fn weekday_cycle(&self) -> WeekdayCycle {
        self.weekday_cycle
    }

    #[must_use]
    pub const fn first_sunday_of_advent(&self) -> Date {
        self.first_sunday_of_advent
    }

    #[must_use]
    pub const fn cycles(&self) -> YearCycles {
        YearCycles {
            sunday_cycle: self.sunday_cycle,
            weekday_cycle: self.weekday_cycle,
        }
    }
}

fn validate_first_sunday_of_advent(year: i32, date: Date) -> Result<(), DomainError> {
    let reject = |reason: &str| DomainError::InvalidFirstSundayOfAdvent {
        year,
        date,
        reason: reason.to_string(),
    };

    if date.year() != year {
        return Err(reject("date is not in the row's calendar year"));
    }
    if date.weekday() != Weekday::Sunday {
        return Err(reject("date is not a Sunday"));
    }
    let in_window: bool = match date.month() {
        Month::November => date.day() >= 27,
        Month::December => date.day() <= 3,
        _ => false,
    };
    if !in_window {
        return Err(reject("date must fall between 27 November and 3 December"));
    }
    Ok(())
}

/// The year-cycle reference table, one row per calendar year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YearCycleTable {
    entries: BTreeMap<i32, YearCycleEntry>,
}

impl YearCycleTable {
    /// Creates an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a table from rows, rejecting duplicate years.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateYearCycle` if two rows share a year.
    pub fn from_entries<I>(entries: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = YearCycleEntry>,
    {
        let mut table: Self = Self::new();
        for entry in entries {
            table.insert(entry)?;
        }
        Ok(table)
    }

    /// Builds a table for an inclusive range of years from computed rows.
    ///
    /// # Errors
    ///
    /// Returns an error if any year is outside the supported date range.
    pub fn computed(first_year: i32, last_year: i32) -> Result<Self, DomainError> {
        let entries: Vec<YearCycleEntry> = (first_year..=last_year)
            .map(YearCycleEntry::computed)
            .collect::<Result<_, _>>()?;
        Self::from_entries(entries)
    }

    /// Adds a row to the table.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateYearCycle` if the year already has a row.
    pub fn insert(&mut self, entry: YearCycleEntry) -> Result<(), DomainError> {
        if self.entries.contains_key(&entry.year) {
            return Err(DomainError::DuplicateYearCycle(entry.year));
        }
        self.entries.insert(entry.year, entry);
        Ok(())
    }

    /// Returns the row for a calendar year.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::YearCycleNotFound` if the year is not provisioned.
    pub fn entry(&self, year: i32) -> Result<&YearCycleEntry, DomainError> {
        self.entries
            .get(&year)
            .ok_or(DomainError::YearCycleNotFound { year })
    }

    /// Resolves the Sunday and weekday cycles for a calendar date.
    ///
    /// Dates on or after the First Sunday of Advent take the cycles of the
    /// following year's row.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::YearCycleNotFound` if the row for the date's year,
    /// or for the following year once Advent has begun, is missing.
    pub fn resolve(&self, date: Date) -> Result<YearCycles, DomainError> {
        let current: &YearCycleEntry = self.entry(date.year())?;
        if date >= current.first_sunday_of_advent {
            let next: &YearCycleEntry = self.entry(date.year() + 1)?;
            return Ok(next.cycles());
        }
        Ok(current.cycles())
    }

    /// Returns the rows in year order.
    pub fn entries(&self) -> impl Iterator<Item = &YearCycleEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
