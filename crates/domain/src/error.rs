// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur while applying liturgical calendar rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The year-cycle table has no row for a year the caller needs.
    YearCycleNotFound {
        /// The calendar year that was requested.
        year: i32,
    },
    /// The year-cycle table already contains a row for this year.
    DuplicateYearCycle(i32),
    /// A Sunday cycle value is not one of A, B or C.
    InvalidSundayCycle(String),
    /// A weekday cycle value is not one of I or II.
    InvalidWeekdayCycle(String),
    /// The First Sunday of Advent for a year is not plausible.
    InvalidFirstSundayOfAdvent {
        /// The year of the offending row.
        year: i32,
        /// The date that was supplied.
        date: Date,
        /// Why the date was rejected.
        reason: String,
    },
    /// A liturgical rank string could not be parsed.
    InvalidRank(String),
    /// A liturgical season string could not be parsed.
    InvalidSeason(String),
    /// A match type string could not be parsed.
    InvalidMatchType(String),
    /// A schedule status string could not be parsed.
    InvalidScheduleStatus {
        /// The unrecognised status.
        status: String,
    },
    /// A schedule status transition is not permitted.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition was rejected.
        reason: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YearCycleNotFound { year } => {
                write!(
                    f,
                    "No year-cycle data for {year}; the table must be provisioned for every year in use"
                )
            }
            Self::DuplicateYearCycle(year) => {
                write!(f, "Year-cycle data for {year} is defined more than once")
            }
            Self::InvalidSundayCycle(value) => {
                write!(f, "Invalid Sunday cycle '{value}': expected A, B or C")
            }
            Self::InvalidWeekdayCycle(value) => {
                write!(f, "Invalid weekday cycle '{value}': expected I or II")
            }
            Self::InvalidFirstSundayOfAdvent { year, date, reason } => {
                write!(
                    f,
                    "Invalid First Sunday of Advent {date} for year {year}: {reason}"
                )
            }
            Self::InvalidRank(value) => write!(f, "Invalid liturgical rank: {value}"),
            Self::InvalidSeason(value) => write!(f, "Invalid liturgical season: {value}"),
            Self::InvalidMatchType(value) => write!(f, "Invalid match type: {value}"),
            Self::InvalidScheduleStatus { status } => {
                write!(f, "Invalid schedule status: {status}")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(
                    f,
                    "Cannot transition schedule status from '{from}' to '{to}': {reason}"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
