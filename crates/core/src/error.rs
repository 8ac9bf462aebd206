// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lectio_domain::DomainError;
use time::Date;

/// Errors raised while extracting, classifying or matching an Ordo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The requested extraction range ends before it starts.
    InvalidRange {
        /// The first date of the range.
        start: Date,
        /// The last date of the range.
        end: Date,
    },
    /// A pattern assembled from a book table failed to compile.
    InvalidPattern(String),
    /// A year-cycle CSV row could not be read.
    YearCycleCsv {
        /// The 1-based record line, when known.
        line: Option<u64>,
        /// Why the row was rejected.
        reason: String,
    },
    /// The year-cycle source could not be loaded.
    YearCycleSource(String),
    /// Writing an output document failed.
    Output(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::InvalidRange { start, end } => {
                write!(f, "Invalid date range: {start} is after {end}")
            }
            Self::InvalidPattern(msg) => write!(f, "Invalid reading pattern: {msg}"),
            Self::YearCycleCsv {
                line: Some(line),
                reason,
            } => write!(f, "Year cycle CSV error on line {line}: {reason}"),
            Self::YearCycleCsv { line: None, reason } => {
                write!(f, "Year cycle CSV error: {reason}")
            }
            Self::YearCycleSource(msg) => write!(f, "Year cycle source unavailable: {msg}"),
            Self::Output(msg) => write!(f, "Failed to write output: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
