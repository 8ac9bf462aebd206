// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use lectio::CoreError;
use lectio_domain::DomainError;
use lectio_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// A CSV document could not be read at all.
    InvalidCsvFormat {
        /// Why the document was rejected.
        reason: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidCsvFormat { reason } => write!(f, "Invalid CSV format: {reason}"),
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        translate_persistence_error(err)
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::YearCycleNotFound { year } => ApiError::DomainRuleViolation {
            rule: String::from("year_cycle_provisioned"),
            message: format!("No year-cycle data for {year}"),
        },
        DomainError::DuplicateYearCycle(year) => ApiError::DomainRuleViolation {
            rule: String::from("unique_year_cycle"),
            message: format!("Year {year} is defined more than once"),
        },
        DomainError::InvalidSundayCycle(value) => ApiError::InvalidInput {
            field: String::from("sunday_cycle"),
            message: format!("'{value}' is not one of A, B or C"),
        },
        DomainError::InvalidWeekdayCycle(value) => ApiError::InvalidInput {
            field: String::from("weekday_cycle"),
            message: format!("'{value}' is not one of I or II"),
        },
        err @ DomainError::InvalidFirstSundayOfAdvent { .. } => ApiError::InvalidInput {
            field: String::from("first_sunday_of_advent"),
            message: err.to_string(),
        },
        DomainError::InvalidRank(value) => ApiError::InvalidInput {
            field: String::from("liturgical_rank"),
            message: value,
        },
        DomainError::InvalidSeason(value) => ApiError::InvalidInput {
            field: String::from("liturgical_season"),
            message: value,
        },
        DomainError::InvalidMatchType(value) => ApiError::InvalidInput {
            field: String::from("match_type"),
            message: value,
        },
        DomainError::InvalidScheduleStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{status}' is not a schedule status"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => {
            ApiError::DomainRuleViolation {
                rule: String::from("status_transition"),
                message: format!("Cannot move from '{from}' to '{to}': {reason}"),
            }
        }
        DomainError::DateArithmeticOverflow { operation } => ApiError::Internal {
            message: format!("Date arithmetic overflow while {operation}"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("'{date_string}': {error}"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidRange { start, end } => ApiError::InvalidInput {
            field: String::from("range"),
            message: format!("{start} is after {end}"),
        },
        CoreError::YearCycleCsv { line, reason } => ApiError::InvalidCsvFormat {
            reason: line.map_or_else(|| reason.clone(), |line| format!("line {line}: {reason}")),
        },
        err @ (CoreError::InvalidPattern(_)
        | CoreError::YearCycleSource(_)
        | CoreError::Output(_)) => ApiError::Internal {
            message: err.to_string(),
        },
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::ScheduleEntryNotFound(schedule_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Schedule entry"),
            message: format!("No schedule entry with id {schedule_id}"),
        },
        other => ApiError::Internal {
            message: format!("Storage failure: {other}"),
        },
    }
}
