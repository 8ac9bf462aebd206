// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lectionary CSV preview and import.
//!
//! Every row is validated and reported individually. A preview never touches
//! storage; an import persists only the rows that validated.

use csv::StringRecord;
use lectio_domain::vocabulary::CYCLE_NEUTRAL_YEAR_TAGS;
use lectio_domain::{LectionaryEntry, SundayCycle};
use lectio_persistence::Persistence;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{info, warn};

use crate::error::{ApiError, translate_persistence_error};
use crate::request_response::{CsvRowStatus, LectionaryImportResponse, LectionaryRowResult};

/// Why a lectionary row was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportRowError {
    /// A required cell is empty.
    #[error("{field}: required field is missing or empty")]
    MissingField { field: &'static str },

    /// The id cell is not an integer.
    #[error("admin_order: '{value}' is not an integer")]
    InvalidAdminOrder { value: String },

    /// The id was already used by an earlier row.
    #[error("admin_order: {admin_order} already used on row {first_row}")]
    DuplicateAdminOrder { admin_order: i64, first_row: usize },

    /// The `year` cell is neither a cycle list nor a neutral tag.
    #[error("year: unrecognised cycle tag '{value}'")]
    UnknownYearTag { value: String },

    /// The row could not be read.
    #[error("CSV parse error: {message}")]
    Malformed { message: String },
}

/// Required CSV column headers (case-insensitive, normalized).
const REQUIRED_HEADERS: &[&str] = &[
    "admin_order",
    "liturgical_day",
    "year",
    "week",
    "day",
    "time",
    "first_reading",
    "psalm",
    "second_reading",
    "gospel_reading",
];

/// Normalizes a CSV header string for case-insensitive, whitespace-tolerant matching.
fn normalize_header(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

/// Validates that all required headers are present in the CSV.
fn validate_headers(headers: &StringRecord) -> Result<HashMap<String, usize>, ApiError> {
    let mut header_map: HashMap<String, usize> = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        header_map.entry(normalize_header(header)).or_insert(idx);
    }

    let missing: Vec<&str> = REQUIRED_HEADERS
        .iter()
        .copied()
        .filter(|required| !header_map.contains_key(*required))
        .collect();

    if !missing.is_empty() {
        return Err(ApiError::InvalidCsvFormat {
            reason: format!("Missing required headers: {}", missing.join(", ")),
        });
    }

    Ok(header_map)
}

/// Returns true for an empty tag, a neutral tag, or a list of Sunday cycles
/// such as "A", "B/C" or "A,B,C".
fn is_known_year_tag(tag: &str) -> bool {
    let tag: String = tag.trim().to_uppercase();
    if tag.is_empty() || CYCLE_NEUTRAL_YEAR_TAGS.contains(&tag.as_str()) {
        return true;
    }
    let mut tokens = tag
        .split(|c: char| c == '/' || c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .peekable();
    tokens.peek().is_some() && tokens.all(|token| token.parse::<SundayCycle>().is_ok())
}

fn parse_row(
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
) -> Result<LectionaryEntry, Vec<ImportRowError>> {
    let get_field = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let mut errors: Vec<ImportRowError> = Vec::new();

    let admin_order: Option<i64> = match get_field("admin_order") {
        None => {
            errors.push(ImportRowError::MissingField {
                field: "admin_order",
            });
            None
        }
        Some(value) => value.parse::<i64>().map_or_else(
            |_| {
                errors.push(ImportRowError::InvalidAdminOrder {
                    value: value.clone(),
                });
                None
            },
            Some,
        ),
    };

    let liturgical_day: Option<String> = get_field("liturgical_day");
    if liturgical_day.is_none() {
        errors.push(ImportRowError::MissingField {
            field: "liturgical_day",
        });
    }

    let year: Option<String> = get_field("year");
    if let Some(tag) = year.as_deref().filter(|tag| !is_known_year_tag(tag)) {
        errors.push(ImportRowError::UnknownYearTag {
            value: tag.to_string(),
        });
    }

    match (admin_order, liturgical_day) {
        (Some(admin_order), Some(liturgical_day)) if errors.is_empty() => Ok(LectionaryEntry {
            admin_order,
            liturgical_day,
            year,
            week: get_field("week"),
            day: get_field("day"),
            time: get_field("time"),
            first_reading: get_field("first_reading"),
            psalm: get_field("psalm"),
            second_reading: get_field("second_reading"),
            gospel_reading: get_field("gospel_reading"),
        }),
        _ => Err(errors),
    }
}

fn partial_result(
    row_number: usize,
    record: &StringRecord,
    header_map: &HashMap<String, usize>,
    errors: Vec<ImportRowError>,
) -> LectionaryRowResult {
    let cell = |name: &str| -> Option<String> {
        header_map
            .get(name)
            .and_then(|&idx| record.get(idx))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };
    LectionaryRowResult {
        row_number,
        admin_order: cell("admin_order").and_then(|s| s.parse::<i64>().ok()),
        liturgical_day: cell("liturgical_day"),
        status: CsvRowStatus::Invalid,
        errors: errors.iter().map(ToString::to_string).collect(),
    }
}

/// Validates every row, returning the per-row results and the rows that
/// can be stored.
fn validate_csv(csv_content: &str) -> Result<(Vec<LectionaryRowResult>, Vec<LectionaryEntry>), ApiError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(csv_content.as_bytes());

    let headers: StringRecord = reader
        .headers()
        .map_err(|e| ApiError::InvalidCsvFormat {
            reason: format!("Failed to read CSV headers: {e}"),
        })?
        .clone();
    let header_map: HashMap<String, usize> = validate_headers(&headers)?;

    let mut results: Vec<LectionaryRowResult> = Vec::new();
    let mut valid: Vec<LectionaryEntry> = Vec::new();
    let mut first_seen: HashMap<i64, usize> = HashMap::new();

    for (idx, result) in reader.records().enumerate() {
        let row_number: usize = idx + 1;

        let record: StringRecord = match result {
            Ok(rec) => rec,
            Err(e) => {
                results.push(LectionaryRowResult {
                    row_number,
                    admin_order: None,
                    liturgical_day: None,
                    status: CsvRowStatus::Invalid,
                    errors: vec![
                        ImportRowError::Malformed {
                            message: e.to_string(),
                        }
                        .to_string(),
                    ],
                });
                continue;
            }
        };

        match parse_row(&record, &header_map) {
            Ok(entry) => {
                if let Some(&first_row) = first_seen.get(&entry.admin_order) {
                    let error: ImportRowError = ImportRowError::DuplicateAdminOrder {
                        admin_order: entry.admin_order,
                        first_row,
                    };
                    results.push(partial_result(row_number, &record, &header_map, vec![error]));
                    continue;
                }
                first_seen.insert(entry.admin_order, row_number);
                results.push(LectionaryRowResult {
                    row_number,
                    admin_order: Some(entry.admin_order),
                    liturgical_day: Some(entry.liturgical_day.clone()),
                    status: CsvRowStatus::Valid,
                    errors: Vec::new(),
                });
                valid.push(entry);
            }
            Err(errors) => {
                results.push(partial_result(row_number, &record, &header_map, errors));
            }
        }
    }

    Ok((results, valid))
}

fn summarize(rows: Vec<LectionaryRowResult>, imported_count: usize) -> LectionaryImportResponse {
    let total_rows: usize = rows.len();
    let valid_count: usize = rows
        .iter()
        .filter(|r| r.status == CsvRowStatus::Valid)
        .count();
    LectionaryImportResponse {
        rows,
        total_rows,
        valid_count,
        invalid_count: total_rows - valid_count,
        imported_count,
    }
}

/// Validates a lectionary CSV without storing anything.
///
/// # Errors
///
/// Returns `InvalidCsvFormat` if the header row is unreadable or lacks a
/// required column.
pub fn preview_lectionary_csv(csv_content: &str) -> Result<LectionaryImportResponse, ApiError> {
    let (rows, _) = validate_csv(csv_content)?;
    Ok(summarize(rows, 0))
}

/// Validates a lectionary CSV and stores its valid rows.
///
/// Rows are upserted by `admin_order`, so re-importing a corrected file
/// updates rows in place and keeps existing mappings pointing at them.
///
/// # Errors
///
/// Returns `InvalidCsvFormat` for an unusable header row, or an error if
/// storage fails.
pub fn import_lectionary_csv(
    persistence: &mut Persistence,
    csv_content: &str,
) -> Result<LectionaryImportResponse, ApiError> {
    let (rows, valid) = validate_csv(csv_content)?;
    let imported_count: usize = persistence
        .upsert_lectionary(&valid)
        .map_err(translate_persistence_error)?;

    let response: LectionaryImportResponse = summarize(rows, imported_count);
    if response.invalid_count > 0 {
        warn!(
            invalid = response.invalid_count,
            "Skipped invalid lectionary rows"
        );
    }
    info!(
        imported = imported_count,
        total = response.total_rows,
        "Imported lectionary CSV"
    );
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header(" Admin Order "), "admin_order");
        assert_eq!(normalize_header("GOSPEL_READING"), "gospel_reading");
    }

    #[test]
    fn test_year_tags() {
        assert!(is_known_year_tag(""));
        assert!(is_known_year_tag("A"));
        assert!(is_known_year_tag("b/c"));
        assert!(is_known_year_tag("A,B,C"));
        assert!(is_known_year_tag("Season"));
        assert!(is_known_year_tag("II"));
        assert!(!is_known_year_tag("D"));
        assert!(!is_known_year_tag("A/X"));
    }
}
