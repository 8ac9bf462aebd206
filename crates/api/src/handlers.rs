// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Batch operations tying extraction and matching to storage.

use lectio::{
    Extraction, ExtractionStats, MatchReport, MatchingEngine, OrdoExtractor, YearCycleCache,
    YearCycleSource, parse_year_cycle_csv, process_ordo,
};
use lectio_domain::{
    LectionaryEntry, OrdoEntry, ProcessedOrdoEntry, YearCycleEntry, YearCycleTable,
};
use lectio_persistence::Persistence;
use std::io::Read;
use std::sync::Arc;
use time::Date;
use tracing::info;

use crate::error::{ApiError, translate_core_error, translate_persistence_error};
use crate::request_response::ImportYearCyclesResponse;

fn check_range(start: Date, end: Date) -> Result<(), ApiError> {
    if start > end {
        return Err(ApiError::InvalidInput {
            field: String::from("range"),
            message: format!("{start} is after {end}"),
        });
    }
    Ok(())
}

/// Replaces the stored year-cycle table with the rows of a CSV document.
///
/// The cache is invalidated afterwards so the next resolution sees the new
/// rows.
///
/// # Errors
///
/// Returns an error if the CSV is malformed or fails validation, or if
/// storage fails. Nothing is stored unless the whole document is valid.
pub fn import_year_cycles_csv<R: Read, S: YearCycleSource>(
    persistence: &mut Persistence,
    cache: &YearCycleCache<S>,
    reader: R,
) -> Result<ImportYearCyclesResponse, ApiError> {
    let table: YearCycleTable = parse_year_cycle_csv(reader).map_err(translate_core_error)?;
    persistence
        .replace_year_cycles(&table)
        .map_err(translate_persistence_error)?;
    cache.invalidate();

    let years: Vec<i32> = table.entries().map(YearCycleEntry::year).collect();
    info!(years = years.len(), "Imported year cycles");
    Ok(ImportYearCyclesResponse { years })
}

/// Extracts an Ordo text dump over a date range and stores one entry per
/// date, replacing any earlier extraction of those dates.
///
/// # Errors
///
/// Returns an error if the range is inverted or storage fails.
pub fn import_ordo(
    persistence: &mut Persistence,
    raw: &str,
    start: Date,
    end: Date,
) -> Result<ExtractionStats, ApiError> {
    check_range(start, end)?;
    let extractor: OrdoExtractor = OrdoExtractor::standard().map_err(translate_core_error)?;
    let extraction: Extraction = extractor
        .extract(raw, start, end)
        .map_err(translate_core_error)?;

    let stored: usize = persistence
        .upsert_ordo_entries(&extraction.entries)
        .map_err(translate_persistence_error)?;
    info!(stored, %start, %end, "Stored Ordo extraction");
    Ok(extraction.stats)
}

/// Classifies and matches the stored Ordo entries of a range against the
/// stored lectionary and records the mapping for each date.
///
/// # Errors
///
/// Returns an error if the range is inverted, the year-cycle table lacks a
/// year the range needs, or storage fails.
pub fn build_mapping<S: YearCycleSource>(
    persistence: &mut Persistence,
    cache: &YearCycleCache<S>,
    start: Date,
    end: Date,
) -> Result<MatchReport, ApiError> {
    check_range(start, end)?;
    let lectionary: Vec<LectionaryEntry> = persistence
        .list_lectionary()
        .map_err(translate_persistence_error)?;
    let engine: MatchingEngine = MatchingEngine::new(lectionary);
    let entries: Vec<OrdoEntry> = persistence
        .list_ordo_entries(start, end)
        .map_err(translate_persistence_error)?;
    let cycles: Arc<YearCycleTable> = cache.table().map_err(translate_core_error)?;

    let processed: Vec<ProcessedOrdoEntry> =
        process_ordo(&entries, &cycles, &engine).map_err(translate_core_error)?;
    persistence
        .upsert_mappings(&processed)
        .map_err(translate_persistence_error)?;

    let report: MatchReport = MatchReport::from_entries(&processed);
    info!(
        total = report.total,
        exact = report.exact,
        partial = report.partial,
        unmatched = report.unmatched,
        "Built lectionary mapping"
    );
    Ok(report)
}

/// Summarizes the stored mapping of a range for human review.
///
/// # Errors
///
/// Returns an error if the range is inverted or storage fails.
pub fn mapping_report(
    persistence: &mut Persistence,
    start: Date,
    end: Date,
) -> Result<MatchReport, ApiError> {
    check_range(start, end)?;
    let processed: Vec<ProcessedOrdoEntry> = persistence
        .list_mappings(start, end)
        .map_err(translate_persistence_error)?;
    Ok(MatchReport::from_entries(&processed))
}
