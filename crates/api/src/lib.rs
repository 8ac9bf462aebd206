// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Runtime query surface of the lectio engine.
//!
//! This crate is the boundary the rest of a platform calls: readings
//! resolution for schedule entries (live while pending, frozen once
//! submitted), schedule status transitions, lectionary CSV import, and the
//! batch operations that run extraction and matching against storage.
//! Lower-layer errors are translated into [`ApiError`] here and never leak
//! through.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod csv_import;
mod error;
mod handlers;
mod readings;
mod request_response;

#[cfg(test)]
mod tests;

pub use csv_import::{ImportRowError, import_lectionary_csv, preview_lectionary_csv};
pub use error::{
    ApiError, translate_core_error, translate_domain_error, translate_persistence_error,
};
pub use handlers::{build_mapping, import_ordo, import_year_cycles_csv, mapping_report};
pub use readings::{
    ReadingsOptions, ResolvedReadings, SnapshotOutcome, create_schedule_entry, get_readings,
    get_readings_for_entries, snapshot_on_submit, transition_status,
};
pub use request_response::{
    CsvRowStatus, ImportYearCyclesResponse, LectionaryImportResponse, LectionaryRowResult,
    TransitionStatusResponse,
};
