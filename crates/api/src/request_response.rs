// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use lectio_domain::ScheduleStatus;
use serde::{Deserialize, Serialize};

use crate::readings::SnapshotOutcome;

/// API response for a schedule status change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionStatusResponse {
    pub schedule_id: i64,
    /// The status before the change.
    pub previous_status: ScheduleStatus,
    /// The status after the change.
    pub status: ScheduleStatus,
    /// Set when the change left `pending` and a snapshot was attempted.
    pub snapshot: Option<SnapshotOutcome>,
}

/// Validation status for one CSV row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CsvRowStatus {
    /// Row is valid and can be imported.
    Valid,
    /// Row has validation errors.
    Invalid,
}

/// Validation result for one lectionary CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectionaryRowResult {
    /// The row number (1-based, excluding header).
    pub row_number: usize,
    pub admin_order: Option<i64>,
    pub liturgical_day: Option<String>,
    pub status: CsvRowStatus,
    /// Zero or more validation errors.
    pub errors: Vec<String>,
}

/// Lectionary CSV preview or import result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectionaryImportResponse {
    pub rows: Vec<LectionaryRowResult>,
    pub total_rows: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    /// Rows written to storage; zero for a preview.
    pub imported_count: usize,
}

/// API response for a year-cycle import.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportYearCyclesResponse {
    /// Years now provisioned, in order.
    pub years: Vec<i32>,
}
