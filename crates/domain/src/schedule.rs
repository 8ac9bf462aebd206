// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Schedule entries and their readings snapshots.
//!
//! A schedule entry is authored work tied to a date. While it is pending its
//! readings are always recomputed; once it leaves pending, the snapshot taken
//! at that moment is authoritative.

use crate::error::DomainError;
use crate::types::LectionaryEntry;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::Date;

/// Editorial lifecycle of a schedule entry.
///
/// Transitions move forward only; skipping ahead is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Pending,
    Submitted,
    Approved,
    Published,
}

impl ScheduleStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Published => "published",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidScheduleStatus` if the string is not a valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "submitted" => Ok(Self::Submitted),
            "approved" => Ok(Self::Approved),
            "published" => Ok(Self::Published),
            _ => Err(DomainError::InvalidScheduleStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true while readings must be recomputed on every read.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true if this status is terminal (cannot transition to another state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Published)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        let reject = |reason: &str| DomainError::InvalidStatusTransition {
            from: self.as_str().to_string(),
            to: new_status.as_str().to_string(),
            reason: reason.to_string(),
        };

        if self.is_terminal() {
            return Err(reject("cannot transition from terminal state"));
        }
        if new_status == *self {
            return Err(reject("entry already has this status"));
        }
        if new_status < *self {
            return Err(reject("status can only move forward"));
        }
        Ok(())
    }
}

impl FromStr for ScheduleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reading within a snapshot.
///
/// Hand-entered snapshots sometimes store a bare citation string in place
/// of the object form; both deserialize to the same passage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "StoredPassage")]
pub struct ReadingPassage {
    /// The citation, e.g. `Jn 9:1-41`.
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<String>,
}

/// The shapes a stored passage may take.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPassage {
    Citation(String),
    Full {
        #[serde(default)]
        source: String,
        #[serde(default)]
        text: Option<String>,
        #[serde(default)]
        heading: Option<String>,
    },
}

impl From<StoredPassage> for ReadingPassage {
    fn from(stored: StoredPassage) -> Self {
        match stored {
            StoredPassage::Citation(source) => Self {
                source,
                text: None,
                heading: None,
            },
            StoredPassage::Full {
                source,
                text,
                heading,
            } => Self {
                source,
                text,
                heading,
            },
        }
    }
}

impl ReadingPassage {
    fn from_citation(citation: Option<&str>) -> Option<Self> {
        let source: &str = citation.map(str::trim).filter(|s| !s.is_empty())?;
        Some(Self {
            source: source.to_string(),
            text: None,
            heading: None,
        })
    }

    fn has_source(passage: Option<&Self>) -> bool {
        passage.is_some_and(|p| !p.source.trim().is_empty())
    }
}

/// The frozen readings stored against a schedule entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingsData {
    #[serde(default)]
    pub combined_sources: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_reading: Option<ReadingPassage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub psalm: Option<ReadingPassage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_reading: Option<ReadingPassage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gospel: Option<ReadingPassage>,
}

impl ReadingsData {
    /// Builds a snapshot from a lectionary row's citations.
    #[must_use]
    pub fn from_lectionary(entry: &LectionaryEntry) -> Self {
        let mut data: Self = Self {
            combined_sources: String::new(),
            first_reading: ReadingPassage::from_citation(entry.first_reading.as_deref()),
            psalm: ReadingPassage::from_citation(entry.psalm.as_deref()),
            second_reading: ReadingPassage::from_citation(entry.second_reading.as_deref()),
            gospel: ReadingPassage::from_citation(entry.gospel_reading.as_deref()),
        };
        data.combined_sources = data.sources().join("; ");
        data
    }

    /// Returns the present citations in reading order.
    #[must_use]
    pub fn sources(&self) -> Vec<&str> {
        [
            &self.first_reading,
            &self.psalm,
            &self.second_reading,
            &self.gospel,
        ]
        .into_iter()
        .filter_map(|passage| passage.as_ref())
        .map(|passage| passage.source.trim())
        .filter(|source| !source.is_empty())
        .collect()
    }

    /// Returns true if the snapshot carries no citation at all, neither in a
    /// reading slot nor in `combined_sources`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.combined_sources.trim().is_empty()
            && !ReadingPassage::has_source(self.first_reading.as_ref())
            && !ReadingPassage::has_source(self.psalm.as_ref())
            && !ReadingPassage::has_source(self.second_reading.as_ref())
            && !ReadingPassage::has_source(self.gospel.as_ref())
    }

    /// Flattens the snapshot into the consumer-facing shape.
    #[must_use]
    pub fn to_flat(&self, liturgical_day: Option<String>) -> FlatReadings {
        let source = |passage: &Option<ReadingPassage>| {
            passage
                .as_ref()
                .map(|p| p.source.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        FlatReadings {
            first_reading: source(&self.first_reading),
            psalm: source(&self.psalm),
            second_reading: source(&self.second_reading),
            gospel_reading: source(&self.gospel),
            liturgical_day,
        }
    }
}

/// Returns true if a stored snapshot column counts as "no snapshot".
///
/// NULL, blank text and `{}` are all absent. Structurally empty snapshots
/// are detected after parsing with [`ReadingsData::is_empty`].
#[must_use]
pub fn is_blank_snapshot(raw: Option<&str>) -> bool {
    raw.map(str::trim)
        .is_none_or(|text| text.is_empty() || text == "{}")
}

/// Readings in the flat shape consumers render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatReadings {
    pub first_reading: Option<String>,
    pub psalm: Option<String>,
    pub second_reading: Option<String>,
    pub gospel_reading: Option<String>,
    pub liturgical_day: Option<String>,
}

impl FlatReadings {
    /// Returns true if no reading slot is set.
    #[must_use]
    pub const fn has_no_readings(&self) -> bool {
        self.first_reading.is_none()
            && self.psalm.is_none()
            && self.second_reading.is_none()
            && self.gospel_reading.is_none()
    }
}

/// Where a set of readings returned to a consumer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadingsOrigin {
    /// The frozen snapshot stored on the entry.
    Snapshot,
    /// Recomputed from the current calendar-to-lectionary mapping.
    Lectionary,
}

impl ReadingsOrigin {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Snapshot => "snapshot",
            Self::Lectionary => "lectionary",
        }
    }
}

/// An authored item scheduled against a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub schedule_id: Option<i64>,
    pub date: Date,
    pub status: ScheduleStatus,
    /// Raw snapshot column as stored.
    pub readings_data: Option<String>,
    pub liturgical_date: Option<String>,
    pub gospel_reference: Option<String>,
}

impl ScheduleEntry {
    /// Creates a new pending entry with no snapshot.
    #[must_use]
    pub const fn new(date: Date) -> Self {
        Self {
            schedule_id: None,
            date,
            status: ScheduleStatus::Pending,
            readings_data: None,
            liturgical_date: None,
            gospel_reference: None,
        }
    }

    /// Returns true if the stored snapshot column is blank.
    #[must_use]
    pub fn has_blank_snapshot(&self) -> bool {
        is_blank_snapshot(self.readings_data.as_deref())
    }
}
