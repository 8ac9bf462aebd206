// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Readings resolution policy.
//!
//! A pending schedule entry always shows the readings of the current
//! calendar-to-lectionary mapping. Once an entry leaves pending, the snapshot
//! taken at that moment is what it shows, even after the mapping is
//! corrected. `force_fresh` bypasses the snapshot for preview tooling.

use lectio_domain::{
    FlatReadings, LectionaryEntry, ReadingsData, ReadingsOrigin, ScheduleEntry, ScheduleStatus,
    is_blank_snapshot,
};
use lectio_persistence::{MappedDay, Persistence, SnapshotWrite};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use time::Date;
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::TransitionStatusResponse;

/// Options for a readings lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadingsOptions {
    /// Ignore any snapshot and recompute from the current mapping.
    pub force_fresh: bool,
}

/// Readings for one schedule entry and where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedReadings {
    pub readings: FlatReadings,
    pub source: ReadingsOrigin,
    /// The stored snapshot text, when it is authoritative but not in a
    /// shape that could be read into `readings`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_snapshot: Option<String>,
}

/// What `snapshot_on_submit` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotOutcome {
    /// The entry already had a snapshot; nothing was written.
    AlreadyPresent,
    /// This call wrote the snapshot.
    Snapshotted,
    /// The date has no mapped readings; nothing was written.
    NoReadings,
}

/// The stored snapshot column, classified.
enum StoredSnapshot<'a> {
    /// NULL, blank or `{}`.
    Absent,
    /// Parses, but carries no citation.
    Empty(&'a str),
    Readings(ReadingsData),
    /// Non-empty text that does not parse. Still authoritative.
    Unreadable(&'a str),
}

fn stored_snapshot(raw: Option<&str>) -> StoredSnapshot<'_> {
    let Some(text) = raw.filter(|text| !is_blank_snapshot(Some(text))) else {
        return StoredSnapshot::Absent;
    };
    match serde_json::from_str::<ReadingsData>(text) {
        Ok(data) if data.is_empty() => StoredSnapshot::Empty(text),
        Ok(data) => StoredSnapshot::Readings(data),
        Err(_) => StoredSnapshot::Unreadable(text),
    }
}

fn live_readings(mapped: Option<&MappedDay>) -> FlatReadings {
    match mapped {
        Some(MappedDay {
            lectionary: Some(row),
            ..
        }) => ReadingsData::from_lectionary(row).to_flat(Some(row.liturgical_day.clone())),
        Some(MappedDay { entry, .. }) => FlatReadings {
            liturgical_day: Some(entry.liturgical_name.clone()),
            ..FlatReadings::default()
        },
        None => FlatReadings::default(),
    }
}

fn live(mapped: Option<&MappedDay>) -> ResolvedReadings {
    ResolvedReadings {
        readings: live_readings(mapped),
        source: ReadingsOrigin::Lectionary,
        raw_snapshot: None,
    }
}

/// Returns the frozen readings for an entry, if the policy says to show them.
///
/// Any snapshot that is present and not structurally empty is shown, even
/// when it cannot be parsed; the raw text is then returned as-is.
fn snapshot_for(entry: &ScheduleEntry, options: ReadingsOptions) -> Option<ResolvedReadings> {
    if options.force_fresh || entry.status.is_pending() {
        return None;
    }
    match stored_snapshot(entry.readings_data.as_deref()) {
        StoredSnapshot::Absent | StoredSnapshot::Empty(_) => None,
        StoredSnapshot::Readings(data) => Some(ResolvedReadings {
            readings: data.to_flat(entry.liturgical_date.clone()),
            source: ReadingsOrigin::Snapshot,
            raw_snapshot: None,
        }),
        StoredSnapshot::Unreadable(raw) => {
            warn!(
                schedule_id = ?entry.schedule_id,
                date = %entry.date,
                "Stored readings snapshot is not structured; returning it verbatim"
            );
            Some(ResolvedReadings {
                readings: FlatReadings {
                    gospel_reading: entry.gospel_reference.clone(),
                    liturgical_day: entry.liturgical_date.clone(),
                    ..FlatReadings::default()
                },
                source: ReadingsOrigin::Snapshot,
                raw_snapshot: Some(raw.to_string()),
            })
        }
    }
}

/// Resolves the readings for one schedule entry.
///
/// # Errors
///
/// Returns an error if the mapping lookup fails.
pub fn get_readings(
    persistence: &mut Persistence,
    entry: &ScheduleEntry,
    options: ReadingsOptions,
) -> Result<ResolvedReadings, ApiError> {
    if let Some(frozen) = snapshot_for(entry, options) {
        return Ok(frozen);
    }

    let mapped: Option<MappedDay> = persistence
        .get_mapped_day(entry.date)
        .map_err(translate_persistence_error)?;
    debug!(date = %entry.date, mapped = mapped.is_some(), "Resolved live readings");

    Ok(live(mapped.as_ref()))
}

/// Resolves readings for many entries, in input order.
///
/// Entries with a usable snapshot are answered from it; every other entry
/// is answered from a single mapping query over the distinct dates needed.
///
/// # Errors
///
/// Returns an error if the mapping lookup fails.
pub fn get_readings_for_entries(
    persistence: &mut Persistence,
    entries: &[ScheduleEntry],
    options: ReadingsOptions,
) -> Result<Vec<ResolvedReadings>, ApiError> {
    let snapshots: Vec<Option<ResolvedReadings>> = entries
        .iter()
        .map(|entry| snapshot_for(entry, options))
        .collect();

    let needed: BTreeSet<Date> = entries
        .iter()
        .zip(&snapshots)
        .filter(|(_, snapshot)| snapshot.is_none())
        .map(|(entry, _)| entry.date)
        .collect();

    let mapped: BTreeMap<Date, MappedDay> = persistence
        .get_mapped_days(&needed)
        .map_err(translate_persistence_error)?
        .into_iter()
        .map(|day| (day.entry.date, day))
        .collect();
    debug!(
        entries = entries.len(),
        live_dates = needed.len(),
        "Resolved readings batch"
    );

    Ok(entries
        .iter()
        .zip(snapshots)
        .map(|(entry, snapshot)| snapshot.unwrap_or_else(|| live(mapped.get(&entry.date))))
        .collect())
}

/// Freezes the current readings onto a schedule entry, once.
///
/// An entry that already carries a snapshot is left untouched, including a
/// hand-edited one. The write itself is conditional at the storage layer, so
/// two concurrent calls cannot both win.
///
/// # Errors
///
/// Returns `ResourceNotFound` if the entry does not exist, or an error if
/// storage fails.
pub fn snapshot_on_submit(
    persistence: &mut Persistence,
    schedule_id: i64,
) -> Result<SnapshotOutcome, ApiError> {
    let entry: ScheduleEntry = load_entry(persistence, schedule_id)?;

    let observed_empty: Option<&str> = match stored_snapshot(entry.readings_data.as_deref()) {
        StoredSnapshot::Absent => None,
        StoredSnapshot::Empty(raw) => Some(raw),
        StoredSnapshot::Readings(_) | StoredSnapshot::Unreadable(_) => {
            return Ok(SnapshotOutcome::AlreadyPresent);
        }
    };

    let mapped: Option<MappedDay> = persistence
        .get_mapped_day(entry.date)
        .map_err(translate_persistence_error)?;
    let Some(row) = mapped.and_then(|day| day.lectionary) else {
        info!(schedule_id, date = %entry.date, "No mapped readings to snapshot");
        return Ok(SnapshotOutcome::NoReadings);
    };
    let data: ReadingsData = ReadingsData::from_lectionary(&row);
    if data.is_empty() {
        info!(schedule_id, date = %entry.date, "Mapped lectionary row has no readings");
        return Ok(SnapshotOutcome::NoReadings);
    }

    let snapshot: SnapshotWrite = build_snapshot(&entry, &row, &data)?;
    let written: bool = persistence
        .set_snapshot_if_empty(schedule_id, &snapshot, observed_empty)
        .map_err(translate_persistence_error)?;

    if written {
        info!(
            schedule_id,
            date = %entry.date,
            liturgical_date = ?snapshot.liturgical_date,
            "Snapshotted readings"
        );
        Ok(SnapshotOutcome::Snapshotted)
    } else {
        debug!(schedule_id, "Snapshot written concurrently; left as is");
        Ok(SnapshotOutcome::AlreadyPresent)
    }
}

fn build_snapshot(
    entry: &ScheduleEntry,
    row: &LectionaryEntry,
    data: &ReadingsData,
) -> Result<SnapshotWrite, ApiError> {
    let readings_data: String = serde_json::to_string(data).map_err(|e| ApiError::Internal {
        message: format!("Failed to serialize readings snapshot: {e}"),
    })?;
    let liturgical_date: Option<String> = Some(row.liturgical_day.trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .or_else(|| entry.liturgical_date.clone());
    let gospel_reference: Option<String> = data
        .gospel
        .as_ref()
        .map(|passage| passage.source.clone())
        .or_else(|| entry.gospel_reference.clone());

    Ok(SnapshotWrite {
        readings_data,
        liturgical_date,
        gospel_reference,
    })
}

fn load_entry(persistence: &mut Persistence, schedule_id: i64) -> Result<ScheduleEntry, ApiError> {
    persistence
        .get_schedule_entry(schedule_id)
        .map_err(translate_persistence_error)?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Schedule entry"),
            message: format!("No schedule entry with id {schedule_id}"),
        })
}

/// Creates a pending schedule entry for a date.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_schedule_entry(persistence: &mut Persistence, date: Date) -> Result<i64, ApiError> {
    let schedule_id: i64 = persistence
        .insert_schedule_entry(&ScheduleEntry::new(date))
        .map_err(translate_persistence_error)?;
    info!(schedule_id, date = %date, "Created schedule entry");
    Ok(schedule_id)
}

/// Moves a schedule entry to a new status.
///
/// Leaving `pending` freezes the readings via [`snapshot_on_submit`], after
/// the new status is stored.
///
/// # Errors
///
/// Returns an error if the entry does not exist, the transition is not
/// permitted, or storage fails.
pub fn transition_status(
    persistence: &mut Persistence,
    schedule_id: i64,
    new_status: ScheduleStatus,
) -> Result<TransitionStatusResponse, ApiError> {
    let entry: ScheduleEntry = load_entry(persistence, schedule_id)?;
    entry
        .status
        .validate_transition(new_status)
        .map_err(translate_domain_error)?;

    persistence
        .update_schedule_status(schedule_id, new_status)
        .map_err(translate_persistence_error)?;

    let snapshot: Option<SnapshotOutcome> = if entry.status.is_pending() {
        Some(snapshot_on_submit(persistence, schedule_id)?)
    } else {
        None
    };

    info!(
        schedule_id,
        from = %entry.status,
        to = %new_status,
        "Schedule status changed"
    );

    Ok(TransitionStatusResponse {
        schedule_id,
        previous_status: entry.status,
        status: new_status,
        snapshot,
    })
}
