// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lectio_domain::{ScheduleEntry, ScheduleStatus};
use time::macros::date;

use super::create_test_persistence;
use crate::{Persistence, PersistenceError, SnapshotWrite};

fn snapshot(gospel: &str) -> SnapshotWrite {
    SnapshotWrite {
        readings_data: format!(
            r#"{{"combined_sources":"{gospel}","gospel":{{"source":"{gospel}"}}}}"#
        ),
        liturgical_date: Some(String::from("Fourth Sunday of Lent")),
        gospel_reference: Some(gospel.to_string()),
    }
}

fn persistence_with_entry() -> (Persistence, i64) {
    let mut persistence: Persistence = create_test_persistence();
    let schedule_id: i64 = persistence
        .insert_schedule_entry(&ScheduleEntry::new(date!(2026 - 03 - 15)))
        .unwrap();
    (persistence, schedule_id)
}

#[test]
fn test_new_entry_is_pending_without_snapshot() {
    let (mut persistence, schedule_id) = persistence_with_entry();

    let entry: ScheduleEntry = persistence.get_schedule_entry(schedule_id).unwrap().unwrap();
    assert_eq!(entry.schedule_id, Some(schedule_id));
    assert_eq!(entry.status, ScheduleStatus::Pending);
    assert!(entry.has_blank_snapshot());
}

#[test]
fn test_status_update_is_stored() {
    let (mut persistence, schedule_id) = persistence_with_entry();
    persistence
        .update_schedule_status(schedule_id, ScheduleStatus::Approved)
        .unwrap();

    let entry: ScheduleEntry = persistence.get_schedule_entry(schedule_id).unwrap().unwrap();
    assert_eq!(entry.status, ScheduleStatus::Approved);
}

#[test]
fn test_status_update_of_missing_entry_fails() {
    let mut persistence: Persistence = create_test_persistence();
    let result: Result<(), PersistenceError> =
        persistence.update_schedule_status(41, ScheduleStatus::Submitted);
    assert_eq!(result, Err(PersistenceError::ScheduleEntryNotFound(41)));
}

#[test]
fn test_snapshot_is_written_only_once() {
    let (mut persistence, schedule_id) = persistence_with_entry();

    let first: bool = persistence
        .set_snapshot_if_empty(schedule_id, &snapshot("Jn 9:1-41"), None)
        .unwrap();
    let second: bool = persistence
        .set_snapshot_if_empty(schedule_id, &snapshot("Jn 4:5-42"), None)
        .unwrap();

    assert!(first);
    assert!(!second);
    let entry: ScheduleEntry = persistence.get_schedule_entry(schedule_id).unwrap().unwrap();
    assert_eq!(entry.gospel_reference.as_deref(), Some("Jn 9:1-41"));
    assert_eq!(entry.readings_data, Some(snapshot("Jn 9:1-41").readings_data));
}

#[test]
fn test_empty_object_snapshot_counts_as_absent() {
    let (mut persistence, schedule_id) = persistence_with_entry();
    persistence.replace_snapshot(schedule_id, Some(" {} ")).unwrap();

    let written: bool = persistence
        .set_snapshot_if_empty(schedule_id, &snapshot("Jn 9:1-41"), None)
        .unwrap();
    assert!(written);
}

#[test]
fn test_observed_empty_structure_is_compare_and_set() {
    let (mut persistence, schedule_id) = persistence_with_entry();
    let empty_structure: &str = r#"{"combined_sources":""}"#;
    persistence
        .replace_snapshot(schedule_id, Some(empty_structure))
        .unwrap();

    // Without the observed value the structure is not blank to SQL.
    let blind: bool = persistence
        .set_snapshot_if_empty(schedule_id, &snapshot("Jn 9:1-41"), None)
        .unwrap();
    assert!(!blind);

    let written: bool = persistence
        .set_snapshot_if_empty(schedule_id, &snapshot("Jn 9:1-41"), Some(empty_structure))
        .unwrap();
    assert!(written);

    // The value the caller saw is gone, so a stale caller loses.
    let stale: bool = persistence
        .set_snapshot_if_empty(schedule_id, &snapshot("Jn 4:5-42"), Some(empty_structure))
        .unwrap();
    assert!(!stale);
}

#[test]
fn test_entries_are_listed_by_date() {
    let mut persistence: Persistence = create_test_persistence();
    let later: i64 = persistence
        .insert_schedule_entry(&ScheduleEntry::new(date!(2026 - 03 - 22)))
        .unwrap();
    let earlier: i64 = persistence
        .insert_schedule_entry(&ScheduleEntry::new(date!(2026 - 03 - 08)))
        .unwrap();
    persistence
        .insert_schedule_entry(&ScheduleEntry::new(date!(2026 - 05 - 01)))
        .unwrap();

    let ids: Vec<Option<i64>> = persistence
        .list_schedule_entries(date!(2026 - 03 - 01), date!(2026 - 03 - 31))
        .unwrap()
        .iter()
        .map(|entry| entry.schedule_id)
        .collect();
    assert_eq!(ids, vec![Some(earlier), Some(later)]);
}
