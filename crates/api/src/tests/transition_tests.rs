// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lectio_domain::{ScheduleEntry, ScheduleStatus};
use lectio_persistence::Persistence;

use super::helpers::{
    LENT_IV, WOMAN_AT_THE_WELL, create_test_persistence, create_test_persistence_with_mapping,
    load_entry, map_date,
};
use crate::{
    ApiError, SnapshotOutcome, TransitionStatusResponse, create_schedule_entry, transition_status,
};

#[test]
fn test_new_entry_is_pending_without_snapshot() {
    let mut persistence: Persistence = create_test_persistence_with_mapping();
    let schedule_id: i64 = create_schedule_entry(&mut persistence, LENT_IV).unwrap();
    let entry: ScheduleEntry = load_entry(&mut persistence, schedule_id);

    assert_eq!(entry.status, ScheduleStatus::Pending);
    assert!(entry.has_blank_snapshot());
}

#[test]
fn test_submit_takes_snapshot() {
    let mut persistence: Persistence = create_test_persistence_with_mapping();
    let schedule_id: i64 = create_schedule_entry(&mut persistence, LENT_IV).unwrap();

    let response: TransitionStatusResponse =
        transition_status(&mut persistence, schedule_id, ScheduleStatus::Submitted).unwrap();

    assert_eq!(response.previous_status, ScheduleStatus::Pending);
    assert_eq!(response.status, ScheduleStatus::Submitted);
    assert_eq!(response.snapshot, Some(SnapshotOutcome::Snapshotted));
    let entry: ScheduleEntry = load_entry(&mut persistence, schedule_id);
    assert_eq!(entry.status, ScheduleStatus::Submitted);
    assert!(!entry.has_blank_snapshot());
}

#[test]
fn test_later_transitions_do_not_resnapshot() {
    let mut persistence: Persistence = create_test_persistence_with_mapping();
    let schedule_id: i64 = create_schedule_entry(&mut persistence, LENT_IV).unwrap();
    transition_status(&mut persistence, schedule_id, ScheduleStatus::Submitted).unwrap();
    let submitted: Option<String> = load_entry(&mut persistence, schedule_id).readings_data;
    map_date(&mut persistence, LENT_IV, Some(WOMAN_AT_THE_WELL));

    let response: TransitionStatusResponse =
        transition_status(&mut persistence, schedule_id, ScheduleStatus::Approved).unwrap();

    assert_eq!(response.snapshot, None);
    assert_eq!(load_entry(&mut persistence, schedule_id).readings_data, submitted);
}

#[test]
fn test_skipping_straight_to_published_snapshots() {
    let mut persistence: Persistence = create_test_persistence_with_mapping();
    let schedule_id: i64 = create_schedule_entry(&mut persistence, LENT_IV).unwrap();

    let response: TransitionStatusResponse =
        transition_status(&mut persistence, schedule_id, ScheduleStatus::Published).unwrap();

    assert_eq!(response.snapshot, Some(SnapshotOutcome::Snapshotted));
}

#[test]
fn test_backward_transition_is_rejected() {
    let mut persistence: Persistence = create_test_persistence_with_mapping();
    let schedule_id: i64 = create_schedule_entry(&mut persistence, LENT_IV).unwrap();
    transition_status(&mut persistence, schedule_id, ScheduleStatus::Approved).unwrap();

    let result: Result<TransitionStatusResponse, ApiError> =
        transition_status(&mut persistence, schedule_id, ScheduleStatus::Pending);

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "status_transition"
    ));
    assert_eq!(
        load_entry(&mut persistence, schedule_id).status,
        ScheduleStatus::Approved
    );
}

#[test]
fn test_published_is_terminal() {
    let mut persistence: Persistence = create_test_persistence_with_mapping();
    let schedule_id: i64 = create_schedule_entry(&mut persistence, LENT_IV).unwrap();
    transition_status(&mut persistence, schedule_id, ScheduleStatus::Published).unwrap();

    let result: Result<TransitionStatusResponse, ApiError> =
        transition_status(&mut persistence, schedule_id, ScheduleStatus::Published);

    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_submit_without_mapping_still_changes_status() {
    let mut persistence: Persistence = create_test_persistence();
    let schedule_id: i64 = create_schedule_entry(&mut persistence, LENT_IV).unwrap();

    let response: TransitionStatusResponse =
        transition_status(&mut persistence, schedule_id, ScheduleStatus::Submitted).unwrap();

    assert_eq!(response.snapshot, Some(SnapshotOutcome::NoReadings));
    assert_eq!(
        load_entry(&mut persistence, schedule_id).status,
        ScheduleStatus::Submitted
    );
}

#[test]
fn test_transition_of_missing_entry_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let result: Result<TransitionStatusResponse, ApiError> =
        transition_status(&mut persistence, 7, ScheduleStatus::Submitted);
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}
