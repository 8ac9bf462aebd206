// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use lectio_domain::{
    LectionaryEntry, LectionaryMatch, MatchType, ProcessedOrdoEntry, Rank, ScheduleEntry,
    ScheduleStatus, Season, SundayCycle, WeekdayCycle,
};
use lectio_persistence::Persistence;
use time::Date;
use time::macros::date;

use crate::{create_schedule_entry, transition_status};

/// Fourth Sunday of Lent 2026.
pub const LENT_IV: Date = date!(2026 - 03 - 08);

pub const MAN_BORN_BLIND: i64 = 1;
pub const WOMAN_AT_THE_WELL: i64 = 2;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

pub fn create_test_lectionary_entry(
    admin_order: i64,
    liturgical_day: &str,
    gospel: &str,
) -> LectionaryEntry {
    LectionaryEntry {
        admin_order,
        liturgical_day: liturgical_day.to_string(),
        year: Some(String::from("A")),
        week: None,
        day: Some(String::from("Sunday")),
        time: Some(String::from("Lent")),
        first_reading: Some(String::from("1 Sam 16:1,6-7,10-13")),
        psalm: Some(String::from("Ps 23:1-6")),
        second_reading: Some(String::from("Eph 5:8-14")),
        gospel_reading: Some(gospel.to_string()),
    }
}

/// Maps `date` to `lectionary_id`, or records it as unmatched.
pub fn map_date(persistence: &mut Persistence, date: Date, lectionary_id: Option<i64>) {
    let lectionary_match: LectionaryMatch = match lectionary_id {
        Some(id) => LectionaryMatch::matched(id, MatchType::Exact, "name"),
        None => LectionaryMatch::unmatched("unmatched"),
    };
    let entry: ProcessedOrdoEntry = ProcessedOrdoEntry {
        date,
        liturgical_name: String::from("FOURTH SUNDAY OF LENT"),
        liturgical_rank: Rank::Sunday,
        liturgical_season: Some(Season::Lent),
        liturgical_week: Some(4),
        year_cycle: SundayCycle::A,
        weekday_cycle: WeekdayCycle::II,
        lectionary_match,
    };
    persistence.upsert_mappings(&[entry]).unwrap();
}

/// Two Lent Sunday rows, with the Fourth Sunday of Lent mapped to the man
/// born blind (Jn 9).
pub fn create_test_persistence_with_mapping() -> Persistence {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .upsert_lectionary(&[
            create_test_lectionary_entry(MAN_BORN_BLIND, "Fourth Sunday of Lent", "Jn 9:1-41"),
            create_test_lectionary_entry(WOMAN_AT_THE_WELL, "Third Sunday of Lent", "Jn 4:5-42"),
        ])
        .unwrap();
    map_date(&mut persistence, LENT_IV, Some(MAN_BORN_BLIND));
    persistence
}

/// Creates an entry for `date` and walks it to `status`.
pub fn create_test_schedule_entry(
    persistence: &mut Persistence,
    date: Date,
    status: ScheduleStatus,
) -> i64 {
    let schedule_id: i64 = create_schedule_entry(persistence, date).unwrap();
    if status != ScheduleStatus::Pending {
        transition_status(persistence, schedule_id, status).unwrap();
    }
    schedule_id
}

pub fn load_entry(persistence: &mut Persistence, schedule_id: i64) -> ScheduleEntry {
    persistence
        .get_schedule_entry(schedule_id)
        .unwrap()
        .expect("schedule entry exists")
}
