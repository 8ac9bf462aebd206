// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod initialization_tests;
mod lectionary_tests;
mod schedule_tests;

use lectio_domain::{
    LectionaryEntry, LectionaryMatch, MatchType, NameSource, OrdoEntry, ProcessedOrdoEntry, Rank,
    Readings, ScriptureReference, Season, SundayCycle, WeekdayCycle, YearCycleTable,
};
use time::Date;

use crate::Persistence;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("in-memory database")
}

/// Year-cycle rows for 2025 through 2027 derived from the calendar.
pub fn create_test_year_cycles() -> YearCycleTable {
    YearCycleTable::computed(2025, 2027).expect("computed year cycles")
}

pub fn create_test_lectionary_entry(admin_order: i64, liturgical_day: &str, gospel: &str) -> LectionaryEntry {
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

pub fn create_test_ordo_entry(date: Date, raw_name: &str) -> OrdoEntry {
    OrdoEntry {
        date,
        day_of_week: date.weekday(),
        raw_name: raw_name.to_string(),
        declared_rank: None,
        name_source: NameSource::Header,
        readings: Readings {
            first_reading: Some(ScriptureReference::new("1 Sam", 16, "1,6-7,10-13")),
            psalm: Some(ScriptureReference::new("Ps", 23, "1-6")),
            second_reading: None,
            gospel: Some(ScriptureReference::new("Jn", 9, "1-41")),
        },
    }
}

/// A mapping row for `date`, matched to `lectionary_id` when given.
pub fn create_test_processed_entry(
    date: Date,
    liturgical_name: &str,
    lectionary_id: Option<i64>,
) -> ProcessedOrdoEntry {
    let lectionary_match: LectionaryMatch = match lectionary_id {
        Some(id) => LectionaryMatch::matched(id, MatchType::Exact, "name"),
        None => LectionaryMatch::unmatched("unmatched"),
    };
    ProcessedOrdoEntry {
        date,
        liturgical_name: liturgical_name.to_string(),
        liturgical_rank: Rank::Sunday,
        liturgical_season: Some(Season::Lent),
        liturgical_week: Some(4),
        year_cycle: SundayCycle::A,
        weekday_cycle: WeekdayCycle::II,
        lectionary_match,
    }
}
