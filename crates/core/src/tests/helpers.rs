// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::MatchingEngine;
use lectio_domain::{LectionaryEntry, NameSource, OrdoEntry, Readings, YearCycleTable};
use time::{Date, Month};

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

pub fn create_test_row(
    admin_order: i64,
    liturgical_day: &str,
    year: Option<&str>,
    time: Option<&str>,
) -> LectionaryEntry {
    LectionaryEntry {
        admin_order,
        liturgical_day: String::from(liturgical_day),
        year: year.map(String::from),
        week: None,
        day: None,
        time: time.map(String::from),
        first_reading: Some(format!("First reading {admin_order}")),
        psalm: Some(format!("Psalm {admin_order}")),
        second_reading: None,
        gospel_reading: Some(format!("Gospel {admin_order}")),
    }
}

/// A small lectionary covering every matching rule.
pub fn create_test_lectionary() -> Vec<LectionaryEntry> {
    vec![
        create_test_row(1, "First Sunday of Advent", Some("A"), Some("Advent")),
        create_test_row(2, "First Sunday of Advent", Some("B"), Some("Advent")),
        create_test_row(3, "First Sunday of Advent", Some("C"), Some("Advent")),
        create_test_row(4, "Monday of the First Week of Advent", Some("Season"), Some("Advent")),
        create_test_row(5, "17 December", None, Some("Advent")),
        create_test_row(6, "Wednesday of the Third Week of Lent", None, Some("Lent")),
        create_test_row(7, "Holy Thursday - Evening Mass of the Lord's Supper", None, None),
        create_test_row(8, "Good Friday of the Lord's Passion", None, None),
        create_test_row(9, "Easter Vigil", Some("A"), None),
        create_test_row(10, "Easter Vigil", Some("B"), None),
        create_test_row(11, "Pentecost Sunday", Some("A"), Some("Easter")),
        create_test_row(12, "Pentecost Sunday", Some("B"), Some("Easter")),
        create_test_row(13, "6 August - The Transfiguration, Year A", Some("A"), None),
        create_test_row(14, "6 August - The Transfiguration, Year B", Some("B"), None),
        create_test_row(15, "Fourteenth Sunday in Ordinary Time", Some("A"), Some("Ordinary")),
        create_test_row(16, "Fourteenth Sunday in Ordinary Time", Some("B"), Some("Ordinary")),
        create_test_row(17, "Monday of the Fifteenth Week in Ordinary Time", Some("1"), Some("Ordinary")),
        create_test_row(18, "Monday of the Fifteenth Week in Ordinary Time", Some("2"), Some("Ordinary")),
        create_test_row(19, "St Mary MacKillop", None, None),
        create_test_row(20, "Second Sunday of Lent", Some("A"), Some("Lent")),
        create_test_row(21, "Second Sunday of Lent", Some("B"), Some("Lent")),
    ]
}

pub fn create_test_engine() -> MatchingEngine {
    MatchingEngine::new(create_test_lectionary())
}

pub fn create_test_cycles() -> YearCycleTable {
    YearCycleTable::computed(2023, 2027).unwrap()
}

pub fn create_test_entry(date: Date, raw_name: &str) -> OrdoEntry {
    OrdoEntry {
        date,
        day_of_week: date.weekday(),
        raw_name: String::from(raw_name),
        declared_rank: None,
        name_source: NameSource::Header,
        readings: Readings::default(),
    }
}
