// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, SundayCycle, WeekdayCycle, YearCycleEntry, YearCycleTable, YearCycles};
use time::Duration;
use time::macros::date;

fn create_test_table() -> YearCycleTable {
    YearCycleTable::from_entries([
        YearCycleEntry::new(2025, SundayCycle::C, WeekdayCycle::I, date!(2025 - 11 - 30)).unwrap(),
        YearCycleEntry::new(2026, SundayCycle::A, WeekdayCycle::II, date!(2026 - 11 - 29)).unwrap(),
        YearCycleEntry::new(2027, SundayCycle::B, WeekdayCycle::I, date!(2027 - 11 - 28)).unwrap(),
    ])
    .unwrap()
}

#[test]
fn test_resolve_day_before_advent_uses_current_year() {
    let table: YearCycleTable = create_test_table();
    let cycles: YearCycles = table.resolve(date!(2025 - 11 - 29)).unwrap();
    assert_eq!(cycles.sunday_cycle, SundayCycle::C);
    assert_eq!(cycles.weekday_cycle, WeekdayCycle::I);
}

#[test]
fn test_resolve_first_sunday_of_advent_uses_next_year() {
    let table: YearCycleTable = create_test_table();
    let cycles: YearCycles = table.resolve(date!(2025 - 11 - 30)).unwrap();
    assert_eq!(cycles.sunday_cycle, SundayCycle::A);
    assert_eq!(cycles.weekday_cycle, WeekdayCycle::II);
}

#[test]
fn test_cycle_flips_exactly_at_advent_boundary() {
    let table: YearCycleTable = create_test_table();
    for year in [2025, 2026] {
        let advent = table.entry(year).unwrap().first_sunday_of_advent();
        let before: YearCycles = table.resolve(advent - Duration::days(1)).unwrap();
        let at: YearCycles = table.resolve(advent).unwrap();
        let two_before: YearCycles = table.resolve(advent - Duration::days(2)).unwrap();
        assert_ne!(before, at, "cycles must flip at Advent {year}");
        assert_eq!(before, two_before, "cycles must not flip before Advent {year}");
    }
}

#[test]
fn test_resolve_missing_year_is_an_error() {
    let table: YearCycleTable = create_test_table();
    assert_eq!(
        table.resolve(date!(2024 - 06 - 01)),
        Err(DomainError::YearCycleNotFound { year: 2024 })
    );
}

#[test]
fn test_resolve_after_advent_needs_following_year() {
    let table: YearCycleTable = create_test_table();
    assert_eq!(
        table.resolve(date!(2027 - 12 - 25)),
        Err(DomainError::YearCycleNotFound { year: 2028 })
    );
    assert!(table.resolve(date!(2027 - 11 - 27)).is_ok());
}

#[test]
fn test_duplicate_year_rejected() {
    let mut table: YearCycleTable = create_test_table();
    let duplicate: YearCycleEntry =
        YearCycleEntry::new(2026, SundayCycle::A, WeekdayCycle::II, date!(2026 - 11 - 29)).unwrap();
    assert_eq!(table.insert(duplicate), Err(DomainError::DuplicateYearCycle(2026)));
}

#[test]
fn test_first_sunday_of_advent_validation() {
    // Not a Sunday.
    assert!(YearCycleEntry::new(2025, SundayCycle::C, WeekdayCycle::I, date!(2025 - 11 - 29)).is_err());
    // A Sunday, but far too early.
    assert!(YearCycleEntry::new(2025, SundayCycle::C, WeekdayCycle::I, date!(2025 - 11 - 16)).is_err());
    // Wrong calendar year.
    assert!(YearCycleEntry::new(2026, SundayCycle::A, WeekdayCycle::II, date!(2025 - 11 - 30)).is_err());
}

#[test]
fn test_computed_table_agrees_with_reference_rows() {
    let computed: YearCycleTable = YearCycleTable::computed(2025, 2027).unwrap();
    assert_eq!(computed, create_test_table());
}

#[test]
fn test_cycle_parsing() {
    assert_eq!("b".parse::<SundayCycle>().unwrap(), SundayCycle::B);
    assert_eq!("II".parse::<WeekdayCycle>().unwrap(), WeekdayCycle::II);
    assert_eq!("1".parse::<WeekdayCycle>().unwrap(), WeekdayCycle::I);
    assert!("D".parse::<SundayCycle>().is_err());
    assert!("III".parse::<WeekdayCycle>().is_err());
}
