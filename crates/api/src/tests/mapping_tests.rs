// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lectio::{ExtractionStats, MatchReport, YearCycleCache};
use lectio_domain::{
    MatchType, OrdoEntry, ReadingsOrigin, ScheduleEntry, ScheduleStatus, YearCycleTable,
};
use lectio_persistence::{MappedDay, Persistence, SqliteYearCycleSource};
use time::macros::date;

use super::helpers::{create_test_persistence, create_test_schedule_entry, load_entry};
use crate::{
    ApiError, ReadingsOptions, ResolvedReadings, build_mapping, get_readings,
    import_lectionary_csv, import_ordo, mapping_report,
};

const ADVENT_ORDO: &str = "<Part>\n\
<P>NOVEMBER 2025</P>\n\
<P>30 SUNDAY FIRST SUNDAY OF ADVENT violet</P>\n\
<P>Is 2:1-5: All nations will stream to the mountain</P>\n\
<P>Ps 122:1-2, 4-9</P>\n\
<P>Rom 13:11-14: Our salvation is near</P>\n\
<P>Mt 24:37-44: Stay awake</P>\n\
<P>1 Monday DECEMBER Monday of the first week of Advent violet</P>\n\
<P>Is 4:2-6: The branch of the Lord</P>\n\
<P>Ps 122:1-9</P>\n\
<P>Mt 8:5-11: The centurion&apos;s faith</P>\n\
</Part>";

const ADVENT_LECTIONARY: &str = "admin_order,liturgical_day,year,week,day,time,first_reading,psalm,second_reading,gospel_reading\n\
1,First Sunday of Advent,A,1,Sunday,Advent,Is 2:1-5,Ps 122:1-9,Rom 13:11-14,Mt 24:37-44\n\
2,First Sunday of Advent,B,1,Sunday,Advent,Is 63:16-17; 64:1-8,Ps 80:2-3,1 Cor 1:3-9,Mk 13:33-37\n\
3,Monday of the First Week of Advent,Season,1,Monday,Advent,Is 4:2-6,Ps 122:1-9,,Mt 8:5-11\n";

/// Extracted Ordo, lectionary and year cycles for the start of Advent 2025.
fn create_test_persistence_with_ordo() -> (Persistence, YearCycleCache<SqliteYearCycleSource>) {
    let mut persistence: Persistence = create_test_persistence();
    persistence
        .replace_year_cycles(&YearCycleTable::computed(2025, 2026).unwrap())
        .unwrap();
    import_lectionary_csv(&mut persistence, ADVENT_LECTIONARY).unwrap();
    import_ordo(
        &mut persistence,
        ADVENT_ORDO,
        date!(2025 - 11 - 30),
        date!(2025 - 12 - 01),
    )
    .unwrap();
    let cache: YearCycleCache<SqliteYearCycleSource> =
        YearCycleCache::new(persistence.year_cycle_source());
    (persistence, cache)
}

#[test]
fn test_import_ordo_stores_one_entry_per_date() {
    let mut persistence: Persistence = create_test_persistence();
    let stats: ExtractionStats = import_ordo(
        &mut persistence,
        ADVENT_ORDO,
        date!(2025 - 11 - 29),
        date!(2025 - 12 - 02),
    )
    .unwrap();

    let stored: Vec<OrdoEntry> = persistence
        .list_ordo_entries(date!(2025 - 11 - 29), date!(2025 - 12 - 02))
        .unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.from_header, 2);
    assert_eq!(stored.len(), 4);
    assert_eq!(stored[1].raw_name, "FIRST SUNDAY OF ADVENT");
}

#[test]
fn test_import_ordo_rejects_inverted_range() {
    let mut persistence: Persistence = create_test_persistence();
    let result: Result<ExtractionStats, ApiError> = import_ordo(
        &mut persistence,
        ADVENT_ORDO,
        date!(2025 - 12 - 02),
        date!(2025 - 11 - 29),
    );
    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_build_mapping_matches_by_cycle() {
    let (mut persistence, cache) = create_test_persistence_with_ordo();

    let report: MatchReport = build_mapping(
        &mut persistence,
        &cache,
        date!(2025 - 11 - 30),
        date!(2025 - 12 - 01),
    )
    .unwrap();

    assert_eq!(report.total, 2);
    assert_eq!(report.unmatched, 0);
    let sunday: MappedDay = persistence
        .get_mapped_day(date!(2025 - 11 - 30))
        .unwrap()
        .unwrap();
    assert_eq!(sunday.entry.lectionary_match.lectionary_id(), Some(1));
    assert_eq!(sunday.entry.lectionary_match.match_type(), MatchType::Exact);
    assert_eq!(
        sunday.lectionary.unwrap().gospel_reading.as_deref(),
        Some("Mt 24:37-44")
    );
    let monday: MappedDay = persistence
        .get_mapped_day(date!(2025 - 12 - 01))
        .unwrap()
        .unwrap();
    assert_eq!(monday.entry.lectionary_match.lectionary_id(), Some(3));
}

#[test]
fn test_stored_report_matches_build_report() {
    let (mut persistence, cache) = create_test_persistence_with_ordo();
    let built: MatchReport = build_mapping(
        &mut persistence,
        &cache,
        date!(2025 - 11 - 30),
        date!(2025 - 12 - 01),
    )
    .unwrap();

    let stored: MatchReport =
        mapping_report(&mut persistence, date!(2025 - 11 - 30), date!(2025 - 12 - 01)).unwrap();

    assert_eq!(stored, built);
}

#[test]
fn test_build_mapping_without_year_cycles_fails() {
    let mut persistence: Persistence = create_test_persistence();
    import_ordo(
        &mut persistence,
        ADVENT_ORDO,
        date!(2025 - 11 - 30),
        date!(2025 - 11 - 30),
    )
    .unwrap();
    let cache: YearCycleCache<SqliteYearCycleSource> =
        YearCycleCache::new(persistence.year_cycle_source());

    let result: Result<MatchReport, ApiError> = build_mapping(
        &mut persistence,
        &cache,
        date!(2025 - 11 - 30),
        date!(2025 - 11 - 30),
    );

    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { ref rule, .. }) if rule == "year_cycle_provisioned"
    ));
}

#[test]
fn test_mapped_readings_reach_schedule_entries() {
    let (mut persistence, cache) = create_test_persistence_with_ordo();
    build_mapping(
        &mut persistence,
        &cache,
        date!(2025 - 11 - 30),
        date!(2025 - 12 - 01),
    )
    .unwrap();
    let schedule_id: i64 = create_test_schedule_entry(
        &mut persistence,
        date!(2025 - 11 - 30),
        ScheduleStatus::Submitted,
    );
    let entry: ScheduleEntry = load_entry(&mut persistence, schedule_id);

    let resolved: ResolvedReadings =
        get_readings(&mut persistence, &entry, ReadingsOptions::default()).unwrap();

    assert_eq!(resolved.source, ReadingsOrigin::Snapshot);
    assert_eq!(
        resolved.readings.gospel_reading.as_deref(),
        Some("Mt 24:37-44")
    );
    assert_eq!(
        resolved.readings.liturgical_day.as_deref(),
        Some("First Sunday of Advent")
    );
}
