// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_cycles, create_test_engine, date};
use crate::{MatchContext, MatchingEngine};
use lectio_domain::{
    LectionaryMatch, MatchType, Rank, YearCycleTable, infer_rank, infer_season, infer_week,
};
use time::{Date, Month};

fn context_for(day: Date, name: &str) -> MatchContext {
    let cycles: YearCycleTable = create_test_cycles();
    MatchContext {
        date: day,
        name: String::from(name),
        rank: infer_rank(name),
        season: infer_season(name),
        week: infer_week(name),
        cycles: cycles.resolve(day).unwrap(),
    }
}

fn find(day: Date, name: &str) -> LectionaryMatch {
    let engine: MatchingEngine = create_test_engine();
    engine.find(&context_for(day, name))
}

// ============================================================================
// Name and Sunday matching
// ============================================================================

#[test]
fn test_first_sunday_of_advent_uses_next_year_cycle() {
    // Advent 2025 opens liturgical year 2026, which is cycle A.
    let found: LectionaryMatch = find(date(2025, Month::November, 30), "FIRST SUNDAY OF ADVENT");
    assert_eq!(found.lectionary_id(), Some(1));
    assert_eq!(found.match_type(), MatchType::Exact);
    assert_eq!(found.match_method(), "name");

    let found: LectionaryMatch = find(date(2026, Month::November, 29), "FIRST SUNDAY OF ADVENT");
    assert_eq!(found.lectionary_id(), Some(2));
}

#[test]
fn test_ordinary_weekday_respects_weekday_cycle() {
    let found: LectionaryMatch = find(
        date(2026, Month::July, 13),
        "Monday of the Fifteenth Week in Ordinary Time",
    );
    assert_eq!(found.lectionary_id(), Some(18));
    assert_eq!(found.match_method(), "name");
}

#[test]
fn test_sunday_pattern_matches_numbered_heading() {
    let found: LectionaryMatch = find(date(2026, Month::July, 5), "14 ORDINARY");
    assert_eq!(found.lectionary_id(), Some(15));
    assert_eq!(found.match_type(), MatchType::Exact);
    assert_eq!(found.match_method(), "sunday_pattern");
}

#[test]
fn test_sunday_pattern_respects_season_time() {
    // Week 2 of Lent must not land on an Advent or Ordinary Time row.
    let found: LectionaryMatch = find(date(2026, Month::March, 1), "2 LENT");
    assert_eq!(found.lectionary_id(), Some(20));
    assert_eq!(found.match_method(), "sunday_pattern");
}

// ============================================================================
// Triduum, fixed feasts and Advent propers
// ============================================================================

#[test]
fn test_triduum_days() {
    let found: LectionaryMatch = find(date(2026, Month::April, 2), "Holy Thursday");
    assert_eq!(found.lectionary_id(), Some(7));
    assert_eq!(found.match_method(), "triduum");

    let found: LectionaryMatch = find(
        date(2026, Month::April, 3),
        "Good Friday of the Passion of the Lord",
    );
    assert_eq!(found.lectionary_id(), Some(8));

    let found: LectionaryMatch =
        find(date(2026, Month::April, 4), "The Easter Vigil in the Holy Night");
    assert_eq!(found.lectionary_id(), Some(9));

    let found: LectionaryMatch = find(date(2026, Month::May, 24), "PENTECOST SUNDAY");
    assert_eq!(found.lectionary_id(), Some(11));
}

#[test]
fn test_fixed_feast_by_date_follows_sunday_cycle() {
    let found: LectionaryMatch = find(
        date(2026, Month::August, 6),
        "THE TRANSFIGURATION OF THE LORD",
    );
    assert_eq!(found.lectionary_id(), Some(13));
    assert_eq!(found.match_method(), "date");

    let found: LectionaryMatch = find(
        date(2027, Month::August, 6),
        "THE TRANSFIGURATION OF THE LORD",
    );
    assert_eq!(found.lectionary_id(), Some(14));
}

#[test]
fn test_advent_proper_date_only_name() {
    let found: LectionaryMatch = find(date(2025, Month::December, 17), "17 December");
    assert_eq!(found.lectionary_id(), Some(5));
    assert_eq!(found.match_method(), "advent_proper");
}

// ============================================================================
// Partial matching and memorial fallback
// ============================================================================

#[test]
fn test_substring_match_is_partial() {
    let found: LectionaryMatch = find(date(2026, Month::August, 8), "St Mary MacKillop, virgin");
    assert_eq!(found.lectionary_id(), Some(19));
    assert_eq!(found.match_type(), MatchType::Partial);
    assert_eq!(found.match_method(), "substring");
}

#[test]
fn test_memorial_falls_back_to_ordinary_weekday() {
    let found: LectionaryMatch = find(date(2026, Month::July, 13), "Saint Henry");
    assert_eq!(found.lectionary_id(), Some(18));
    assert_eq!(found.match_method(), "weekday_for_memorial");
}

#[test]
fn test_memorial_falls_back_to_lent_weekday() {
    let found: LectionaryMatch = find(date(2026, Month::March, 11), "Saint Eulogius");
    assert_eq!(found.lectionary_id(), Some(6));
    assert_eq!(found.match_method(), "weekday_for_memorial");
}

#[test]
fn test_feria_without_match_is_not_defaulted() {
    let found: LectionaryMatch = find(date(2026, Month::July, 14), "Tuesday");
    assert_eq!(found.lectionary_id(), None);
    assert_eq!(found.match_type(), MatchType::NoMatch);
    assert_eq!(found.match_method(), "unmatched");
}

#[test]
fn test_declared_feast_skips_memorial_fallback() {
    let engine: MatchingEngine = create_test_engine();
    let mut context: MatchContext = context_for(date(2026, Month::July, 13), "Saint Henry");
    context.rank = Rank::Feast;
    assert_eq!(engine.find(&context).lectionary_id(), None);
}

#[test]
fn test_engine_lookup_by_id() {
    let engine: MatchingEngine = create_test_engine();
    assert_eq!(engine.len(), 21);
    assert_eq!(
        engine.entry(19).map(|entry| entry.liturgical_day.as_str()),
        Some("St Mary MacKillop")
    );
    assert!(engine.entry(999).is_none());
}
