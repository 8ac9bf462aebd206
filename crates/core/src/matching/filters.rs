// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Year-cycle and season filters applied to lectionary candidates.

use super::PreparedRow;
use lectio_domain::vocabulary::CYCLE_NEUTRAL_YEAR_TAGS;
use lectio_domain::{SundayCycle, WeekdayCycle};

/// Returns the Sunday cycles a row's `year` tag names, if the tag is a
/// cycle tag such as "A" or "A/B/C". Neutral and unknown tags name none.
pub fn sunday_cycles_of(row: &PreparedRow) -> Option<Vec<SundayCycle>> {
    let tag: &str = row.year_tag.as_deref()?;
    if CYCLE_NEUTRAL_YEAR_TAGS.contains(&tag) {
        return None;
    }
    let cycles: Vec<SundayCycle> = tag
        .split(|c: char| c == '/' || c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect::<Result<Vec<SundayCycle>, _>>()
        .ok()?;
    if cycles.is_empty() { None } else { Some(cycles) }
}

/// A row passes when it carries no cycle tag or names the given cycle.
pub fn matches_sunday_cycle(row: &PreparedRow, cycle: SundayCycle) -> bool {
    sunday_cycles_of(row).is_none_or(|cycles| cycles.contains(&cycle))
}

/// A row passes when it carries no weekday tag or names the given cycle.
pub fn matches_weekday_cycle(row: &PreparedRow, cycle: WeekdayCycle) -> bool {
    match row.year_tag.as_deref() {
        Some(tag @ ("1" | "2" | "I" | "II")) => tag
            .parse::<WeekdayCycle>()
            .is_ok_and(|tagged| tagged == cycle),
        _ => true,
    }
}

/// A row passes when it has no `time` or its time equals the expected one.
pub fn matches_time(row: &PreparedRow, expected: Option<&str>) -> bool {
    match (row.time.as_deref(), expected) {
        (Some(time), Some(expected)) => time.eq_ignore_ascii_case(expected),
        _ => true,
    }
}

/// Advent weekday rows labelled "Year A" or "Year B/C" only serve the
/// cycles they name.
pub fn matches_advent_weekday_label(row: &PreparedRow, cycle: SundayCycle) -> bool {
    if row.upper.contains("YEAR A") && cycle != SundayCycle::A {
        return false;
    }
    if row.upper.contains("YEAR B/C") && cycle == SundayCycle::A {
        return false;
    }
    true
}

/// Returns true if `needle` occurs in `haystack` bounded by non-alphanumeric
/// characters or the ends of the string.
pub fn contains_phrase(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    haystack.match_indices(needle).any(|(start, _)| {
        let before: Option<char> = haystack[..start].chars().next_back();
        let after: Option<char> = haystack[start + needle.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}
