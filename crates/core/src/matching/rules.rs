// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The individual matching rules, in chain order.

use super::filters::{
    contains_phrase, matches_advent_weekday_label, matches_sunday_cycle, matches_time,
    matches_weekday_cycle,
};
use super::{MatchContext, PreparedRow};
use crate::patterns::compile;
use lectio_domain::vocabulary::{FIXED_FEASTS, MONTH_NAMES, ordinal_word};
use lectio_domain::{Season, is_bare_weekday, normalize, season_position, weekday_title};
use regex::Regex;
use std::sync::LazyLock;
use time::Month;

/// A rule returns the first acceptable row, or `None` to defer to the next
/// rule in the chain.
pub type Rule = for<'a> fn(&'a [PreparedRow], &MatchContext) -> Option<&'a PreparedRow>;

static DATE_ONLY_DECEMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\d{1,2}\s+(DECEMBER|DEC)$"));

/// Rows the general year filters accept for this day: the Sunday cycle
/// always applies to A/B/C-tagged rows, and the weekday cycle to 1/2-tagged
/// rows on any day but Sunday.
fn passes_year_filters(row: &PreparedRow, context: &MatchContext) -> bool {
    matches_sunday_cycle(row, context.cycles.sunday_cycle)
        && (context.is_sunday() || matches_weekday_cycle(row, context.cycles.weekday_cycle))
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Holy Thursday, Good Friday, the Easter Vigil and Pentecost.
pub fn triduum<'a>(rows: &'a [PreparedRow], context: &MatchContext) -> Option<&'a PreparedRow> {
    let name: String = context.upper();
    let cycle = context.cycles.sunday_cycle;

    if contains_any(&name, &["HOLY THURSDAY", "LORD'S SUPPER", "MAUNDY"]) {
        return rows
            .iter()
            .find(|row| contains_any(&row.upper, &["HOLY THURSDAY", "LORD'S SUPPER"]));
    }

    if contains_any(&name, &["GOOD FRIDAY", "LORD'S PASSION"]) {
        return rows
            .iter()
            .find(|row| contains_any(&row.upper, &["GOOD FRIDAY", "LORD'S PASSION"]));
    }

    if name.contains("EASTER VIGIL") && !name.contains("SUNDAY") {
        return rows
            .iter()
            .find(|row| row.upper.contains("EASTER VIGIL") && matches_sunday_cycle(row, cycle));
    }

    if name == "PENTECOST" || name.contains("PENTECOST SUNDAY") {
        return rows.iter().find(|row| {
            row.upper.contains("PENTECOST SUNDAY")
                && !row.upper.contains("VIGIL")
                && matches_sunday_cycle(row, cycle)
        });
    }

    None
}

/// Feasts fixed to a calendar date, found by a date prefix such as
/// "6 August" or "6th August" plus the feast's keyword.
pub fn fixed_feast<'a>(rows: &'a [PreparedRow], context: &MatchContext) -> Option<&'a PreparedRow> {
    let name: String = context.upper();
    let (_, keyword) = FIXED_FEASTS
        .iter()
        .find(|(phrase, _)| contains_phrase(&name, phrase))?;
    let forms: [String; 2] = date_forms(context.date.day(), context.date.month())?;

    rows.iter().find(|row| {
        forms.iter().any(|form| contains_phrase(&row.upper, form))
            && contains_phrase(&row.upper, keyword)
            && matches_sunday_cycle(row, context.cycles.sunday_cycle)
    })
}

/// The dated Advent weekdays of 17 to 24 December.
pub fn advent_proper<'a>(rows: &'a [PreparedRow], context: &MatchContext) -> Option<&'a PreparedRow> {
    let date = context.date;
    if date.month() != Month::December || !(17..=24).contains(&date.day()) || context.is_sunday() {
        return None;
    }
    if !DATE_ONLY_DECEMBER.is_match(&context.upper()) {
        return None;
    }
    let forms: [String; 2] = date_forms(date.day(), Month::December)?;

    rows.iter().find(|row| {
        row.time
            .as_deref()
            .is_some_and(|time| time.eq_ignore_ascii_case("Advent"))
            && forms.iter().any(|form| contains_phrase(&row.upper, form))
    })
}

/// Exact equality of normalized names.
pub fn exact_name<'a>(rows: &'a [PreparedRow], context: &MatchContext) -> Option<&'a PreparedRow> {
    let key: String = context.normalized();
    if key.is_empty() {
        return None;
    }
    rows.iter()
        .find(|row| row.normalized == key && passes_year_filters(row, context))
}

/// Sundays of the seasons, found by week number: every word of the row's
/// normalized name must appear in "N SUNDAY OF <SEASON>", including N.
pub fn sunday_pattern<'a>(
    rows: &'a [PreparedRow],
    context: &MatchContext,
) -> Option<&'a PreparedRow> {
    if !context.is_sunday() {
        return None;
    }
    let season: Season = context.season?;
    let week: u8 = context.week?;
    let pattern: String = match season {
        Season::Advent => format!("{week} SUNDAY OF ADVENT"),
        Season::Lent => format!("{week} SUNDAY OF LENT"),
        Season::Easter => format!("{week} SUNDAY OF EASTER"),
        Season::OrdinaryTime => format!("{week} SUNDAY"),
        _ => return None,
    };
    let pattern_words: Vec<&str> = pattern.split_whitespace().collect();
    let week_word: String = week.to_string();
    let expected_time: Option<&str> = season.lectionary_time();

    rows.iter().find(|row| {
        if !matches_time(row, expected_time)
            || !matches_sunday_cycle(row, context.cycles.sunday_cycle)
        {
            return false;
        }
        let words: Vec<&str> = row.normalized.split_whitespace().collect();
        words.contains(&week_word.as_str()) && words.iter().all(|word| pattern_words.contains(word))
    })
}

/// Partial containment of normalized names in either direction.
///
/// Skipped for bare weekday names, which would otherwise land on an
/// arbitrary row of the season.
pub fn substring<'a>(rows: &'a [PreparedRow], context: &MatchContext) -> Option<&'a PreparedRow> {
    let key: String = context.normalized();
    if key.is_empty() || is_bare_weekday(&context.name) {
        return None;
    }
    let expected_time: Option<&str> = if context.rank.is_feast_or_solemnity() {
        None
    } else {
        context.season.and_then(|season| season.lectionary_time())
    };
    let advent_weekday: bool = !context.is_sunday() && context.season == Some(Season::Advent);

    rows.iter().find(|row| {
        !row.normalized.is_empty()
            && matches_time(row, expected_time)
            && passes_year_filters(row, context)
            && (!advent_weekday || matches_advent_weekday_label(row, context.cycles.sunday_cycle))
            && (contains_phrase(&key, &row.normalized) || contains_phrase(&row.normalized, &key))
    })
}

/// Memorials without a proper: the weekday of the season and week the date
/// falls in, taken from the computed calendar when the name is silent.
pub fn weekday_for_memorial<'a>(
    rows: &'a [PreparedRow],
    context: &MatchContext,
) -> Option<&'a PreparedRow> {
    if !context.rank.is_memorial() || context.is_sunday() {
        return None;
    }
    let position = season_position(context.date).ok()?;
    let season: Season = context.season.unwrap_or(position.season);
    let week: u8 = context.week.or(position.week)?;
    let day: &str = weekday_title(context.date.weekday());
    let ordinal: &str = ordinal_word(week)?;

    let phrase: String = match season {
        Season::Advent => format!("{day} of the {ordinal} week of Advent"),
        Season::Lent => format!("{day} of the {ordinal} week of Lent"),
        Season::Easter => format!("{day} of the {ordinal} week of Easter"),
        Season::OrdinaryTime => format!("{day} of the {ordinal} week in Ordinary Time"),
        _ => return None,
    };
    let key: String = normalize(&phrase);
    let expected_time: Option<&str> = season.lectionary_time();

    rows.iter().find(|row| {
        matches_time(row, expected_time)
            && matches_weekday_cycle(row, context.cycles.weekday_cycle)
            && contains_phrase(&row.normalized, &key)
    })
}

/// "17 DECEMBER" and "17TH DECEMBER" for a day and month.
fn date_forms(day: u8, month: Month) -> Option<[String; 2]> {
    let index: usize = usize::from(u8::from(month)).checked_sub(1)?;
    let month_name: &str = MONTH_NAMES.get(index)?;
    Some([
        format!("{day} {month_name}"),
        format!("{day}{} {month_name}", ordinal_suffix(day)),
    ])
}

const fn ordinal_suffix(day: u8) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "TH",
        (1, _) => "ST",
        (2, _) => "ND",
        (3, _) => "RD",
        _ => "TH",
    }
}
