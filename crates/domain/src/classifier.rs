// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day-name classifier.
//!
//! Heuristics over the Ordo's closed vocabulary that infer rank, season and
//! week from a free-text day name. They are validated against the names the
//! source calendar actually produces, not against arbitrary text.

use crate::patterns::compile;
use crate::types::{Rank, Season};
use crate::vocabulary::{
    ADVENT_KEYWORDS, CHRISTMAS_KEYWORDS, EASTER_KEYWORDS, HOLY_WEEK_KEYWORDS, LENT_KEYWORDS,
    ORDINARY_KEYWORDS, SOLEMNITY_KEYWORDS, TRIDUUM_KEYWORDS, WEEKDAY_NAMES, ordinal_alternation,
    ordinal_value,
};
use regex::Regex;
use std::sync::LazyLock;

static DECEMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\d{1,2}\s+(DECEMBER|DEC)\b"));

static NUMBERED_WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    compile(&format!(
        r"\b\d+\s+(SUNDAY|{})\b",
        WEEKDAY_NAMES.join("|")
    ))
});

static WEEKDAY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"\b({})\b", WEEKDAY_NAMES.join("|"))));

static ORDINAL_WORD: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"\b({})\b", ordinal_alternation())));

static LEADING_SEASON_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(\d+)\s+(LENT|EASTER|ADVENT|ORDINARY)\b"));

static WEEK_NUMBER: LazyLock<Regex> = LazyLock::new(|| compile(r"\bWEEK\s+(\d+)"));

static SOLEMNITY: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(SOLEMNITY_KEYWORDS));
static ADVENT: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(ADVENT_KEYWORDS));
static CHRISTMAS: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(CHRISTMAS_KEYWORDS));
static LENT: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(LENT_KEYWORDS));
static TRIDUUM: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(TRIDUUM_KEYWORDS));
static HOLY_WEEK: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(HOLY_WEEK_KEYWORDS));
static EASTER: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(EASTER_KEYWORDS));
static ORDINARY: LazyLock<Regex> = LazyLock::new(|| keyword_pattern(ORDINARY_KEYWORDS));

static SUNDAY: LazyLock<Regex> = LazyLock::new(|| compile(r"\bSUNDAY\b"));
static PASSION: LazyLock<Regex> = LazyLock::new(|| compile(r"\bPASSION\b"));
static SAINT: LazyLock<Regex> = LazyLock::new(|| compile(r"\bSAINT\b|\bST |\bST\.|^SS "));
static OPTIONAL: LazyLock<Regex> = LazyLock::new(|| compile(r"\bOPTIONAL\b"));

fn keyword_pattern(keywords: &[&str]) -> Regex {
    let alternation: Vec<String> = keywords.iter().map(|k| regex::escape(k)).collect();
    compile(&format!(r"\b({})\b", alternation.join("|")))
}

/// Infers the liturgical rank of a day from its name.
///
/// An all-caps heading that names a principal celebration is a Sunday when
/// it says so and a Solemnity otherwise. Saints' days are memorials, and
/// everything else is a feria.
#[must_use]
pub fn infer_rank(name: &str) -> Rank {
    let upper: String = name.trim().to_uppercase();

    if name.trim() == upper && SOLEMNITY.is_match(&upper) {
        return if SUNDAY.is_match(&upper) {
            Rank::Sunday
        } else {
            Rank::Solemnity
        };
    }

    if SUNDAY.is_match(&upper) || PASSION.is_match(&upper) {
        return Rank::Sunday;
    }

    if SAINT.is_match(&upper) {
        return if OPTIONAL.is_match(&upper) {
            Rank::OptionalMemorial
        } else {
            Rank::Memorial
        };
    }

    // Weekday names, "17 December"-style dates and everything else.
    Rank::Feria
}

/// Infers the liturgical season of a day from its name.
///
/// A leading "N December" date wins over every keyword. After that the
/// seasons are tried in calendar order, with the Triduum ahead of Holy Week
/// and Easter so "Holy Thursday" is not bucketed as either.
#[must_use]
pub fn infer_season(name: &str) -> Option<Season> {
    let upper: String = name.trim().to_uppercase();

    if DECEMBER_PREFIX.is_match(&upper) {
        return Some(Season::Advent);
    }

    let ordered: [(&Regex, Season); 6] = [
        (&ADVENT, Season::Advent),
        (&CHRISTMAS, Season::Christmas),
        (&LENT, Season::Lent),
        (&TRIDUUM, Season::EasterTriduum),
        (&HOLY_WEEK, Season::HolyWeek),
        (&EASTER, Season::Easter),
    ];
    if let Some((_, season)) = ordered.iter().find(|(pattern, _)| pattern.is_match(&upper)) {
        return Some(*season);
    }

    if ORDINARY.is_match(&upper) || NUMBERED_WEEKDAY.is_match(&upper) {
        return Some(Season::OrdinaryTime);
    }

    None
}

/// Infers the week-within-season number from a day name.
///
/// Ordinal words are tried first, longest first, so "TWENTY-FIRST" is 21
/// rather than 1. Then a leading "N LENT"-style number, then "WEEK N".
#[must_use]
pub fn infer_week(name: &str) -> Option<u8> {
    let upper: String = name.trim().to_uppercase();

    if let Some(found) = ORDINAL_WORD.find(&upper) {
        return ordinal_value(found.as_str());
    }

    if let Some(captures) = LEADING_SEASON_NUMBER.captures(&upper) {
        return captures.get(1).and_then(|m| m.as_str().parse().ok());
    }

    WEEK_NUMBER
        .captures(&upper)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Returns true if the name is only a weekday, such as "Tuesday".
#[must_use]
pub fn is_bare_weekday(name: &str) -> bool {
    let upper: String = name.trim().to_uppercase();
    WEEKDAY_TOKEN
        .find(&upper)
        .is_some_and(|m| m.start() == 0 && m.end() == upper.len())
}
