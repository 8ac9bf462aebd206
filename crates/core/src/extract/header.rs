// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day header recognition and cleanup.

use crate::patterns::compile;
use lectio_domain::Rank;
use lectio_domain::vocabulary::MONTH_NAMES;
use regex::Regex;
use std::sync::LazyLock;
use time::Month;

static DAY_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"(?i)^(\d{1,2})\s+(SUNDAY|MONDAY|TUESDAY|WEDNESDAY|THURSDAY|FRIDAY|SATURDAY)\b")
});

// Month names are matched in capitals or title case only, so "may" in
// running text is never read as a month.
static MONTH_NAME: LazyLock<Regex> = LazyLock::new(|| {
    let title_case: Vec<String> = MONTH_NAMES
        .iter()
        .map(|name| {
            let (first, rest) = name.split_at(1);
            format!("{first}{}", rest.to_lowercase())
        })
        .collect();
    compile(&format!(
        r"\b({}|{})\b",
        MONTH_NAMES.join("|"),
        title_case.join("|")
    ))
});

static COLOUR: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(violet|green|white|red|rose|black)\b"));

static RANK_WORD: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(solemnity|feast|memorial|optional)\b"));

static WITH_OCTAVE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)\s+with\s+octave\b"));

static MASS_OF: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^Mass of \d{1,2} \w+"));

static PREFACE: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)Preface.*$"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

static EDGE_PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^[\s,;:–—-]+|[\s,;:–—-]+$"));

/// A recognized day header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayHeader {
    /// The day-of-month the header opens.
    pub day: u8,
    /// A month named in the header segment, if any.
    pub explicit_month: Option<Month>,
    /// The cleaned liturgical day name. May be empty.
    pub name: String,
    /// The rank printed in the header, if any.
    pub declared_rank: Option<Rank>,
}

/// Recognizes a segment that opens a new day, such as "29 SUNDAY FIRST
/// SUNDAY OF ADVENT violet".
///
/// The returned name has the day number, weekday, month names, liturgical
/// colours, rank words, octave notes, "Mass of ..." prefixes and any
/// "Preface ..." tail removed.
#[must_use]
pub fn parse_day_header(segment: &str) -> Option<DayHeader> {
    let captures: regex::Captures<'_> = DAY_HEADER.captures(segment)?;
    let day: u8 = captures.get(1)?.as_str().parse().ok()?;
    if day == 0 || day > 31 {
        return None;
    }

    let explicit_month: Option<Month> = MONTH_NAME
        .captures(segment)
        .and_then(|m| month_from_name(&m[1]));
    let declared_rank: Option<Rank> = declared_rank(segment);

    let mut name: String = DAY_HEADER.replace(segment, "").into_owned();
    name = MONTH_NAME.replace_all(&name, "").into_owned();
    name = COLOUR.replace_all(&name, "").into_owned();
    name = RANK_WORD.replace_all(&name, "").into_owned();
    name = WITH_OCTAVE.replace_all(&name, "").into_owned();
    name = MASS_OF.replace(name.trim(), "").into_owned();
    name = PREFACE.replace(&name, "").into_owned();
    name = WHITESPACE.replace_all(&name, " ").into_owned();
    name = EDGE_PUNCTUATION.replace_all(&name, "").into_owned();

    Some(DayHeader {
        day,
        explicit_month,
        name,
        declared_rank,
    })
}

/// Reads the rank a header prints before the rank words are stripped.
fn declared_rank(segment: &str) -> Option<Rank> {
    let found: Vec<String> = RANK_WORD
        .find_iter(segment)
        .map(|m| m.as_str().to_uppercase())
        .collect();
    let has = |word: &str| found.iter().any(|f| f == word);

    if has("SOLEMNITY") {
        Some(Rank::Solemnity)
    } else if has("FEAST") {
        Some(Rank::Feast)
    } else if has("OPTIONAL") {
        Some(Rank::OptionalMemorial)
    } else if has("MEMORIAL") {
        Some(Rank::Memorial)
    } else {
        None
    }
}

fn month_from_name(name: &str) -> Option<Month> {
    let upper: String = name.to_uppercase();
    let index: usize = MONTH_NAMES.iter().position(|m| *m == upper)?;
    Month::try_from(u8::try_from(index + 1).ok()?).ok()
}
