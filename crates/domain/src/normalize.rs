// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Name normalizer.
//!
//! Produces the key Ordo names and lectionary names are compared on. The
//! result is never displayed.

use crate::patterns::compile;
use crate::vocabulary::{FEAST_ALIASES, ordinal_alternation, ordinal_value};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:\d{1,2}\s+[A-Z]+\s*[–—-]\s*)+"));

static YEAR_SUFFIX: LazyLock<Regex> = LazyLock::new(|| compile(r",?\s*YEAR\s+[ABC]\s*$"));

static ORDINAL: LazyLock<Regex> =
    LazyLock::new(|| compile(&format!(r"\b({})\b", ordinal_alternation())));

static DAY_BEFORE_WEEK: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^(?:\d{1,2}\s+)+(\d{1,2})\b"));

static SAINTS: LazyLock<Regex> = LazyLock::new(|| compile(r"\bSS\b\.?\s+"));
static SAINT: LazyLock<Regex> = LazyLock::new(|| compile(r"\bST\b\.?\s+"));

static IN_SEASON: LazyLock<Regex> = LazyLock::new(|| compile(r"\bIN (LENT|ADVENT|EASTER)\b"));

static ORDINARY_TIME: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\s*\b(IN|OF) ORDINARY TIME\b"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| compile(r"\s+"));

/// Normalizes a liturgical day name into a matching key.
///
/// The rewrite is repeated until it reaches a fixpoint, so
/// `normalize(normalize(x)) == normalize(x)` holds for every input. Every
/// rule either shortens the text or emits text no rule matches again, so the
/// loop terminates.
///
/// # Examples
///
/// ```
/// use lectio_domain::normalize;
///
/// assert_eq!(normalize("29 First Sunday Of Advent, Year A"), "1 SUNDAY OF ADVENT");
/// ```
#[must_use]
pub fn normalize(name: &str) -> String {
    let mut current: String = normalize_pass(name);
    loop {
        let next: String = normalize_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn normalize_pass(name: &str) -> String {
    let mut text: String = name.trim().to_uppercase();

    for (from, to) in FEAST_ALIASES {
        if text.contains(from) {
            text = text.replacen(from, to, 1);
        }
    }

    text = DATE_PREFIX.replace(&text, "").into_owned();
    text = YEAR_SUFFIX.replace(&text, "").into_owned();
    text = ORDINAL
        .replace_all(&text, |captures: &Captures| {
            captures
                .get(1)
                .and_then(|m| ordinal_value(m.as_str()))
                .map_or_else(|| captures[0].to_string(), |n| n.to_string())
        })
        .into_owned();
    // "29 1 SUNDAY OF ADVENT": day numbers left in front of a week number.
    text = DAY_BEFORE_WEEK.replace(&text, "$1").into_owned();
    text = SAINTS.replace_all(&text, "SAINTS ").into_owned();
    text = SAINT.replace_all(&text, "SAINT ").into_owned();
    text = IN_SEASON.replace_all(&text, "OF $1").into_owned();
    text = ORDINARY_TIME.replace_all(&text, "").into_owned();

    WHITESPACE.replace_all(&text, " ").trim().to_string()
}
