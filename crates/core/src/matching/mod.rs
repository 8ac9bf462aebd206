// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Lectionary matching.
//!
//! Each Ordo day is matched to a lectionary row by a fixed chain of rules.
//! The first rule that finds a candidate wins and names itself as the
//! match method; when every rule declines, the day is reported as
//! unmatched rather than defaulted to an arbitrary row.

mod filters;
mod report;
mod rules;

pub use filters::contains_phrase;
pub use report::MatchReport;

use lectio_domain::{
    LectionaryEntry, LectionaryMatch, MatchType, Rank, Season, YearCycles, normalize,
};
use time::{Date, Weekday};
use tracing::debug;

/// The method recorded when no rule matched.
pub const UNMATCHED_METHOD: &str = "unmatched";

/// A lectionary row with its comparison keys computed once.
#[derive(Debug, Clone)]
pub struct PreparedRow {
    entry: LectionaryEntry,
    /// The normalized name.
    normalized: String,
    /// The raw name uppercased with typographic apostrophes folded.
    upper: String,
    /// The `year` tag uppercased and trimmed.
    year_tag: Option<String>,
    /// The `time` column trimmed.
    time: Option<String>,
}

impl PreparedRow {
    fn new(entry: LectionaryEntry) -> Self {
        let normalized: String = normalize(&entry.liturgical_day);
        let upper: String = entry.liturgical_day.to_uppercase().replace('\u{2019}', "'");
        let year_tag: Option<String> = non_blank(entry.year.as_deref()).map(str::to_uppercase);
        let time: Option<String> = non_blank(entry.time.as_deref()).map(str::to_string);
        Self {
            entry,
            normalized,
            upper,
            year_tag,
            time,
        }
    }

    /// The underlying lectionary row.
    #[must_use]
    pub const fn entry(&self) -> &LectionaryEntry {
        &self.entry
    }

    const fn id(&self) -> i64 {
        self.entry.admin_order
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Everything the rules know about the day being matched.
#[derive(Debug, Clone)]
pub struct MatchContext {
    pub date: Date,
    /// The day name as extracted.
    pub name: String,
    pub rank: Rank,
    /// The season named by the day, if any.
    pub season: Option<Season>,
    /// The week named by the day, if any.
    pub week: Option<u8>,
    pub cycles: YearCycles,
}

impl MatchContext {
    fn is_sunday(&self) -> bool {
        self.date.weekday() == Weekday::Sunday
    }

    fn upper(&self) -> String {
        self.name.trim().to_uppercase().replace('\u{2019}', "'")
    }

    fn normalized(&self) -> String {
        normalize(&self.name)
    }
}

/// Matches Ordo days against a loaded lectionary.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    rows: Vec<PreparedRow>,
}

impl MatchingEngine {
    /// Prepares the lectionary rows for matching. Rows keep their order,
    /// which breaks ties between equally good candidates.
    #[must_use]
    pub fn new(entries: Vec<LectionaryEntry>) -> Self {
        let rows: Vec<PreparedRow> = entries.into_iter().map(PreparedRow::new).collect();
        debug!(rows = rows.len(), "Prepared lectionary for matching");
        Self { rows }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Looks up a row by its lectionary id.
    #[must_use]
    pub fn entry(&self, lectionary_id: i64) -> Option<&LectionaryEntry> {
        self.rows
            .iter()
            .find(|row| row.id() == lectionary_id)
            .map(PreparedRow::entry)
    }

    /// Runs the rule chain for one day.
    ///
    /// The rules run in this order: triduum, date, `advent_proper`, name,
    /// `sunday_pattern`, substring, `weekday_for_memorial`. The first
    /// candidate found wins.
    #[must_use]
    pub fn find(&self, context: &MatchContext) -> LectionaryMatch {
        let chain: [(&str, MatchType, rules::Rule); 7] = [
            ("triduum", MatchType::Exact, rules::triduum),
            ("date", MatchType::Exact, rules::fixed_feast),
            ("advent_proper", MatchType::Exact, rules::advent_proper),
            ("name", MatchType::Exact, rules::exact_name),
            ("sunday_pattern", MatchType::Exact, rules::sunday_pattern),
            ("substring", MatchType::Partial, rules::substring),
            (
                "weekday_for_memorial",
                MatchType::Exact,
                rules::weekday_for_memorial,
            ),
        ];

        for (method, match_type, rule) in chain {
            if let Some(row) = rule(&self.rows, context) {
                debug!(
                    date = %context.date,
                    name = %context.name,
                    method,
                    lectionary_id = row.id(),
                    "Matched lectionary row"
                );
                return LectionaryMatch::matched(row.id(), match_type, method);
            }
        }

        debug!(date = %context.date, name = %context.name, "No lectionary match");
        LectionaryMatch::unmatched(UNMATCHED_METHOD)
    }
}
