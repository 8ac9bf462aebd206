// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lectio_domain::{MatchType, ProcessedOrdoEntry};
use std::collections::BTreeMap;
use time::Date;

/// Match-quality summary of one processing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub total: usize,
    pub exact: usize,
    pub partial: usize,
    pub unmatched: usize,
    /// How many days each rule matched.
    pub by_method: BTreeMap<String, usize>,
    /// The days no rule matched, with their names.
    pub unmatched_days: Vec<(Date, String)>,
}

impl MatchReport {
    #[must_use]
    pub fn from_entries(entries: &[ProcessedOrdoEntry]) -> Self {
        let mut report: Self = Self {
            total: entries.len(),
            ..Self::default()
        };

        for entry in entries {
            let found = &entry.lectionary_match;
            match found.match_type() {
                MatchType::Exact => report.exact += 1,
                MatchType::Partial => report.partial += 1,
                MatchType::NoMatch => {
                    report.unmatched += 1;
                    report
                        .unmatched_days
                        .push((entry.date, entry.liturgical_name.clone()));
                }
            }
            *report
                .by_method
                .entry(found.match_method().to_string())
                .or_default() += 1;
        }

        report
    }
}

impl std::fmt::Display for MatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total days:  {}", self.total)?;
        writeln!(f, "Exact:       {}", self.exact)?;
        writeln!(f, "Partial:     {}", self.partial)?;
        writeln!(f, "Unmatched:   {}", self.unmatched)?;
        for (method, count) in &self.by_method {
            writeln!(f, "  {method:<22} {count}")?;
        }
        for (date, name) in &self.unmatched_days {
            writeln!(f, "  no match: {date} {name}")?;
        }
        Ok(())
    }
}
