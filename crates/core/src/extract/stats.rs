// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lectio_domain::{NameSource, OrdoEntry};
use time::{Date, Weekday};

/// Completeness summary of one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Entries produced, one per date in range.
    pub total: usize,
    /// Entries named from a day header.
    pub from_header: usize,
    /// Entries named from the computed placeholder.
    pub placeholders: usize,
    /// Day headers that were skipped as duplicates.
    pub duplicate_headers: usize,
    /// Day headers that did not form a valid date.
    pub invalid_dates: usize,
    /// Dates with no first reading.
    pub missing_first_reading: Vec<Date>,
    /// Dates with no psalm.
    pub missing_psalm: Vec<Date>,
    /// Dates with no gospel.
    pub missing_gospel: Vec<Date>,
    /// Sundays with no second reading.
    pub sundays_missing_second_reading: Vec<Date>,
}

impl ExtractionStats {
    /// Tallies the readings coverage of a finished entry list.
    #[must_use]
    pub fn from_entries(entries: &[OrdoEntry]) -> Self {
        let mut stats: Self = Self {
            total: entries.len(),
            ..Self::default()
        };

        for entry in entries {
            match entry.name_source {
                NameSource::Header => stats.from_header += 1,
                NameSource::Placeholder => stats.placeholders += 1,
            }
            if entry.readings.first_reading.is_none() {
                stats.missing_first_reading.push(entry.date);
            }
            if entry.readings.psalm.is_none() {
                stats.missing_psalm.push(entry.date);
            }
            if entry.readings.gospel.is_none() {
                stats.missing_gospel.push(entry.date);
            }
            if entry.day_of_week == Weekday::Sunday && entry.readings.second_reading.is_none() {
                stats.sundays_missing_second_reading.push(entry.date);
            }
        }

        stats
    }

    /// Entries that carry every expected reading.
    #[must_use]
    pub fn complete(&self) -> usize {
        let mut incomplete: Vec<Date> = self
            .missing_first_reading
            .iter()
            .chain(&self.missing_psalm)
            .chain(&self.missing_gospel)
            .chain(&self.sundays_missing_second_reading)
            .copied()
            .collect();
        incomplete.sort_unstable();
        incomplete.dedup();
        self.total.saturating_sub(incomplete.len())
    }
}

impl std::fmt::Display for ExtractionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total entries:            {}", self.total)?;
        writeln!(f, "Named from headers:       {}", self.from_header)?;
        writeln!(f, "Placeholder names:        {}", self.placeholders)?;
        writeln!(f, "Complete readings:        {}", self.complete())?;
        writeln!(f, "Missing first reading:    {}", self.missing_first_reading.len())?;
        writeln!(f, "Missing psalm:            {}", self.missing_psalm.len())?;
        writeln!(f, "Missing gospel:           {}", self.missing_gospel.len())?;
        write!(
            f,
            "Sundays missing 2nd read: {}",
            self.sundays_missing_second_reading.len()
        )
    }
}
