// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ordo extraction.
//!
//! Turns the raw export of a published Ordo into exactly one [`OrdoEntry`]
//! per date of a requested range. Dates the document never reaches still
//! get an entry, named by the computed calendar.

pub mod books;
mod header;
pub mod markup;
pub mod readings;
pub mod rollover;
mod stats;

pub use books::{Book, BookTable};
pub use header::{DayHeader, parse_day_header};
pub use readings::{ReadingPatterns, normalize_verses};
pub use rollover::{BELIEVABLE_MONTH_END, MonthCursor, next_position};
pub use stats::ExtractionStats;

use crate::error::CoreError;
use lectio_domain::{NameSource, OrdoEntry, Readings, placeholder_name};
use std::collections::BTreeMap;
use time::{Date, Duration};
use tracing::{debug, info, warn};

/// The output of one extraction run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// One entry per date in range, in date order.
    pub entries: Vec<OrdoEntry>,
    /// Readings coverage and header bookkeeping.
    pub stats: ExtractionStats,
}

/// A located day: its header and the text window that belongs to it.
struct LocatedDay {
    header: DayHeader,
    window: String,
}

/// Extracts dated entries from a raw Ordo document.
#[derive(Debug, Clone)]
pub struct OrdoExtractor {
    patterns: ReadingPatterns,
}

impl OrdoExtractor {
    /// Creates an extractor recognizing the books of the given table.
    ///
    /// # Errors
    ///
    /// Returns an error if the table yields an invalid citation pattern.
    pub fn new(books: &BookTable) -> Result<Self, CoreError> {
        Ok(Self {
            patterns: ReadingPatterns::new(books)?,
        })
    }

    /// Creates an extractor for the standard book abbreviations.
    ///
    /// # Errors
    ///
    /// Returns an error if a citation pattern fails to compile.
    pub fn standard() -> Result<Self, CoreError> {
        Self::new(&BookTable::standard())
    }

    /// Extracts one entry per date from `start` to `end` inclusive.
    ///
    /// The month and year of the first header are seeded from `start`. The
    /// first header for a date wins; later duplicates are skipped. Headers
    /// that land outside the range are ignored.
    ///
    /// # Arguments
    ///
    /// * `raw` - The tagged-PDF XML export or plain text of the Ordo
    /// * `start` - The first date to produce
    /// * `end` - The last date to produce
    ///
    /// # Errors
    ///
    /// Returns an error if `start` is after `end` or a placeholder name
    /// cannot be computed for a date.
    pub fn extract(&self, raw: &str, start: Date, end: Date) -> Result<Extraction, CoreError> {
        if start > end {
            return Err(CoreError::InvalidRange { start, end });
        }

        let segments: Vec<String> = markup::segments(raw);
        debug!(segments = segments.len(), "Flattened Ordo markup");

        let mut stats: ExtractionStats = ExtractionStats::default();
        let located: BTreeMap<Date, LocatedDay> = locate_days(&segments, start, &mut stats);

        let mut entries: Vec<OrdoEntry> = Vec::new();
        let mut date: Date = start;
        loop {
            entries.push(self.entry_for(date, located.get(&date))?);
            if date >= end {
                break;
            }
            date = date
                .checked_add(Duration::days(1))
                .ok_or_else(|| lectio_domain::DomainError::DateArithmeticOverflow {
                    operation: format!("advancing past {date}"),
                })?;
        }

        stats = ExtractionStats {
            duplicate_headers: stats.duplicate_headers,
            invalid_dates: stats.invalid_dates,
            ..ExtractionStats::from_entries(&entries)
        };

        info!(
            total = stats.total,
            from_header = stats.from_header,
            placeholders = stats.placeholders,
            "Extracted Ordo entries"
        );

        Ok(Extraction { entries, stats })
    }

    fn entry_for(&self, date: Date, located: Option<&LocatedDay>) -> Result<OrdoEntry, CoreError> {
        let Some(day) = located else {
            debug!(%date, "No day header; using placeholder name");
            return Ok(OrdoEntry {
                date,
                day_of_week: date.weekday(),
                raw_name: placeholder_name(date)?,
                declared_rank: None,
                name_source: NameSource::Placeholder,
                readings: Readings::default(),
            });
        };

        let raw_name: String = if day.header.name.is_empty() {
            placeholder_name(date)?
        } else {
            day.header.name.clone()
        };

        Ok(OrdoEntry {
            date,
            day_of_week: date.weekday(),
            raw_name,
            declared_rank: day.header.declared_rank,
            name_source: NameSource::Header,
            readings: self.patterns.extract(&day.window),
        })
    }
}

/// Finds every day header and the text window that follows it.
fn locate_days(
    segments: &[String],
    start: Date,
    stats: &mut ExtractionStats,
) -> BTreeMap<Date, LocatedDay> {
    let mut cursor: MonthCursor = MonthCursor::new(start.year(), start.month());
    let mut headers: Vec<(usize, Date, DayHeader)> = Vec::new();

    for (index, segment) in segments.iter().enumerate() {
        let Some(header) = parse_day_header(segment) else {
            continue;
        };
        cursor = cursor.advance(header.day, header.explicit_month);
        match Date::from_calendar_date(cursor.year, cursor.month, header.day) {
            Ok(date) => headers.push((index, date, header)),
            Err(e) => {
                stats.invalid_dates += 1;
                warn!(
                    segment = %segment,
                    year = cursor.year,
                    month = %cursor.month,
                    day = header.day,
                    error = %e,
                    "Skipping day header with invalid date"
                );
            }
        }
    }

    let mut located: BTreeMap<Date, LocatedDay> = BTreeMap::new();
    for (position, (index, date, header)) in headers.iter().enumerate() {
        let window_end: usize = headers
            .get(position + 1)
            .map_or(segments.len(), |(next, _, _)| *next);
        if located.contains_key(date) {
            stats.duplicate_headers += 1;
            debug!(%date, segment = %segments[*index], "Skipping duplicate day header");
            continue;
        }
        located.insert(
            *date,
            LocatedDay {
                header: header.clone(),
                window: segments[*index..window_end].join(" "),
            },
        );
    }

    located
}
