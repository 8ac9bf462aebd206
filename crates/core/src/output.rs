// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON and CSV renderings of extracted entries.

use crate::error::CoreError;
use lectio_domain::{OrdoEntry, ScriptureReference, weekday_title};
use serde::Serialize;
use std::io::Write;

/// The CSV column order.
pub const CSV_HEADER: [&str; 7] = [
    "date",
    "day_of_week",
    "liturgical_day",
    "first_reading",
    "psalm",
    "second_reading",
    "gospel",
];

#[derive(Debug, Serialize)]
struct ReadingsRecord {
    first_reading: Option<String>,
    psalm: Option<String>,
    second_reading: Option<String>,
    gospel: Option<String>,
}

#[derive(Debug, Serialize)]
struct EntryRecord<'a> {
    date: String,
    day_of_week: &'static str,
    liturgical_day: &'a str,
    readings: ReadingsRecord,
}

fn render(reference: Option<&ScriptureReference>) -> Option<String> {
    reference.map(ToString::to_string)
}

impl<'a> From<&'a OrdoEntry> for EntryRecord<'a> {
    fn from(entry: &'a OrdoEntry) -> Self {
        Self {
            date: entry.date.to_string(),
            day_of_week: weekday_title(entry.day_of_week),
            liturgical_day: &entry.raw_name,
            readings: ReadingsRecord {
                first_reading: render(entry.readings.first_reading.as_ref()),
                psalm: render(entry.readings.psalm.as_ref()),
                second_reading: render(entry.readings.second_reading.as_ref()),
                gospel: render(entry.readings.gospel.as_ref()),
            },
        }
    }
}

/// Writes entries as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_json<W: Write>(entries: &[OrdoEntry], writer: W) -> Result<(), CoreError> {
    let records: Vec<EntryRecord<'_>> = entries.iter().map(EntryRecord::from).collect();
    serde_json::to_writer_pretty(writer, &records).map_err(|e| CoreError::Output(e.to_string()))
}

/// Writes entries as CSV with a header row. Missing readings are empty
/// cells.
///
/// # Errors
///
/// Returns an error if a record cannot be written.
pub fn write_csv<W: Write>(entries: &[OrdoEntry], writer: W) -> Result<(), CoreError> {
    let mut csv_writer: csv::Writer<W> = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| CoreError::Output(e.to_string()))?;

    for entry in entries {
        let record: EntryRecord<'_> = EntryRecord::from(entry);
        csv_writer
            .write_record([
                record.date.as_str(),
                record.day_of_week,
                record.liturgical_day,
                record.readings.first_reading.as_deref().unwrap_or_default(),
                record.readings.psalm.as_deref().unwrap_or_default(),
                record.readings.second_reading.as_deref().unwrap_or_default(),
                record.readings.gospel.as_deref().unwrap_or_default(),
            ])
            .map_err(|e| CoreError::Output(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| CoreError::Output(e.to_string()))
}
