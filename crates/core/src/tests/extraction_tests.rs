// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::output::{write_csv, write_json};
use crate::tests::helpers::date;
use crate::{CoreError, Extraction, OrdoExtractor};
use lectio_domain::{NameSource, OrdoEntry, Rank, ScriptureReference};
use time::{Date, Month};

const ADVENT_ORDO: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TaggedPDF-doc>
<x:xmpmeta xmlns:x="adobe:ns:meta/"><dc:title>30 SUNDAY Ordo</dc:title></x:xmpmeta>
<Part>
<P>NOVEMBER 2025</P>
<P>30 SUNDAY FIRST SUNDAY OF ADVENT violet</P>
<P>Is 2:1-5: All nations will stream to the mountain</P>
<P>Ps 122:1-2, 4-9</P>
<P>Rom 13:11-14: Our salvation is near</P>
<P>Mt 24:37-44: Stay awake</P>
<P>1 Monday DECEMBER Monday of the first week of Advent violet</P>
<P>Is 4:2-6: The branch of the Lord</P>
<P>Ps 122:1-9</P>
<P>Mt 8:5-11: The centurion&apos;s faith</P>
<P>Alleluia (cf. Lk 3:4, 6)</P>
<P>3 Wednesday St Francis Xavier, priest Memorial white</P>
<P>Is 25:6-10: The Lord will prepare a banquet</P>
<P>Mt 15:29-37: Jesus heals many</P>
<P>3 Wednesday St Francis Xavier repeated in the index</P>
</Part>
</TaggedPDF-doc>"#;

fn extract(raw: &str, start: Date, end: Date) -> Extraction {
    OrdoExtractor::standard()
        .unwrap()
        .extract(raw, start, end)
        .unwrap()
}

fn entry_on(extraction: &Extraction, day: Date) -> &OrdoEntry {
    extraction
        .entries
        .iter()
        .find(|entry| entry.date == day)
        .unwrap()
}

// ============================================================================
// Coverage
// ============================================================================

#[test]
fn test_every_date_in_range_gets_one_entry() {
    let extraction: Extraction = extract(
        ADVENT_ORDO,
        date(2025, Month::November, 29),
        date(2025, Month::December, 4),
    );

    let dates: Vec<Date> = extraction.entries.iter().map(|entry| entry.date).collect();
    assert_eq!(
        dates,
        vec![
            date(2025, Month::November, 29),
            date(2025, Month::November, 30),
            date(2025, Month::December, 1),
            date(2025, Month::December, 2),
            date(2025, Month::December, 3),
            date(2025, Month::December, 4),
        ]
    );
    assert_eq!(extraction.stats.total, 6);
    assert_eq!(extraction.stats.from_header, 3);
    assert_eq!(extraction.stats.placeholders, 3);
    assert_eq!(extraction.stats.duplicate_headers, 1);
    assert_eq!(extraction.stats.invalid_dates, 0);
}

#[test]
fn test_missing_day_gets_placeholder_name() {
    let extraction: Extraction = extract(
        ADVENT_ORDO,
        date(2025, Month::November, 29),
        date(2025, Month::December, 4),
    );

    let tuesday: &OrdoEntry = entry_on(&extraction, date(2025, Month::December, 2));
    assert_eq!(tuesday.name_source, NameSource::Placeholder);
    assert_eq!(tuesday.raw_name, "Tuesday of the first week of Advent");
    assert!(tuesday.readings.is_empty());
}

#[test]
fn test_range_inside_document() {
    let extraction: Extraction = extract(
        ADVENT_ORDO,
        date(2025, Month::December, 1),
        date(2025, Month::December, 1),
    );
    assert_eq!(extraction.entries.len(), 1);
    assert_eq!(
        extraction.entries[0].raw_name,
        "Monday of the first week of Advent"
    );
}

#[test]
fn test_inverted_range_is_rejected() {
    let result: Result<Extraction, CoreError> = OrdoExtractor::standard().unwrap().extract(
        ADVENT_ORDO,
        date(2025, Month::December, 4),
        date(2025, Month::November, 29),
    );
    assert!(matches!(result, Err(CoreError::InvalidRange { .. })));
}

// ============================================================================
// Readings
// ============================================================================

#[test]
fn test_sunday_readings_are_extracted() {
    let extraction: Extraction = extract(
        ADVENT_ORDO,
        date(2025, Month::November, 29),
        date(2025, Month::December, 4),
    );

    let sunday: &OrdoEntry = entry_on(&extraction, date(2025, Month::November, 30));
    assert_eq!(sunday.name_source, NameSource::Header);
    assert_eq!(sunday.raw_name, "FIRST SUNDAY OF ADVENT");
    assert_eq!(
        sunday.readings.first_reading,
        Some(ScriptureReference::new("Is", 2, "1-5"))
    );
    assert_eq!(
        sunday.readings.psalm,
        Some(ScriptureReference::new("Ps", 122, "1-2,4-9"))
    );
    assert_eq!(
        sunday.readings.second_reading,
        Some(ScriptureReference::new("Rom", 13, "11-14"))
    );
    assert_eq!(
        sunday.readings.gospel,
        Some(ScriptureReference::new("Mt", 24, "37-44"))
    );
    assert!(extraction.stats.sundays_missing_second_reading.is_empty());
}

#[test]
fn test_cross_reference_does_not_replace_gospel() {
    let extraction: Extraction = extract(
        ADVENT_ORDO,
        date(2025, Month::December, 1),
        date(2025, Month::December, 1),
    );
    assert_eq!(
        extraction.entries[0].readings.gospel,
        Some(ScriptureReference::new("Mt", 8, "5-11"))
    );
}

#[test]
fn test_memorial_header_keeps_declared_rank() {
    let extraction: Extraction = extract(
        ADVENT_ORDO,
        date(2025, Month::December, 3),
        date(2025, Month::December, 3),
    );
    let memorial: &OrdoEntry = &extraction.entries[0];
    assert_eq!(memorial.raw_name, "St Francis Xavier, priest");
    assert_eq!(memorial.declared_rank, Some(Rank::Memorial));
    assert_eq!(memorial.readings.psalm, None);
    assert_eq!(
        memorial.readings.gospel,
        Some(ScriptureReference::new("Mt", 15, "29-37"))
    );
}

// ============================================================================
// Month and year inference
// ============================================================================

#[test]
fn test_year_rolls_over_after_december() {
    let raw: &str = "30 Tuesday Sixth day within the Octave of Christmas\n\
                     31 Wednesday Seventh day within the Octave of Christmas\n\
                     1 Thursday MARY, MOTHER OF GOD\n\
                     2 Friday Saints Basil the Great and Gregory Nazianzen";
    let extraction: Extraction = extract(
        raw,
        date(2025, Month::December, 30),
        date(2026, Month::January, 2),
    );

    let new_year: &OrdoEntry = entry_on(&extraction, date(2026, Month::January, 1));
    assert_eq!(new_year.name_source, NameSource::Header);
    assert_eq!(new_year.raw_name, "MARY, MOTHER OF GOD");
    assert_eq!(extraction.stats.placeholders, 0);
}

#[test]
fn test_impossible_date_is_skipped() {
    let raw: &str = "27 Friday Friday after Ash Wednesday\n\
                     28 Saturday Saturday after Ash Wednesday\n\
                     30 Monday Misprinted heading\n\
                     2 Monday Monday of the first week of Lent";
    let extraction: Extraction = extract(
        raw,
        date(2026, Month::February, 27),
        date(2026, Month::March, 2),
    );

    assert_eq!(extraction.stats.invalid_dates, 1);
    assert_eq!(extraction.entries.len(), 4);
    assert_eq!(
        entry_on(&extraction, date(2026, Month::March, 1)).name_source,
        NameSource::Placeholder
    );
    assert_eq!(
        entry_on(&extraction, date(2026, Month::March, 2)).raw_name,
        "Monday of the first week of Lent"
    );
}

// ============================================================================
// Output
// ============================================================================

#[test]
fn test_csv_output() {
    let extraction: Extraction = extract(
        ADVENT_ORDO,
        date(2025, Month::November, 30),
        date(2025, Month::November, 30),
    );
    let mut buffer: Vec<u8> = Vec::new();
    write_csv(&extraction.entries, &mut buffer).unwrap();
    let text: String = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines[0],
        "date,day_of_week,liturgical_day,first_reading,psalm,second_reading,gospel"
    );
    assert_eq!(
        lines[1],
        "2025-11-30,Sunday,FIRST SUNDAY OF ADVENT,Is 2:1-5,\"Ps 122:1-2,4-9\",Rom 13:11-14,Mt 24:37-44"
    );
}

#[test]
fn test_json_output_uses_null_for_missing_readings() {
    let extraction: Extraction = extract(
        ADVENT_ORDO,
        date(2025, Month::December, 2),
        date(2025, Month::December, 3),
    );
    let mut buffer: Vec<u8> = Vec::new();
    write_json(&extraction.entries, &mut buffer).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();

    assert_eq!(value[0]["date"], "2025-12-02");
    assert_eq!(value[0]["day_of_week"], "Tuesday");
    assert!(value[0]["readings"]["gospel"].is_null());
    assert_eq!(value[1]["readings"]["gospel"], "Mt 15:29-37");
}
