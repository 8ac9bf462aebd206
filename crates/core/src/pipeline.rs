// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Classification and matching of extracted entries.

use crate::error::CoreError;
use crate::matching::{MatchContext, MatchingEngine};
use lectio_domain::{
    LectionaryMatch, OrdoEntry, ProcessedOrdoEntry, Rank, Season, YearCycleTable, YearCycles,
    infer_rank, infer_season, infer_week,
};
use tracing::{info, warn};

/// Classifies one entry and matches it against the lectionary.
///
/// A rank printed in the Ordo header wins over the one inferred from the
/// name.
///
/// # Errors
///
/// Returns an error if the year-cycle table has no row for the entry's
/// liturgical year.
pub fn process_entry(
    entry: &OrdoEntry,
    cycles: &YearCycleTable,
    engine: &MatchingEngine,
) -> Result<ProcessedOrdoEntry, CoreError> {
    let year_cycles: YearCycles = cycles.resolve(entry.date)?;
    let rank: Rank = entry
        .declared_rank
        .unwrap_or_else(|| infer_rank(&entry.raw_name));
    let season: Option<Season> = infer_season(&entry.raw_name);
    let week: Option<u8> = infer_week(&entry.raw_name);

    let context: MatchContext = MatchContext {
        date: entry.date,
        name: entry.raw_name.clone(),
        rank,
        season,
        week,
        cycles: year_cycles,
    };
    let lectionary_match: LectionaryMatch = engine.find(&context);

    Ok(ProcessedOrdoEntry {
        date: entry.date,
        liturgical_name: entry.raw_name.clone(),
        liturgical_rank: rank,
        liturgical_season: season,
        liturgical_week: week,
        year_cycle: year_cycles.sunday_cycle,
        weekday_cycle: year_cycles.weekday_cycle,
        lectionary_match,
    })
}

/// Classifies and matches every entry, in order.
///
/// # Errors
///
/// Returns the first year-cycle lookup failure. A missing year is a
/// configuration error and aborts the run rather than guessing a cycle.
pub fn process_ordo(
    entries: &[OrdoEntry],
    cycles: &YearCycleTable,
    engine: &MatchingEngine,
) -> Result<Vec<ProcessedOrdoEntry>, CoreError> {
    let processed: Vec<ProcessedOrdoEntry> = entries
        .iter()
        .map(|entry| process_entry(entry, cycles, engine))
        .collect::<Result<Vec<ProcessedOrdoEntry>, CoreError>>()?;

    let unmatched: usize = processed
        .iter()
        .filter(|entry| entry.lectionary_match.lectionary_id().is_none())
        .count();
    if unmatched > 0 {
        warn!(unmatched, "Some Ordo days have no lectionary match");
    }
    info!(entries = processed.len(), unmatched, "Processed Ordo entries");

    Ok(processed)
}
