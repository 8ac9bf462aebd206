// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

pub mod calendar;
mod classifier;
mod cycles;
mod error;
mod normalize;
mod patterns;
mod schedule;
mod types;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use calendar::{SeasonPosition, placeholder_name, season_position, weekday_title};
pub use classifier::{infer_rank, infer_season, infer_week, is_bare_weekday};
pub use cycles::{SundayCycle, WeekdayCycle, YearCycleEntry, YearCycleTable, YearCycles};
pub use error::DomainError;
pub use normalize::normalize;
pub use schedule::{
    FlatReadings, ReadingPassage, ReadingsData, ReadingsOrigin, ScheduleEntry, ScheduleStatus,
    is_blank_snapshot,
};

// Re-export public types
pub use types::{
    LectionaryEntry, LectionaryMatch, MatchType, NameSource, OrdoEntry, ProcessedOrdoEntry, Rank,
    Readings, ScriptureReference, Season, iso_date,
};
