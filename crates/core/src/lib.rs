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

mod error;
pub mod extract;
pub mod matching;
pub mod output;
mod patterns;
mod pipeline;
mod year_cycle_source;

#[cfg(test)]
mod tests;

pub use error::CoreError;
pub use extract::{Extraction, ExtractionStats, OrdoExtractor};
pub use matching::{MatchContext, MatchReport, MatchingEngine, UNMATCHED_METHOD};
pub use pipeline::{process_entry, process_ordo};
pub use year_cycle_source::{
    CsvYearCycleSource, StaticYearCycleSource, YearCycleCache, YearCycleSource,
    parse_year_cycle_csv,
};
