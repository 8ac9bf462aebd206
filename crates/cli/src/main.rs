// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # lectio
//!
//! Operator tooling for the liturgical calendar engine.
//!
//! A typical year is provisioned in this order:
//!
//! - `lectio import-years --input years.csv`
//! - `lectio import-lectionary --input lectionary.csv`
//! - `lectio extract --input ordo.txt --start 2025-11-30 --end 2026-11-28`
//! - `lectio map --start 2025-11-30 --end 2026-11-28`
//! - `lectio report --start 2025-11-30 --end 2026-11-28`
//!
//! Schedule entries are created with `schedule`, moved through their
//! lifecycle with `submit`, and inspected with `readings`.

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
#![allow(clippy::multiple_crate_versions)]

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use clap::{Args as ClapArgs, Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use lectio::{CsvYearCycleSource, ExtractionStats, MatchReport, YearCycleCache, YearCycleSource};
use lectio_api::{
    ImportYearCyclesResponse, LectionaryImportResponse, ReadingsOptions, ResolvedReadings,
    TransitionStatusResponse, build_mapping, create_schedule_entry, get_readings_for_entries,
    import_lectionary_csv, import_ordo, import_year_cycles_csv, mapping_report,
    preview_lectionary_csv, transition_status,
};
use lectio_domain::{OrdoEntry, ScheduleEntry, ScheduleStatus};
use lectio_persistence::{Persistence, SqliteYearCycleSource};
use time::Date;
use time::macros::format_description;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    init_tracing(args.log_level());

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// `RUST_LOG` wins when set; otherwise `-v`/`-q` pick the level.
fn init_tracing(level: LevelFilter) {
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .init();
}

#[derive(Debug, Parser)]
#[command(name = "lectio", author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

/// An inclusive range of calendar dates.
#[derive(Clone, Copy, Debug, ClapArgs)]
struct DateRange {
    /// First date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    start: Date,

    /// Last date, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    end: Date,
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Extract one entry per date from an Ordo text export and store it
    #[command(visible_alias = "x")]
    Extract {
        /// The tagged-text export of the Ordo
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        range: DateRange,

        /// Also write the entries as JSON
        #[arg(long)]
        json: Option<PathBuf>,

        /// Also write the entries as CSV
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Replace the year-cycle table from a CSV file
    #[command(visible_alias = "iy")]
    ImportYears {
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Import lectionary rows from a CSV file
    #[command(visible_alias = "il")]
    ImportLectionary {
        #[arg(short, long)]
        input: PathBuf,

        /// Validate and report without storing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Match stored Ordo entries against the lectionary
    #[command(visible_alias = "m")]
    Map {
        #[command(flatten)]
        range: DateRange,

        /// Read year cycles from this CSV instead of the database
        #[arg(long)]
        years: Option<PathBuf>,
    },

    /// Summarize the stored mapping for review
    #[command(visible_alias = "r")]
    Report {
        #[command(flatten)]
        range: DateRange,
    },

    /// Show the readings of the schedule entries on a date, or of one entry
    Readings {
        #[arg(long, value_parser = parse_date, required_unless_present = "schedule_id")]
        date: Option<Date>,

        #[arg(long, conflicts_with = "date")]
        schedule_id: Option<i64>,

        /// Recompute from the mapping even when a snapshot exists
        #[arg(long)]
        force_fresh: bool,
    },

    /// Move a schedule entry forward in its lifecycle
    Submit {
        schedule_id: i64,

        #[arg(long, value_parser = parse_status, default_value = "submitted")]
        status: ScheduleStatus,
    },

    /// Create a pending schedule entry
    Schedule {
        #[arg(long, value_parser = parse_date)]
        date: Date,
    },
}

impl Args {
    fn run(self) -> Result<()> {
        let mut persistence: Persistence = open_persistence(self.database.as_deref())?;
        self.command.run(&mut persistence)
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

fn open_persistence(database: Option<&Path>) -> Result<Persistence> {
    if let Some(path) = database {
        info!("Using file-based database at: {}", path.display());
        Persistence::new_with_file(path)
            .wrap_err_with(|| format!("failed to open database {}", path.display()))
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory().wrap_err("failed to open in-memory database")
    }
}

fn parse_date(value: &str) -> std::result::Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

fn parse_status(value: &str) -> std::result::Result<ScheduleStatus, String> {
    value.parse::<ScheduleStatus>().map_err(|e| e.to_string())
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).wrap_err_with(|| format!("failed to read {}", path.display()))
}

impl Command {
    fn run(self, persistence: &mut Persistence) -> Result<()> {
        match self {
            Self::Extract {
                input,
                range,
                json,
                csv,
            } => extract(persistence, &input, range, json.as_deref(), csv.as_deref()),
            Self::ImportYears { input } => import_years(persistence, &input),
            Self::ImportLectionary { input, dry_run } => {
                import_lectionary(persistence, &input, dry_run)
            }
            Self::Map { range, years } => match years {
                Some(path) => map(persistence, CsvYearCycleSource::new(path), range),
                None => {
                    let source: SqliteYearCycleSource = persistence.year_cycle_source();
                    map(persistence, source, range)
                }
            },
            Self::Report { range } => {
                let report: MatchReport = mapping_report(persistence, range.start, range.end)?;
                print!("{report}");
                Ok(())
            }
            Self::Readings {
                date,
                schedule_id,
                force_fresh,
            } => readings(persistence, date, schedule_id, ReadingsOptions { force_fresh }),
            Self::Submit {
                schedule_id,
                status,
            } => {
                let response: TransitionStatusResponse =
                    transition_status(persistence, schedule_id, status)?;
                println!("{}", serde_json::to_string_pretty(&response)?);
                Ok(())
            }
            Self::Schedule { date } => {
                let schedule_id: i64 = create_schedule_entry(persistence, date)?;
                println!("{schedule_id}");
                Ok(())
            }
        }
    }
}

fn extract(
    persistence: &mut Persistence,
    input: &Path,
    range: DateRange,
    json: Option<&Path>,
    csv: Option<&Path>,
) -> Result<()> {
    let raw: String = read_input(input)?;
    let stats: ExtractionStats = import_ordo(persistence, &raw, range.start, range.end)?;

    if json.is_some() || csv.is_some() {
        let entries: Vec<OrdoEntry> = persistence
            .list_ordo_entries(range.start, range.end)
            .wrap_err("failed to reload extracted entries")?;
        if let Some(path) = json {
            lectio::output::write_json(&entries, BufWriter::new(create_output(path)?))?;
            info!("Wrote JSON to {}", path.display());
        }
        if let Some(path) = csv {
            lectio::output::write_csv(&entries, BufWriter::new(create_output(path)?))?;
            info!("Wrote CSV to {}", path.display());
        }
    }

    println!("{stats}");
    Ok(())
}

fn create_output(path: &Path) -> Result<File> {
    File::create(path).wrap_err_with(|| format!("failed to create {}", path.display()))
}

fn import_years(persistence: &mut Persistence, input: &Path) -> Result<()> {
    let file: File =
        File::open(input).wrap_err_with(|| format!("failed to open {}", input.display()))?;
    let cache: YearCycleCache<SqliteYearCycleSource> =
        YearCycleCache::new(persistence.year_cycle_source());
    let response: ImportYearCyclesResponse = import_year_cycles_csv(persistence, &cache, file)?;
    println!("Provisioned years: {:?}", response.years);
    Ok(())
}

fn import_lectionary(persistence: &mut Persistence, input: &Path, dry_run: bool) -> Result<()> {
    let content: String = read_input(input)?;
    let response: LectionaryImportResponse = if dry_run {
        preview_lectionary_csv(&content)?
    } else {
        import_lectionary_csv(persistence, &content)?
    };

    for row in response.rows.iter().filter(|row| !row.errors.is_empty()) {
        println!("row {}: {}", row.row_number, row.errors.join("; "));
    }
    println!(
        "{} rows, {} valid, {} invalid, {} imported",
        response.total_rows, response.valid_count, response.invalid_count, response.imported_count
    );
    Ok(())
}

fn map<S: YearCycleSource>(
    persistence: &mut Persistence,
    source: S,
    range: DateRange,
) -> Result<()> {
    let cache: YearCycleCache<S> = YearCycleCache::new(source);
    let report: MatchReport = build_mapping(persistence, &cache, range.start, range.end)?;
    print!("{report}");
    Ok(())
}

fn readings(
    persistence: &mut Persistence,
    date: Option<Date>,
    schedule_id: Option<i64>,
    options: ReadingsOptions,
) -> Result<()> {
    let entries: Vec<ScheduleEntry> = match (schedule_id, date) {
        (Some(id), _) => vec![
            persistence
                .get_schedule_entry(id)?
                .ok_or_else(|| color_eyre::eyre::eyre!("no schedule entry with id {id}"))?,
        ],
        (None, Some(date)) => {
            let scheduled: Vec<ScheduleEntry> = persistence.list_schedule_entries(date, date)?;
            if scheduled.is_empty() {
                // Nothing authored yet; show what a new entry would get.
                vec![ScheduleEntry::new(date)]
            } else {
                scheduled
            }
        }
        (None, None) => {
            return Err(color_eyre::eyre::eyre!(
                "either --date or --schedule-id is required"
            ));
        }
    };

    let resolved: Vec<ResolvedReadings> = get_readings_for_entries(persistence, &entries, options)?;
    for (entry, readings) in entries.iter().zip(&resolved) {
        let record: serde_json::Value = serde_json::json!({
            "schedule_id": entry.schedule_id,
            "date": entry.date.to_string(),
            "status": entry.status,
            "source": readings.source,
            "readings": readings.readings,
        });
        println!("{}", serde_json::to_string_pretty(&record)?);
    }
    Ok(())
}
