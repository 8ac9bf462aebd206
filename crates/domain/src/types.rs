// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cycles::{SundayCycle, WeekdayCycle};
use crate::error::DomainError;
use crate::patterns::compile;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;
use time::{Date, Weekday};

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Liturgical rank, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Solemnity,
    Sunday,
    Feast,
    Memorial,
    OptionalMemorial,
    Feria,
}

impl Rank {
    /// Returns the string representation of the rank.
    ///
    /// This is used for persistence and reports.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Solemnity => "Solemnity",
            Self::Sunday => "Sunday",
            Self::Feast => "Feast",
            Self::Memorial => "Memorial",
            Self::OptionalMemorial => "Optional Memorial",
            Self::Feria => "Feria",
        }
    }

    /// Returns true for obligatory and optional memorials.
    ///
    /// Memorials take the weekday's readings unless the saint has a proper.
    #[must_use]
    pub const fn is_memorial(&self) -> bool {
        matches!(self, Self::Memorial | Self::OptionalMemorial)
    }

    /// Returns true for celebrations whose lectionary rows are not tied to
    /// the surrounding season.
    #[must_use]
    pub const fn is_feast_or_solemnity(&self) -> bool {
        matches!(self, Self::Solemnity | Self::Feast)
    }
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Solemnity" => Ok(Self::Solemnity),
            "Sunday" => Ok(Self::Sunday),
            "Feast" => Ok(Self::Feast),
            "Memorial" => Ok(Self::Memorial),
            "Optional Memorial" => Ok(Self::OptionalMemorial),
            "Feria" => Ok(Self::Feria),
            _ => Err(DomainError::InvalidRank(s.to_string())),
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Liturgical season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Advent,
    Christmas,
    Lent,
    HolyWeek,
    EasterTriduum,
    Easter,
    OrdinaryTime,
}

impl Season {
    /// Returns the string representation of the season.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Advent => "Advent",
            Self::Christmas => "Christmas",
            Self::Lent => "Lent",
            Self::HolyWeek => "Holy Week",
            Self::EasterTriduum => "Easter Triduum",
            Self::Easter => "Easter",
            Self::OrdinaryTime => "Ordinary Time",
        }
    }

    /// Returns the value the lectionary's `time` column uses for this
    /// season, if the season has its own rows there.
    #[must_use]
    pub const fn lectionary_time(&self) -> Option<&'static str> {
        match self {
            Self::Advent => Some("Advent"),
            Self::Christmas => Some("Christmas"),
            Self::Lent | Self::HolyWeek => Some("Lent"),
            Self::Easter => Some("Easter"),
            Self::OrdinaryTime => Some("Ordinary"),
            Self::EasterTriduum => None,
        }
    }
}

impl FromStr for Season {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Advent" => Ok(Self::Advent),
            "Christmas" => Ok(Self::Christmas),
            "Lent" => Ok(Self::Lent),
            "Holy Week" => Ok(Self::HolyWeek),
            "Easter Triduum" => Ok(Self::EasterTriduum),
            "Easter" => Ok(Self::Easter),
            "Ordinary Time" => Ok(Self::OrdinaryTime),
            _ => Err(DomainError::InvalidSeason(s.to_string())),
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How confidently an Ordo day was tied to a lectionary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Exact,
    Partial,
    #[serde(rename = "none")]
    NoMatch,
}

impl MatchType {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Partial => "partial",
            Self::NoMatch => "none",
        }
    }
}

impl FromStr for MatchType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(Self::Exact),
            "partial" => Ok(Self::Partial),
            "none" => Ok(Self::NoMatch),
            _ => Err(DomainError::InvalidMatchType(s.to_string())),
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

static REFERENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| compile(r"^\s*((?:[123]\s)?[A-Za-z]+)\s+(\d+)(?::(\S.*?))?\s*$"));

/// A scripture citation such as `Mt 9:35-10:1,6-8`.
///
/// Verses are kept as a normalized but unparsed string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScriptureReference {
    pub book: String,
    pub chapter: u16,
    pub verses: String,
}

impl ScriptureReference {
    #[must_use]
    pub fn new(book: impl Into<String>, chapter: u16, verses: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter,
            verses: verses.into(),
        }
    }

    /// Parses a stored citation back into its parts.
    ///
    /// Returns `None` for text that is not a single citation.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let captures = REFERENCE_PATTERN.captures(text)?;
        let chapter: u16 = captures.get(2)?.as_str().parse().ok()?;
        Some(Self {
            book: captures.get(1)?.as_str().to_string(),
            chapter,
            verses: captures
                .get(3)
                .map_or_else(String::new, |m| m.as_str().to_string()),
        })
    }
}

impl std::fmt::Display for ScriptureReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.verses.is_empty() {
            write!(f, "{} {}", self.book, self.chapter)
        } else {
            write!(f, "{} {}:{}", self.book, self.chapter, self.verses)
        }
    }
}

/// The four reading slots of a day. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Readings {
    pub first_reading: Option<ScriptureReference>,
    pub psalm: Option<ScriptureReference>,
    pub second_reading: Option<ScriptureReference>,
    pub gospel: Option<ScriptureReference>,
}

impl Readings {
    /// Returns true if no slot holds a citation.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.first_reading.is_none()
            && self.psalm.is_none()
            && self.second_reading.is_none()
            && self.gospel.is_none()
    }
}

/// Where an Ordo entry's name came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    /// A day header found in the source text.
    Header,
    /// Synthesized from the computed calendar because no header was found.
    Placeholder,
}

/// One calendar date as extracted from the Ordo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrdoEntry {
    pub date: Date,
    pub day_of_week: Weekday,
    pub raw_name: String,
    /// Rank stated explicitly in the header ("Feast", "Memorial", ...), if any.
    pub declared_rank: Option<Rank>,
    pub name_source: NameSource,
    pub readings: Readings,
}

/// A row of the canonical lectionary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectionaryEntry {
    pub admin_order: i64,
    pub liturgical_day: String,
    pub year: Option<String>,
    pub week: Option<String>,
    pub day: Option<String>,
    pub time: Option<String>,
    pub first_reading: Option<String>,
    pub psalm: Option<String>,
    pub second_reading: Option<String>,
    pub gospel_reading: Option<String>,
}

/// The outcome of matching one Ordo day against the lectionary.
///
/// A `NoMatch` never carries a lectionary id and a match always does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LectionaryMatch {
    lectionary_id: Option<i64>,
    match_type: MatchType,
    match_method: String,
}

impl LectionaryMatch {
    /// A successful exact or partial match.
    ///
    /// A `NoMatch` type passed here is treated as an exact match, since a
    /// lectionary row was found.
    #[must_use]
    pub fn matched(lectionary_id: i64, match_type: MatchType, method: &str) -> Self {
        let match_type: MatchType = match match_type {
            MatchType::NoMatch => MatchType::Exact,
            other => other,
        };
        Self {
            lectionary_id: Some(lectionary_id),
            match_type,
            match_method: method.to_string(),
        }
    }

    /// No lectionary row could be found.
    #[must_use]
    pub fn unmatched(method: &str) -> Self {
        Self {
            lectionary_id: None,
            match_type: MatchType::NoMatch,
            match_method: method.to_string(),
        }
    }

    /// Rebuilds a match from stored columns, restoring the invariant if the
    /// row disagrees with itself.
    #[must_use]
    pub fn from_parts(lectionary_id: Option<i64>, match_type: MatchType, method: &str) -> Self {
        match lectionary_id {
            Some(id) if match_type != MatchType::NoMatch => Self::matched(id, match_type, method),
            _ => Self::unmatched(method),
        }
    }

    #[must_use]
    pub const fn lectionary_id(&self) -> Option<i64> {
        self.lectionary_id
    }

    #[must_use]
    pub const fn match_type(&self) -> MatchType {
        self.match_type
    }

    #[must_use]
    pub fn match_method(&self) -> &str {
        &self.match_method
    }
}

/// A classified and matched Ordo day, one per calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedOrdoEntry {
    pub date: Date,
    pub liturgical_name: String,
    pub liturgical_rank: Rank,
    pub liturgical_season: Option<Season>,
    pub liturgical_week: Option<u8>,
    pub year_cycle: SundayCycle,
    pub weekday_cycle: WeekdayCycle,
    pub lectionary_match: LectionaryMatch,
}
