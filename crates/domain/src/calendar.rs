// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Computed liturgical calendar.
//!
//! This module derives the movable anchors of a calendar year (Easter and
//! everything that hangs off it, Advent, the Baptism of the Lord) and from
//! them the season and week of any date. It is used to synthesize a name
//! for dates the Ordo source does not cover and to recover the week of a
//! memorial whose title carries no week.

use crate::error::DomainError;
use crate::types::Season;
use crate::vocabulary::ordinal_word;
use time::{Date, Duration, Month, Weekday};

/// Computes Easter Sunday for a Gregorian year (Meeus/Jones/Butcher).
///
/// # Errors
///
/// Returns an error if the resulting date is outside the supported range.
pub fn easter_sunday(year: i32) -> Result<Date, DomainError> {
    let a: i32 = year.rem_euclid(19);
    let b: i32 = year.div_euclid(100);
    let c: i32 = year.rem_euclid(100);
    let d: i32 = b / 4;
    let e: i32 = b % 4;
    let f: i32 = (b + 8) / 25;
    let g: i32 = (b - f + 1) / 3;
    let h: i32 = (19 * a + b - d - g + 15).rem_euclid(30);
    let i: i32 = c / 4;
    let k: i32 = c % 4;
    let l: i32 = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m: i32 = (a + 11 * h + 22 * l) / 451;
    let month_number: i32 = (h + l - 7 * m + 114) / 31;
    let day_number: i32 = (h + l - 7 * m + 114) % 31 + 1;

    let overflow = || DomainError::DateArithmeticOverflow {
        operation: format!("computing Easter for {year}"),
    };
    let month: Month = u8::try_from(month_number)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or_else(overflow)?;
    let day: u8 = u8::try_from(day_number).map_err(|_| overflow())?;
    calendar_date(year, month, day)
}

/// Computes the First Sunday of Advent: the fourth Sunday before Christmas.
///
/// # Errors
///
/// Returns an error if the year is outside the supported range.
pub fn first_sunday_of_advent(year: i32) -> Result<Date, DomainError> {
    let christmas: Date = calendar_date(year, Month::December, 25)?;
    let mut back: i64 = i64::from(christmas.weekday().number_days_from_sunday());
    if back == 0 {
        back = 7;
    }
    offset(christmas, -(back + 21), "computing the First Sunday of Advent")
}

/// Computes the Baptism of the Lord: the Sunday after 6 January.
///
/// # Errors
///
/// Returns an error if the year is outside the supported range.
pub fn baptism_of_the_lord(year: i32) -> Result<Date, DomainError> {
    let epiphany: Date = calendar_date(year, Month::January, 6)?;
    let forward: i64 = 7 - i64::from(epiphany.weekday().number_days_from_sunday());
    offset(epiphany, forward, "computing the Baptism of the Lord")
}

/// The movable anchors of one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonAnchors {
    pub baptism_of_the_lord: Date,
    pub ash_wednesday: Date,
    pub palm_sunday: Date,
    pub holy_thursday: Date,
    pub easter_sunday: Date,
    pub pentecost: Date,
    pub first_sunday_of_advent: Date,
    pub christmas: Date,
}

impl SeasonAnchors {
    /// Computes every anchor for a calendar year.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside the supported range.
    pub fn for_year(year: i32) -> Result<Self, DomainError> {
        let easter: Date = easter_sunday(year)?;
        Ok(Self {
            baptism_of_the_lord: baptism_of_the_lord(year)?,
            ash_wednesday: offset(easter, -46, "computing Ash Wednesday")?,
            palm_sunday: offset(easter, -7, "computing Palm Sunday")?,
            holy_thursday: offset(easter, -3, "computing Holy Thursday")?,
            easter_sunday: easter,
            pentecost: offset(easter, 49, "computing Pentecost")?,
            first_sunday_of_advent: first_sunday_of_advent(year)?,
            christmas: calendar_date(year, Month::December, 25)?,
        })
    }

    fn first_sunday_of_lent(&self) -> Result<Date, DomainError> {
        offset(self.ash_wednesday, 4, "computing the First Sunday of Lent")
    }
}

/// The computed season and week of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonPosition {
    pub season: Season,
    /// Week within the season; `None` where the season has no numbered weeks
    /// (Christmas, Holy Week, the Triduum, and the days after Ash Wednesday).
    pub week: Option<u8>,
}

/// Computes the season and week of a calendar date.
///
/// Ordinary Time after Pentecost is numbered backwards from Advent so that
/// the week before the First Sunday of Advent is always week 34.
///
/// # Errors
///
/// Returns an error if the date's year is outside the supported range.
pub fn season_position(date: Date) -> Result<SeasonPosition, DomainError> {
    let anchors: SeasonAnchors = SeasonAnchors::for_year(date.year())?;
    let position = |season: Season, week: Option<u8>| SeasonPosition { season, week };

    if date >= anchors.christmas {
        return Ok(position(Season::Christmas, None));
    }
    if date >= anchors.first_sunday_of_advent {
        let week: u8 = week_from(anchors.first_sunday_of_advent, date)?;
        return Ok(position(Season::Advent, Some(week)));
    }
    if date <= anchors.baptism_of_the_lord {
        return Ok(position(Season::Christmas, None));
    }
    if date < anchors.ash_wednesday {
        let week: u8 = week_from(anchors.baptism_of_the_lord, date)?;
        return Ok(position(Season::OrdinaryTime, Some(week)));
    }
    if date < anchors.palm_sunday {
        let lent_one: Date = anchors.first_sunday_of_lent()?;
        if date < lent_one {
            return Ok(position(Season::Lent, None));
        }
        let week: u8 = week_from(lent_one, date)?;
        return Ok(position(Season::Lent, Some(week)));
    }
    if date < anchors.holy_thursday {
        return Ok(position(Season::HolyWeek, None));
    }
    if date < anchors.easter_sunday {
        return Ok(position(Season::EasterTriduum, None));
    }
    if date <= anchors.pentecost {
        let week: u8 = week_from(anchors.easter_sunday, date)?;
        return Ok(position(Season::Easter, Some(week)));
    }

    let week_start: Date = offset(
        date,
        -i64::from(date.weekday().number_days_from_sunday()),
        "finding the start of the week",
    )?;
    let weeks_to_advent: i64 = (anchors.first_sunday_of_advent - week_start).whole_days() / 7;
    let week: u8 = u8::try_from(35 - weeks_to_advent).map_err(|_| {
        DomainError::DateArithmeticOverflow {
            operation: format!("numbering Ordinary Time for {date}"),
        }
    })?;
    Ok(position(Season::OrdinaryTime, Some(week)))
}

/// Synthesizes a liturgical day name for a date from its computed position.
///
/// The names use the same vocabulary as the Ordo so that the day-name
/// classifier recovers the computed season from them.
///
/// # Errors
///
/// Returns an error if the date's year is outside the supported range.
pub fn placeholder_name(date: Date) -> Result<String, DomainError> {
    let anchors: SeasonAnchors = SeasonAnchors::for_year(date.year())?;
    let SeasonPosition { season, week } = season_position(date)?;
    let day: &str = weekday_title(date.weekday());
    let is_sunday: bool = date.weekday() == Weekday::Sunday;

    let name: String = match season {
        Season::Christmas => {
            if date == anchors.christmas {
                String::from("Christmas Day, The Nativity of the Lord")
            } else if date.month() == Month::January && date.day() == 1 {
                String::from("Octave Day of Christmas, Mary, Mother of God")
            } else if date.month() == Month::January && date.day() == 6 {
                String::from("The Epiphany of the Lord")
            } else if date == anchors.baptism_of_the_lord {
                String::from("The Baptism of the Lord")
            } else {
                format!("{day} of Christmas Time")
            }
        }
        Season::Advent => {
            if !is_sunday && date.month() == Month::December && (17..=24).contains(&date.day()) {
                format!("{} December", date.day())
            } else {
                seasonal_name(day, is_sunday, week, "of Advent", "of Advent")
            }
        }
        Season::Lent => match week {
            None if date == anchors.ash_wednesday => String::from("Ash Wednesday"),
            None => format!("{day} after Ash Wednesday"),
            Some(_) => seasonal_name(day, is_sunday, week, "of Lent", "of Lent"),
        },
        Season::HolyWeek => {
            if is_sunday {
                String::from("Palm Sunday of the Passion of the Lord")
            } else {
                format!("{day} of Holy Week")
            }
        }
        Season::EasterTriduum => match date.weekday() {
            Weekday::Thursday => String::from("Holy Thursday"),
            Weekday::Friday => String::from("Good Friday"),
            _ => String::from("Holy Saturday"),
        },
        Season::Easter => {
            if date == anchors.easter_sunday {
                String::from("Easter Sunday")
            } else if date == anchors.pentecost {
                String::from("Pentecost Sunday")
            } else if week == Some(1) {
                format!("{day} within the Octave of Easter")
            } else {
                seasonal_name(day, is_sunday, week, "of Easter", "of Easter")
            }
        }
        Season::OrdinaryTime => seasonal_name(
            day,
            is_sunday,
            week,
            "in Ordinary Time",
            "in Ordinary Time",
        ),
    };
    Ok(name)
}

fn seasonal_name(
    day: &str,
    is_sunday: bool,
    week: Option<u8>,
    sunday_suffix: &str,
    weekday_suffix: &str,
) -> String {
    let ordinal: String = week
        .and_then(ordinal_word)
        .map_or_else(|| String::from("unnumbered"), str::to_lowercase);
    if is_sunday {
        format!("{} Sunday {sunday_suffix}", capitalize(&ordinal))
    } else {
        format!("{day} of the {ordinal} week {weekday_suffix}")
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Returns the title-case English name of a weekday.
#[must_use]
pub const fn weekday_title(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sunday => "Sunday",
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
    }
}

fn week_from(start: Date, date: Date) -> Result<u8, DomainError> {
    let weeks: i64 = (date - start).whole_days() / 7 + 1;
    u8::try_from(weeks).map_err(|_| DomainError::DateArithmeticOverflow {
        operation: format!("numbering the week of {date} from {start}"),
    })
}

fn calendar_date(year: i32, month: Month, day: u8) -> Result<Date, DomainError> {
    Date::from_calendar_date(year, month, day).map_err(|e| DomainError::DateParseError {
        date_string: format!("{year}-{month}-{day}"),
        error: e.to_string(),
    })
}

fn offset(date: Date, days: i64, operation: &str) -> Result<Date, DomainError> {
    date.checked_add(Duration::days(days))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: operation.to_string(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::classifier::{infer_season, infer_week};
    use time::macros::date;

    #[test]
    fn test_easter_known_years() {
        assert_eq!(easter_sunday(2024).unwrap(), date!(2024 - 03 - 31));
        assert_eq!(easter_sunday(2025).unwrap(), date!(2025 - 04 - 20));
        assert_eq!(easter_sunday(2026).unwrap(), date!(2026 - 04 - 05));
        assert_eq!(easter_sunday(2038).unwrap(), date!(2038 - 04 - 25));
    }

    #[test]
    fn test_first_sunday_of_advent() {
        assert_eq!(first_sunday_of_advent(2025).unwrap(), date!(2025 - 11 - 30));
        assert_eq!(first_sunday_of_advent(2026).unwrap(), date!(2026 - 11 - 29));
        // Christmas on a Sunday pushes Advent back to 27 November.
        assert_eq!(first_sunday_of_advent(2022).unwrap(), date!(2022 - 11 - 27));
    }

    #[test]
    fn test_baptism_of_the_lord() {
        assert_eq!(baptism_of_the_lord(2026).unwrap(), date!(2026 - 01 - 11));
        // Epiphany on a Sunday: Baptism is the following Sunday.
        assert_eq!(baptism_of_the_lord(2030).unwrap(), date!(2030 - 01 - 13));
    }

    #[test]
    fn test_season_position_2026() {
        let cases: [(Date, Season, Option<u8>); 10] = [
            (date!(2026 - 01 - 12), Season::OrdinaryTime, Some(1)),
            (date!(2026 - 01 - 18), Season::OrdinaryTime, Some(2)),
            (date!(2026 - 02 - 19), Season::Lent, None),
            (date!(2026 - 02 - 22), Season::Lent, Some(1)),
            (date!(2026 - 03 - 30), Season::HolyWeek, None),
            (date!(2026 - 04 - 03), Season::EasterTriduum, None),
            (date!(2026 - 04 - 12), Season::Easter, Some(2)),
            (date!(2026 - 05 - 25), Season::OrdinaryTime, Some(8)),
            (date!(2026 - 11 - 28), Season::OrdinaryTime, Some(34)),
            (date!(2026 - 12 - 06), Season::Advent, Some(2)),
        ];
        for (day, season, week) in cases {
            let position: SeasonPosition = season_position(day).unwrap();
            assert_eq!(position.season, season, "season of {day}");
            assert_eq!(position.week, week, "week of {day}");
        }
    }

    #[test]
    fn test_placeholder_names() {
        assert_eq!(
            placeholder_name(date!(2026 - 03 - 10)).unwrap(),
            "Tuesday of the third week of Lent"
        );
        assert_eq!(
            placeholder_name(date!(2026 - 07 - 05)).unwrap(),
            "Fourteenth Sunday in Ordinary Time"
        );
        assert_eq!(placeholder_name(date!(2025 - 12 - 18)).unwrap(), "18 December");
        assert_eq!(placeholder_name(date!(2026 - 04 - 02)).unwrap(), "Holy Thursday");
        assert_eq!(placeholder_name(date!(2026 - 05 - 24)).unwrap(), "Pentecost Sunday");
    }

    #[test]
    fn test_placeholder_names_classify_to_computed_season() {
        let mut day: Date = date!(2025 - 01 - 01);
        while day <= date!(2026 - 12 - 31) {
            let position: SeasonPosition = season_position(day).unwrap();
            let name: String = placeholder_name(day).unwrap();
            assert_eq!(infer_season(&name), Some(position.season), "{day}: {name}");
            if let Some(week) = position.week {
                if name.contains("week") || name.contains("Sunday of") || name.contains("Sunday in") {
                    assert_eq!(infer_week(&name), Some(week), "{day}: {name}");
                }
            }
            day = day.next_day().unwrap();
        }
    }
}
