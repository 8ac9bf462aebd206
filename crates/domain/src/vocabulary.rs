// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Closed vocabulary of the Ordo and the lectionary.
//!
//! Every word list the classifier, normalizer and matcher rely on lives
//! here as plain data so it can be audited and extended without touching
//! control flow.

/// Ordinal words for weeks 1 through 34, indexed by `week - 1`.
pub const ORDINAL_WORDS: [&str; 34] = [
    "FIRST",
    "SECOND",
    "THIRD",
    "FOURTH",
    "FIFTH",
    "SIXTH",
    "SEVENTH",
    "EIGHTH",
    "NINTH",
    "TENTH",
    "ELEVENTH",
    "TWELFTH",
    "THIRTEENTH",
    "FOURTEENTH",
    "FIFTEENTH",
    "SIXTEENTH",
    "SEVENTEENTH",
    "EIGHTEENTH",
    "NINETEENTH",
    "TWENTIETH",
    "TWENTY-FIRST",
    "TWENTY-SECOND",
    "TWENTY-THIRD",
    "TWENTY-FOURTH",
    "TWENTY-FIFTH",
    "TWENTY-SIXTH",
    "TWENTY-SEVENTH",
    "TWENTY-EIGHTH",
    "TWENTY-NINTH",
    "THIRTIETH",
    "THIRTY-FIRST",
    "THIRTY-SECOND",
    "THIRTY-THIRD",
    "THIRTY-FOURTH",
];

/// Returns the uppercase ordinal word for a week number, if it has one.
#[must_use]
pub fn ordinal_word(week: u8) -> Option<&'static str> {
    let index: usize = usize::from(week).checked_sub(1)?;
    ORDINAL_WORDS.get(index).copied()
}

/// Maps an ordinal word back to its number.
///
/// Compound words are accepted with either a hyphen or a space.
#[must_use]
pub fn ordinal_value(word: &str) -> Option<u8> {
    let canonical: String = word.trim().to_uppercase().replace(' ', "-");
    ORDINAL_WORDS
        .iter()
        .position(|candidate| *candidate == canonical)
        .and_then(|index| u8::try_from(index + 1).ok())
}

/// Builds a regex alternation of all ordinal words, longest first, with
/// compound words accepting a hyphen or a space.
#[must_use]
pub fn ordinal_alternation() -> String {
    let mut words: Vec<&str> = ORDINAL_WORDS.to_vec();
    words.sort_by_key(|word| std::cmp::Reverse(word.len()));
    words
        .iter()
        .map(|word| word.replace('-', "[- ]"))
        .collect::<Vec<String>>()
        .join("|")
}

/// Keywords that mark an all-caps Ordo heading as a principal celebration.
pub const SOLEMNITY_KEYWORDS: &[&str] = &[
    "CHRISTMAS",
    "EASTER",
    "PENTECOST",
    "ASCENSION",
    "TRINITY",
    "ASSUMPTION",
    "EPIPHANY",
    "NATIVITY",
    "IMMACULATE",
    "ALL SAINTS",
    "MARY",
    "HOLY FAMILY",
    "BODY AND BLOOD",
    "SACRED HEART",
    "CHRIST",
    "SUNDAY OF ADVENT",
    "SUNDAY OF EASTER",
    "SUNDAY OF LENT",
    "SUNDAY IN ORDINARY",
];

/// Season keyword lists in classifier precedence order.
pub const ADVENT_KEYWORDS: &[&str] = &["ADVENT"];
pub const CHRISTMAS_KEYWORDS: &[&str] = &["CHRISTMAS", "EPIPHANY", "BAPTISM"];
pub const LENT_KEYWORDS: &[&str] = &["LENT", "ASH WEDNESDAY"];
pub const TRIDUUM_KEYWORDS: &[&str] = &["HOLY THURSDAY", "GOOD FRIDAY", "HOLY SATURDAY"];
pub const HOLY_WEEK_KEYWORDS: &[&str] = &["PALM", "HOLY WEEK", "PASSION"];
pub const EASTER_KEYWORDS: &[&str] = &["EASTER", "PENTECOST", "ASCENSION"];
pub const ORDINARY_KEYWORDS: &[&str] = &["ORDINARY"];

/// Weekday names as they appear in the Ordo, Monday first.
pub const WEEKDAY_NAMES: [&str; 6] = [
    "MONDAY",
    "TUESDAY",
    "WEDNESDAY",
    "THURSDAY",
    "FRIDAY",
    "SATURDAY",
];

/// Month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "JANUARY",
    "FEBRUARY",
    "MARCH",
    "APRIL",
    "MAY",
    "JUNE",
    "JULY",
    "AUGUST",
    "SEPTEMBER",
    "OCTOBER",
    "NOVEMBER",
    "DECEMBER",
];

/// Regional feast titles rewritten to the lectionary's spelling before
/// any other normalization step.
pub const FEAST_ALIASES: &[(&str, &str)] = &[
    ("THE MOST HOLY TRINITY", "TRINITY SUNDAY"),
    (
        "THE MOST HOLY BODY AND BLOOD OF CHRIST",
        "THE BODY AND BLOOD OF CHRIST",
    ),
    (
        "THE NATIVITY OF SAINT JOHN THE BAPTIST",
        "BIRTH OF JOHN THE BAPTIST",
    ),
    ("THE TRANSFIGURATION OF THE LORD", "TRANSFIGURATION"),
    ("TRANSFIGURATION OF THE LORD", "TRANSFIGURATION"),
    ("THE EXALTATION OF THE HOLY CROSS", "EXALTATION OF THE CROSS"),
    ("EXALTATION OF THE HOLY CROSS", "EXALTATION OF THE CROSS"),
    ("THE CHAIR OF ST PETER", "CHAIR OF PETER"),
    ("THE CHAIR OF SAINT PETER", "CHAIR OF PETER"),
    ("THE VISITATION OF THE BLESSED VIRGIN MARY", "VISITATION"),
    ("THE PRESENTATION OF THE LORD", "PRESENTATION OF THE LORD"),
    ("THE NATIVITY OF THE BLESSED VIRGIN MARY", "BIRTH OF MARY"),
    ("THE QUEENSHIP OF THE BLESSED VIRGIN MARY", "QUEENSHIP OF MARY"),
    (
        "THE PRESENTATION OF THE BLESSED VIRGIN MARY",
        "PRESENTATION OF MARY",
    ),
    ("THE COMMEMORATION OF ALL THE FAITHFUL DEPARTED", "ALL SOULS"),
    ("THE DEDICATION OF THE LATERAN BASILICA", "ST JOHN LATERAN"),
    ("DEDICATION OF THE LATERAN BASILICA", "ST JOHN LATERAN"),
    (
        "SAINT THÉRÈSE OF THE CHILD JESUS",
        "ST THERESE OF THE CHILD JESUS",
    ),
    (
        "SAINT THERESE OF THE CHILD JESUS",
        "ST THERESE OF THE CHILD JESUS",
    ),
];

/// Feasts fixed to a calendar date, keyed by an Ordo phrase and mapped to
/// the keyword their lectionary row carries alongside a date prefix such as
/// "6 August".
pub const FIXED_FEASTS: &[(&str, &str)] = &[
    ("TRANSFIGURATION", "TRANSFIGURATION"),
    ("PRESENTATION OF THE LORD", "PRESENTATION"),
    ("ANNUNCIATION", "ANNUNCIATION"),
    ("ASSUMPTION", "ASSUMPTION"),
    ("BIRTH OF MARY", "BIRTH OF MARY"),
    ("NATIVITY OF THE BLESSED VIRGIN", "BIRTH OF MARY"),
    ("NATIVITY OF MARY", "BIRTH OF MARY"),
    ("EXALTATION", "EXALTATION"),
    ("HOLY CROSS", "EXALTATION"),
    ("IMMACULATE CONCEPTION", "IMMACULATE CONCEPTION"),
    ("OUR LADY OF THE ROSARY", "ROSARY"),
    ("GUARDIAN ANGELS", "GUARDIAN ANGELS"),
    ("ALL SOULS", "ALL SOULS"),
    ("FAITHFUL DEPARTED", "ALL SOULS"),
    ("LATERAN", "JOHN LATERAN"),
    ("CHAIR OF PETER", "CHAIR OF PETER"),
    ("CONVERSION OF PAUL", "CONVERSION OF PAUL"),
    ("BIRTH OF JOHN THE BAPTIST", "BIRTH OF JOHN"),
    ("NATIVITY OF JOHN THE BAPTIST", "BIRTH OF JOHN"),
    ("NATIVITY OF SAINT JOHN", "BIRTH OF JOHN"),
    ("PETER AND PAUL", "PETER AND PAUL"),
    ("VISITATION", "VISITATION"),
    ("QUEENSHIP", "QUEENSHIP"),
    ("HELP OF CHRISTIANS", "MARY HELP OF CHRISTIANS"),
    ("MARY OF THE CROSS", "MARY OF THE CROSS"),
    ("MICHAEL, GABRIEL", "MICHAEL, GABRIEL AND RAPHAEL"),
    ("ARCHANGELS", "MICHAEL, GABRIEL AND RAPHAEL"),
    ("SIMON AND JUDE", "SIMON AND JUDE"),
    ("PHILIP AND JAMES", "PHILIP AND JAMES"),
    ("ANDREW", "ANDREW"),
    ("THOMAS", "THOMAS"),
    ("BARTHOLOMEW", "BARTHOLOMEW"),
    ("MATTHEW", "MATTHEW"),
    ("LUKE", "LUKE"),
    ("MARK", "MARK"),
];

/// Lectionary `year` tags that never restrict a Sunday to one cycle.
pub const CYCLE_NEUTRAL_YEAR_TAGS: &[&str] = &["SEASON", "FEAST", "1", "2", "I", "II"];
