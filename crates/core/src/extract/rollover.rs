// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Month and year tracking across day headers.
//!
//! Day headers carry only a day-of-month. The month and year are inferred
//! from the sequence: a day number that drops after a plausible month end
//! starts the next month, and December rolls into January of the next year.

use time::Month;

/// The smallest previous day that counts as a plausible month end.
pub const BELIEVABLE_MONTH_END: u8 = 20;

/// Position of the extractor within the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    /// The year the current header belongs to.
    pub year: i32,
    /// The month the current header belongs to.
    pub month: Month,
    /// The day-of-month of the previous header, if any.
    pub last_day: Option<u8>,
}

impl MonthCursor {
    /// Creates a cursor positioned at the start of a month.
    #[must_use]
    pub const fn new(year: i32, month: Month) -> Self {
        Self {
            year,
            month,
            last_day: None,
        }
    }

    /// Returns true if the previous header was late enough in its month for
    /// a smaller day number to mean the month has turned.
    #[must_use]
    pub fn previous_is_month_end(&self) -> bool {
        self.last_day.is_some_and(|day| day >= BELIEVABLE_MONTH_END)
    }

    /// Advances the cursor to the header with the given day number.
    #[must_use]
    pub fn advance(self, day: u8, explicit_month: Option<Month>) -> Self {
        next_position(self, day, explicit_month)
    }
}

/// Computes the cursor for the next day header.
///
/// # Arguments
///
/// * `cursor` - The cursor after the previous header
/// * `day` - The day-of-month of the new header
/// * `explicit_month` - A month named in the header segment, if any
///
/// # Returns
///
/// The cursor positioned on the new header.
///
/// An explicit month always wins. If it is earlier in the year than the
/// current month and the previous day was a plausible month end, the year
/// advances too. Without one, a day smaller than a plausible month end
/// moves to the next month.
#[must_use]
pub fn next_position(cursor: MonthCursor, day: u8, explicit_month: Option<Month>) -> MonthCursor {
    let month_end: bool = cursor.previous_is_month_end();
    let mut year: i32 = cursor.year;
    let month: Month = match explicit_month {
        Some(named) => {
            if u8::from(named) < u8::from(cursor.month) && month_end {
                year += 1;
            }
            named
        }
        None => match cursor.last_day {
            Some(last) if day < last && month_end => {
                if cursor.month == Month::December {
                    year += 1;
                }
                cursor.month.next()
            }
            _ => cursor.month,
        },
    };

    MonthCursor {
        year,
        month,
        last_day: Some(day),
    }
}
