//! Turns raw form input into a date that is both in range and real.
//!
//! Checks run in a fixed order and stop at the first failure:
//! presence, day range, month range, year range, then the calendar
//! round-trip.

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::clock::Clock;
use crate::consts::MIN_DAY;
use crate::input::{DateInput, Field};
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use crate::ValidationError;

/// A birth date that exists in the Gregorian calendar and lies within
/// `MIN_YEAR..=current year`. Only produced by [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct ValidatedDate {
    year: Year,
    month: Month,
    day: Day,
    #[serde(skip)]
    date: NaiveDate,
}

impl ValidatedDate {
    /// Runs the calendar round-trip on already range-checked components
    ///
    /// # Errors
    /// Returns `ValidationError::InvalidCalendarDate` if the triple does not name a real day.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, ValidationError> {
        let date = round_trip(year, month, day)?;
        Ok(Self {
            year,
            month,
            day,
            date,
        })
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// The date as a chrono value
    pub const fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Builds the date leniently, starting from the first of the month and
/// adding `day - 1` days so that overflow rolls into the next month, then
/// requires every component to read back unchanged.
fn round_trip(year: Year, month: Month, day: Day) -> Result<NaiveDate, ValidationError> {
    let y = i32::from(year.get());
    let m = u32::from(month.get());
    let d = u32::from(day.get());

    let date = NaiveDate::from_ymd_opt(y, m, u32::from(MIN_DAY))
        .and_then(|first| first.checked_add_days(Days::new(u64::from(day.get() - MIN_DAY))))
        .ok_or(ValidationError::InvalidCalendarDate)?;

    if date.year() == y && date.month() == m && date.day() == d {
        Ok(date)
    } else {
        Err(ValidationError::InvalidCalendarDate)
    }
}

/// Validates one submission against the given current year.
///
/// # Errors
/// Returns the first failing [`ValidationError`]; `MissingFields` lists
/// every empty field.
pub fn validate(input: &DateInput, current_year: i32) -> Result<ValidatedDate, ValidationError> {
    let missing = input.missing();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let day = Day::from_parsed(input.parsed(Field::Day))?;
    let month = Month::from_parsed(input.parsed(Field::Month))?;
    let year = Year::from_parsed(input.parsed(Field::Year), current_year)?;

    ValidatedDate::new(year, month, day)
}

/// Same as [`validate`], reading the current year from `clock`.
///
/// # Errors
/// See [`validate`].
pub fn validate_now<C: Clock>(input: &DateInput, clock: &C) -> Result<ValidatedDate, ValidationError> {
    validate(input, clock.current_year())
}
