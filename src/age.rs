//! Elapsed age between a birth date and "now".
//!
//! The elapsed time is added to the Unix epoch and the calendar fields of
//! the resulting instant are read back: whole years past 1970, the
//! zero-based month and the zero-based day of month. Leap years and month
//! lengths come from chrono's calendar arithmetic rather than fixed ratios.

use chrono::{DateTime, Datelike, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ValidationError;
use crate::clock::Clock;
use crate::consts::ANCHOR_YEAR;
use crate::input::DateInput;
use crate::prelude::*;
use crate::validate::{ValidatedDate, validate};

/// Whole years, months and days elapsed since birth.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{years} years, {months} months, {days} days")]
pub struct AgeResult {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Computes the age of someone born on `birth` at local time `now`.
///
/// # Errors
/// Returns `ValidationError::FutureDate` if `now` is before local midnight
/// of the birth date.
pub fn compute_age(birth: &ValidatedDate, now: NaiveDateTime) -> Result<AgeResult, ValidationError> {
    let born = birth.date().and_time(NaiveTime::MIN);
    if now < born {
        return Err(ValidationError::FutureDate);
    }

    let anchor = DateTime::<Utc>::UNIX_EPOCH.naive_utc() + (now - born);

    Ok(AgeResult {
        years: anchor.year().abs_diff(ANCHOR_YEAR),
        months: anchor.month0(),
        days: anchor.day0(),
    })
}

/// Validates `input` and computes the age, reading the clock once so both
/// steps see the same instant.
///
/// # Errors
/// Returns the first [`ValidationError`] raised by either step.
pub fn calculate<C: Clock>(input: &DateInput, clock: &C) -> Result<AgeResult, ValidationError> {
    let now = clock.now();
    let birth = validate(input, now.year())?;
    compute_age(&birth, now)
}
