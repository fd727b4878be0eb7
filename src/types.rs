use crate::ValidationError;
use crate::consts::{MAX_DAY, MAX_MONTH, MIN_DAY, MIN_YEAR};
use crate::input::ParsedField;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A day number in `1..=MAX_DAY` (1..=31).
/// Whether the day exists in a particular month is checked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it lies in `1..=MAX_DAY`
    ///
    /// # Errors
    /// Returns `ValidationError::DayOutOfRange` otherwise.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|d| (MIN_DAY..=MAX_DAY).contains(d))
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(ValidationError::DayOutOfRange)
    }

    /// Range-checks a parsed field; anything that is not a number is out of range
    ///
    /// # Errors
    /// Returns `ValidationError::DayOutOfRange` if the field is not a number in range.
    pub fn from_parsed(parsed: ParsedField) -> Result<Self, ValidationError> {
        parsed
            .number()
            .ok_or(ValidationError::DayOutOfRange)
            .and_then(Self::new)
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it lies in `1..=MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ValidationError::MonthOutOfRange` otherwise.
    pub fn new(value: i64) -> Result<Self, ValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|m| *m <= MAX_MONTH)
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(ValidationError::MonthOutOfRange)
    }

    /// # Errors
    /// Returns `ValidationError::MonthOutOfRange` if the field is not a number in range.
    pub fn from_parsed(parsed: ParsedField) -> Result<Self, ValidationError> {
        parsed
            .number()
            .ok_or(ValidationError::MonthOutOfRange)
            .and_then(Self::new)
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based month index (January is 0)
    #[inline]
    pub const fn index(self) -> u8 {
        self.0.get() - 1
    }
}

impl TryFrom<u8> for Month {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(i64::from(value))
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A birth year in `MIN_YEAR..=current year`.
///
/// Not deserializable: the upper bound depends on when the value is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it lies in `MIN_YEAR..=max`
    ///
    /// # Errors
    /// Returns `ValidationError::YearOutOfRange` carrying `max` otherwise.
    pub fn new(value: i64, max: i32) -> Result<Self, ValidationError> {
        let in_range = (i64::from(MIN_YEAR)..=i64::from(max)).contains(&value);
        in_range
            .then(|| u16::try_from(value).ok())
            .flatten()
            .and_then(NonZeroU16::new)
            .map(Self)
            .ok_or(ValidationError::YearOutOfRange { max })
    }

    /// # Errors
    /// Returns `ValidationError::YearOutOfRange` if the field is not a number in range.
    pub fn from_parsed(parsed: ParsedField, max: i32) -> Result<Self, ValidationError> {
        parsed
            .number()
            .ok_or(ValidationError::YearOutOfRange { max })
            .and_then(|n| Self::new(n, max))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
