use std::path::PathBuf;

use crate::consts::MIN_YEAR;
use crate::input::{Field, FieldSet};

/// Why a submission was rejected. Exactly one reason is reported per
/// submission, the first failing check wins.
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    /// One or more fields were left empty.
    #[error("All fields are required")]
    MissingFields(FieldSet),

    #[error("Day must be between 1 and 31")]
    DayOutOfRange,

    #[error("Month must be between 1 and 12")]
    MonthOutOfRange,

    /// Year outside `MIN_YEAR..=max`, where `max` is the current year.
    #[error("Year must be between {min} and {max}", min = MIN_YEAR)]
    YearOutOfRange { max: i32 },

    /// The numbers are in range but do not name a real day (31 April, 29 February 2001).
    #[error("Invalid date")]
    InvalidCalendarDate,

    #[error("Birthdate cannot be in the future")]
    FutureDate,
}

impl ValidationError {
    /// Fields a form should highlight for this error. Each field is flagged
    /// on its own account.
    pub fn fields(&self) -> FieldSet {
        match self {
            Self::MissingFields(fields) => *fields,
            Self::DayOutOfRange => FieldSet::only(Field::Day),
            Self::MonthOutOfRange => FieldSet::only(Field::Month),
            Self::YearOutOfRange { .. } => FieldSet::only(Field::Year),
            Self::InvalidCalendarDate | Self::FutureDate => FieldSet::all(),
        }
    }
}

/// Failure reading or writing the stored theme preference.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("Preference storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The stored value under `key` is not a JSON boolean.
    #[error("Stored preference {key:?} is not a JSON boolean: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The preference file exists but does not hold a JSON object of strings.
    #[error("Preference file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not encode preferences: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Failure loading a [`FormConfig`](crate::FormConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid form configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        struct TestCase {
            error: ValidationError,
            message: &'static str,
        }

        let cases = [
            TestCase {
                error: ValidationError::MissingFields(FieldSet::only(Field::Day)),
                message: "All fields are required",
            },
            TestCase {
                error: ValidationError::DayOutOfRange,
                message: "Day must be between 1 and 31",
            },
            TestCase {
                error: ValidationError::MonthOutOfRange,
                message: "Month must be between 1 and 12",
            },
            TestCase {
                error: ValidationError::YearOutOfRange { max: 2025 },
                message: "Year must be between 1900 and 2025",
            },
            TestCase {
                error: ValidationError::InvalidCalendarDate,
                message: "Invalid date",
            },
            TestCase {
                error: ValidationError::FutureDate,
                message: "Birthdate cannot be in the future",
            },
        ];

        for case in &cases {
            assert_eq!(case.error.to_string(), case.message);
        }
    }

    #[test]
    fn test_highlighted_fields_are_independent() {
        let missing: FieldSet = [Field::Month, Field::Year].into_iter().collect();
        assert_eq!(ValidationError::MissingFields(missing).fields(), missing);

        assert_eq!(
            ValidationError::DayOutOfRange.fields(),
            FieldSet::only(Field::Day)
        );
        assert_eq!(
            ValidationError::MonthOutOfRange.fields(),
            FieldSet::only(Field::Month)
        );
        assert_eq!(
            ValidationError::YearOutOfRange { max: 2024 }.fields(),
            FieldSet::only(Field::Year)
        );
        assert_eq!(ValidationError::InvalidCalendarDate.fields(), FieldSet::all());
        assert_eq!(ValidationError::FutureDate.fields(), FieldSet::all());
    }

    #[test]
    fn test_decode_error_names_key() {
        let source = serde_json::from_str::<bool>("maybe").unwrap_err();
        let err = PreferenceError::Decode {
            key: "darkMode".to_owned(),
            source,
        };
        assert!(err.to_string().starts_with("Stored preference \"darkMode\""));
    }
}
