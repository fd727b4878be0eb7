//! Raw form input and the explicit parse step applied to each field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// One of the three date fields of the form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
}

impl Field {
    /// Every field, in form order
    pub const ALL: [Self; 3] = [Self::Day, Self::Month, Self::Year];
}

/// Error returned when a field name is not `day`, `month` or `year`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            other => Err(UnknownField(other.to_owned())),
        }
    }
}

/// A set of form fields, used to flag which inputs to highlight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldSet {
    day: bool,
    month: bool,
    year: bool,
}

impl FieldSet {
    /// The empty set
    pub const fn empty() -> Self {
        Self {
            day: false,
            month: false,
            year: false,
        }
    }

    /// All three fields
    pub const fn all() -> Self {
        Self {
            day: true,
            month: true,
            year: true,
        }
    }

    /// A set holding a single field
    pub fn only(field: Field) -> Self {
        let mut set = Self::empty();
        set.insert(field);
        set
    }

    pub const fn contains(self, field: Field) -> bool {
        match field {
            Field::Day => self.day,
            Field::Month => self.month,
            Field::Year => self.year,
        }
    }

    pub const fn is_empty(self) -> bool {
        !self.day && !self.month && !self.year
    }

    pub fn insert(&mut self, field: Field) {
        *self.slot(field) = true;
    }

    pub fn remove(&mut self, field: Field) {
        *self.slot(field) = false;
    }

    /// Iterates the fields in the set, in form order
    pub fn iter(self) -> impl Iterator<Item = Field> {
        Field::ALL.into_iter().filter(move |f| self.contains(*f))
    }

    fn slot(&mut self, field: Field) -> &mut bool {
        match field {
            Field::Day => &mut self.day,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
        }
    }
}

impl FromIterator<Field> for FieldSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        let mut set = Self::empty();
        for field in iter {
            set.insert(field);
        }
        set
    }
}

impl fmt::Display for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{field}")?;
            first = false;
        }
        Ok(())
    }
}

/// Outcome of parsing one raw field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsedField {
    /// Nothing but whitespace was entered
    Empty,
    /// A base-10 integer
    Number(i64),
    /// Something was entered but it is not an integer
    NotANumber,
}

impl ParsedField {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        trimmed
            .parse::<i64>()
            .map_or(Self::NotANumber, Self::Number)
    }

    /// Returns the parsed number, if any
    pub const fn number(self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(n),
            Self::Empty | Self::NotANumber => None,
        }
    }
}

/// The three raw values of one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct DateInput {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateInput {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    /// Builds an input from already-numeric values
    pub fn from_numbers(day: i64, month: i64, year: i64) -> Self {
        Self::new(day.to_string(), month.to_string(), year.to_string())
    }

    /// Returns the raw value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Year => &self.year,
        }
    }

    /// Replaces the raw value of a field
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Day => &mut self.day,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
        };
        *slot = value.into();
    }

    pub fn parsed(&self, field: Field) -> ParsedField {
        ParsedField::parse(self.get(field))
    }

    /// Fields left empty
    pub fn missing(&self) -> FieldSet {
        Field::ALL
            .into_iter()
            .filter(|f| self.parsed(*f) == ParsedField::Empty)
            .collect()
    }
}

impl From<(i64, i64, i64)> for DateInput {
    fn from((day, month, year): (i64, i64, i64)) -> Self {
        Self::from_numbers(day, month, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_cases() {
        struct TestCase {
            raw: &'static str,
            expected: ParsedField,
        }

        let cases = [
            TestCase {
                raw: "",
                expected: ParsedField::Empty,
            },
            TestCase {
                raw: "   ",
                expected: ParsedField::Empty,
            },
            TestCase {
                raw: "15",
                expected: ParsedField::Number(15),
            },
            TestCase {
                raw: " 07 ",
                expected: ParsedField::Number(7),
            },
            TestCase {
                raw: "-3",
                expected: ParsedField::Number(-3),
            },
            TestCase {
                raw: "abc",
                expected: ParsedField::NotANumber,
            },
            TestCase {
                raw: "12abc",
                expected: ParsedField::NotANumber,
            },
            TestCase {
                raw: "1.5",
                expected: ParsedField::NotANumber,
            },
        ];

        for case in &cases {
            assert_eq!(
                ParsedField::parse(case.raw),
                case.expected,
                "Raw input {:?}",
                case.raw
            );
        }
    }

    #[test]
    fn test_parsed_number() {
        assert_eq!(ParsedField::Number(4).number(), Some(4));
        assert_eq!(ParsedField::Empty.number(), None);
        assert_eq!(ParsedField::NotANumber.number(), None);
    }

    #[test]
    fn test_field_from_str() {
        assert_eq!("day".parse::<Field>().unwrap(), Field::Day);
        assert_eq!("month".parse::<Field>().unwrap(), Field::Month);
        assert_eq!(" year ".parse::<Field>().unwrap(), Field::Year);

        let result = "hour".parse::<Field>();
        assert_eq!(result, Err(UnknownField("hour".to_owned())));
    }

    #[test]
    fn test_field_display_matches_from_str() {
        for field in Field::ALL {
            assert_eq!(field.to_string().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_field_set_insert_remove() {
        let mut set = FieldSet::empty();
        assert!(set.is_empty());

        set.insert(Field::Month);
        assert!(set.contains(Field::Month));
        assert!(!set.contains(Field::Day));
        assert!(!set.is_empty());

        set.remove(Field::Month);
        assert!(set.is_empty());
    }

    #[test]
    fn test_field_set_iter_in_form_order() {
        let set: FieldSet = [Field::Year, Field::Day].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Field::Day, Field::Year]);
        assert_eq!(set.to_string(), "day, year");
        assert_eq!(FieldSet::all().iter().count(), 3);
    }

    #[test]
    fn test_date_input_missing() {
        let input = DateInput::new("", "6", "1990");
        assert_eq!(input.missing(), FieldSet::only(Field::Day));

        let input = DateInput::new("", " ", "1990");
        let missing = input.missing();
        assert!(missing.contains(Field::Day));
        assert!(missing.contains(Field::Month));
        assert!(!missing.contains(Field::Year));

        assert!(DateInput::from_numbers(1, 2, 2000).missing().is_empty());
    }

    #[test]
    fn test_date_input_get_set() {
        let mut input = DateInput::default();
        input.set(Field::Month, "11");
        assert_eq!(input.get(Field::Month), "11");
        assert_eq!(input.parsed(Field::Month), ParsedField::Number(11));
        assert_eq!(input.parsed(Field::Day), ParsedField::Empty);
    }

    #[test]
    fn test_date_input_from_tuple() {
        let input: DateInput = (15, 6, 1990).into();
        assert_eq!(input, DateInput::new("15", "6", "1990"));
    }

    #[test]
    fn test_date_input_serde() {
        let input: DateInput = serde_json::from_str(r#"{"day":"3","year":"2001"}"#).unwrap();
        assert_eq!(input, DateInput::new("3", "", "2001"));

        let json = serde_json::to_string(&FieldSet::only(Field::Year)).unwrap();
        assert_eq!(json, r#"{"day":false,"month":false,"year":true}"#);
    }
}
