//! Birth date validation and calendar-aware age calculation.
//!
//! Raw day/month/year input goes through [`validate`], which yields a
//! [`ValidatedDate`] or the first [`ValidationError`] found; [`compute_age`]
//! then decomposes the time elapsed since that date into whole years,
//! months and days. [`AgeForm`] wraps both behind the state of a themed
//! form widget, persisting its dark-mode flag through a [`PreferenceStore`].

mod age;
mod clock;
mod config;
mod consts;
mod error;
mod form;
mod input;
mod prefs;
mod prelude;
mod theme;
mod types;
mod validate;

pub use age::{AgeResult, calculate, compute_age};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::FormConfig;
pub use consts::*;
pub use error::{ConfigError, PreferenceError, ValidationError};
pub use form::{AgeDisplay, AgeForm};
pub use input::{DateInput, Field, FieldSet, ParsedField, UnknownField};
pub use prefs::{JsonFileStore, MemoryStore, PreferenceStore};
pub use theme::{Theme, ThemeSet};
pub use types::{Day, Month, Year};
pub use validate::{ValidatedDate, validate, validate_now};
