//! Headless state of the age-calculator widget.
//!
//! A renderer reads the field values, highlights, message, result and
//! theme from [`AgeForm`] and forwards user events to it; nothing here
//! draws anything.

use serde::Serialize;
use tracing::{debug, warn};

use crate::age::{AgeResult, calculate};
use crate::clock::{Clock, SystemClock};
use crate::config::FormConfig;
use crate::consts::PLACEHOLDER;
use crate::input::{DateInput, Field, FieldSet};
use crate::prefs::PreferenceStore;
use crate::theme::Theme;
use crate::{PreferenceError, ValidationError};

/// The three numbers as shown, `"--"` until an age has been computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeDisplay {
    pub years: String,
    pub months: String,
    pub days: String,
}

impl AgeDisplay {
    fn placeholder() -> Self {
        Self {
            years: PLACEHOLDER.to_owned(),
            months: PLACEHOLDER.to_owned(),
            days: PLACEHOLDER.to_owned(),
        }
    }
}

impl From<AgeResult> for AgeDisplay {
    fn from(age: AgeResult) -> Self {
        Self {
            years: age.years.to_string(),
            months: age.months.to_string(),
            days: age.days.to_string(),
        }
    }
}

/// One age-calculator form, for either theme set.
#[derive(Debug)]
pub struct AgeForm<S, C = SystemClock> {
    config: FormConfig,
    store: S,
    clock: C,
    input: DateInput,
    highlighted: FieldSet,
    error: Option<ValidationError>,
    age: Option<AgeResult>,
    theme: Theme,
    menu_open: bool,
}

impl<S: PreferenceStore> AgeForm<S, SystemClock> {
    /// A form reading "now" from the host clock
    pub fn with_system_clock(config: FormConfig, store: S) -> Self {
        Self::new(config, store, SystemClock)
    }
}

impl<S: PreferenceStore, C: Clock> AgeForm<S, C> {
    /// Creates the form, restoring the theme from the store once.
    pub fn new(config: FormConfig, store: S, clock: C) -> Self {
        let theme = match store.read() {
            Ok(Some(dark)) => Theme::from_dark_flag(dark),
            Ok(None) => config.default_theme,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable theme preference");
                config.default_theme
            }
        };
        debug!(%theme, theme_set = ?config.theme_set, "Form created");

        Self {
            config,
            store,
            clock,
            input: DateInput::default(),
            highlighted: FieldSet::empty(),
            error: None,
            age: None,
            theme,
            menu_open: false,
        }
    }

    /// Records a new raw value and clears that field's highlight.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.input.set(field, value);
        self.highlighted.remove(field);
    }

    pub const fn input(&self) -> &DateInput {
        &self.input
    }

    /// Validates the current input and computes the age.
    ///
    /// On failure the message and highlights are updated and the last
    /// result stays on display.
    ///
    /// # Errors
    /// Returns the [`ValidationError`] that rejected the input.
    pub fn submit(&mut self) -> Result<AgeResult, ValidationError> {
        match calculate(&self.input, &self.clock) {
            Ok(age) => {
                debug!(%age, "Age computed");
                self.age = Some(age);
                self.error = None;
                self.highlighted = FieldSet::empty();
                Ok(age)
            }
            Err(e) => {
                debug!(error = %e, fields = %e.fields(), "Submission rejected");
                self.highlighted = e.fields();
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn display(&self) -> AgeDisplay {
        self.age
            .map_or_else(AgeDisplay::placeholder, AgeDisplay::from)
    }

    pub const fn age(&self) -> Option<AgeResult> {
        self.age
    }

    pub const fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Message to show under the form, if the last submission failed
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    pub const fn is_highlighted(&self, field: Field) -> bool {
        self.highlighted.contains(field)
    }

    pub const fn highlighted(&self) -> FieldSet {
        self.highlighted
    }

    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Themes the menu offers
    pub const fn themes(&self) -> &'static [Theme] {
        self.config.theme_set.themes()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub const fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Applies the theme a menu entry names, closes the menu and persists
    /// whether the result is the dark theme.
    ///
    /// # Errors
    /// Returns `PreferenceError` if the flag could not be stored; the theme
    /// is applied regardless.
    pub fn select_theme(&mut self, id: &str) -> Result<Theme, PreferenceError> {
        let theme = self.config.theme_set.resolve(id);
        self.apply(theme)
    }

    /// Flips between light and dark, as the two-theme widget's button does.
    /// Any non-dark theme switches to dark.
    ///
    /// # Errors
    /// Returns `PreferenceError` if the flag could not be stored; the theme
    /// is applied regardless.
    pub fn toggle_dark_mode(&mut self) -> Result<Theme, PreferenceError> {
        let theme = Theme::from_dark_flag(!self.theme.is_dark());
        self.apply(theme)
    }

    fn apply(&mut self, theme: Theme) -> Result<Theme, PreferenceError> {
        self.theme = theme;
        self.menu_open = false;
        self.store.write(theme.is_dark())?;
        Ok(theme)
    }

    pub const fn config(&self) -> &FormConfig {
        &self.config
    }

    pub const fn store(&self) -> &S {
        &self.store
    }
}
