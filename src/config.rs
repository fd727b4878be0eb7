use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;
use crate::consts::PREFERENCE_KEY;
use crate::prefs::{JsonFileStore, MemoryStore};
use crate::theme::{Theme, ThemeSet};

/// Presentation settings for an [`AgeForm`](crate::AgeForm).
///
/// Every field is optional in JSON; missing ones take the defaults of the
/// four-theme widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    /// Themes offered by the theme menu
    pub theme_set: ThemeSet,
    /// Theme used when no preference has been stored
    pub default_theme: Theme,
    /// Key the dark-mode flag is stored under
    pub preference_key: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            theme_set: ThemeSet::Quad,
            default_theme: Theme::Dark,
            preference_key: PREFERENCE_KEY.to_owned(),
        }
    }
}

impl FormConfig {
    /// Two-theme variant with otherwise default settings
    pub fn duo() -> Self {
        Self {
            theme_set: ThemeSet::Duo,
            ..Self::default()
        }
    }

    /// Parses a JSON configuration document
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` if the document is not valid JSON or a
    /// value has the wrong shape.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.normalized())
    }

    /// An in-memory store keyed by `preference_key`
    pub fn memory_store(&self) -> MemoryStore {
        MemoryStore::new(self.preference_key.clone())
    }

    /// A JSON file store at `path` keyed by `preference_key`
    pub fn file_store(&self, path: impl Into<PathBuf>) -> JsonFileStore {
        JsonFileStore::new(path, self.preference_key.clone())
    }

    /// A default theme outside the offered set falls back to dark.
    fn normalized(mut self) -> Self {
        if !self.theme_set.contains(self.default_theme) {
            self.default_theme = Theme::Dark;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FormConfig::default();
        assert_eq!(config.theme_set, ThemeSet::Quad);
        assert_eq!(config.default_theme, Theme::Dark);
        assert_eq!(config.preference_key, "darkMode");
    }

    #[test]
    fn test_from_empty_json() {
        assert_eq!(FormConfig::from_json("{}").unwrap(), FormConfig::default());
    }

    #[test]
    fn test_from_json() {
        let config = FormConfig::from_json(
            r#"{"themeSet":"duo","defaultTheme":"light","preferenceKey":"theme.dark"}"#,
        )
        .unwrap();
        assert_eq!(config.theme_set, ThemeSet::Duo);
        assert_eq!(config.default_theme, Theme::Light);
        assert_eq!(config.preference_key, "theme.dark");
    }

    #[test]
    fn test_default_theme_outside_set() {
        let config = FormConfig::from_json(r#"{"themeSet":"duo","defaultTheme":"green"}"#).unwrap();
        assert_eq!(config.default_theme, Theme::Dark);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            FormConfig::from_json(r#"{"themeSet":"triple"}"#),
            Err(ConfigError::Parse(_))
        ));
        assert!(FormConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_stores_use_configured_key() {
        use crate::prefs::PreferenceStore;

        let config = FormConfig {
            preference_key: "prefs.dark".to_owned(),
            ..FormConfig::default()
        };
        let mut store = config.memory_store();
        store.write(true).unwrap();
        assert_eq!(store, MemoryStore::with_raw("prefs.dark", "true"));

        let store = config.file_store("/tmp/prefs.json");
        assert_eq!(store, JsonFileStore::new("/tmp/prefs.json", "prefs.dark"));
    }

    #[test]
    fn test_duo() {
        let config = FormConfig::duo();
        assert_eq!(config.theme_set, ThemeSet::Duo);
        assert_eq!(config.default_theme, Theme::Dark);
    }
}
