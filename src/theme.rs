use serde::{Deserialize, Serialize};

use crate::prelude::*;

/// A color theme of the widget.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[display(fmt = "light")]
    Light,
    #[display(fmt = "dark")]
    Dark,
    #[display(fmt = "blue")]
    Blue,
    #[display(fmt = "green")]
    Green,
}

impl Theme {
    /// Identifier a theme menu entry selects with
    pub const fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }

    /// Name shown in the theme menu
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "Light Mode",
            Self::Dark => "Dark Mode",
            Self::Blue => "Blue Theme",
            Self::Green => "Green Theme",
        }
    }

    /// Short label for the theme button
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::Blue => "Blue",
            Self::Green => "Green",
        }
    }

    /// Value of the persisted dark-mode flag while this theme is active
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Theme restored from the persisted flag
    pub const fn from_dark_flag(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

/// Which themes a form offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeSet {
    /// Light and dark only
    Duo,
    /// Light, dark, blue and green
    #[default]
    Quad,
}

const DUO: [Theme; 2] = [Theme::Light, Theme::Dark];
const QUAD: [Theme; 4] = [Theme::Light, Theme::Dark, Theme::Blue, Theme::Green];

impl ThemeSet {
    pub const fn themes(self) -> &'static [Theme] {
        match self {
            Self::Duo => &DUO,
            Self::Quad => &QUAD,
        }
    }

    pub fn contains(self, theme: Theme) -> bool {
        self.themes().contains(&theme)
    }

    /// Maps a theme id to a theme of this set. Unknown ids and themes the
    /// set does not offer fall back to [`Theme::Dark`].
    pub fn resolve(self, id: &str) -> Theme {
        self.themes()
            .iter()
            .copied()
            .find(|t| t.id() == id.trim())
            .unwrap_or(Theme::Dark)
    }
}
