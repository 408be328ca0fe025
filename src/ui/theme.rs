//! Light/dark preference and its persistence.

use std::fmt;
use std::str::FromStr;

use super::store::{self, PreferenceStore};

pub const THEME_KEY: &str = "theme";
/// Class set on the page root while the light theme is active.
pub const LIGHT_CLASS: &str = "light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_light(&self) -> bool {
        *self == Theme::Light
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "☀️",
            Theme::Dark => "🌙",
        }
    }

    pub fn root_class(&self) -> Option<&'static str> {
        self.is_light().then_some(LIGHT_CLASS)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme '{}'", other)),
        }
    }
}

/// Reads the stored theme, falling back to dark when nothing usable is stored.
pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(value)) => value.parse::<Theme>().unwrap_or_else(|e| {
            log::warn!("{}, using dark theme", e);
            Theme::Dark
        }),
        Ok(None) => Theme::Dark,
        Err(e) => {
            log::warn!("Failed to read theme preference: {}", e);
            Theme::Dark
        }
    }
}

pub fn save_theme(store: &mut dyn PreferenceStore, theme: Theme) -> store::Result<()> {
    store.set(THEME_KEY, theme.as_str())
}
