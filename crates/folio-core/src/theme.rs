use crate::constants::THEME_STORAGE_KEY;
use crate::error::FolioError;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Font Awesome icon class shown on the theme button.
    pub fn icon_class(self) -> &'static str {
        match self {
            Theme::Light => "fa-sun",
            Theme::Dark => "fa-moon",
        }
    }

    pub fn button_html(self) -> String {
        format!("<i class=\"fa-solid {}\"></i>", self.icon_class())
    }

    /// Body class present only in light mode.
    pub const BODY_MARKER: &'static str = "light-mode";
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(FolioError::UnknownTheme(other.to_string())),
        }
    }
}

/// Origin-scoped string key-value store (`localStorage` in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

impl PreferenceStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.insert(key.to_string(), value.to_string());
    }
}

/// Read the saved theme; absent or unreadable values fall back to dark.
pub fn load_theme<P: PreferenceStore + ?Sized>(store: &P) -> Theme {
    match store.get(THEME_STORAGE_KEY) {
        None => Theme::default(),
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("[theme] {e}; using dark");
            Theme::default()
        }),
    }
}

/// Flip the theme and persist the new value.
pub fn toggle_theme<P: PreferenceStore + ?Sized>(current: Theme, store: &mut P) -> Theme {
    let next = current.toggled();
    store.set(THEME_STORAGE_KEY, next.as_str());
    log::info!("[theme] {} -> {}", current, next);
    next
}
