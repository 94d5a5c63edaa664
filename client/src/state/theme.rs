//! Light/dark theme preference.
//!
//! The stored form is the lowercase name under the `theme` storage key.
//! Anything else found there means `Light`.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

pub const STORAGE_KEY: &str = "theme";

/// Key/value persistence for user preferences.
///
/// The browser build backs this with `localStorage`; tests use an in-memory
/// map. Writes are best-effort.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a stored preference; missing or unknown values fall back to `Light`.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Read the preference from `store`.
    #[must_use]
    pub fn load(store: &impl PreferenceStore) -> Self {
        Self::from_stored(store.load(STORAGE_KEY).as_deref())
    }

    /// Write this preference to `store`.
    pub fn persist(self, store: &impl PreferenceStore) {
        store.save(STORAGE_KEY, self.as_str());
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Accessible label for the toggle button, naming the theme it switches to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }
}
