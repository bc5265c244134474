//! Theme preference and its persistence.

use crate::consts::THEME_STORAGE_KEY;
use crate::util::persistence::KeyValueStore;

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Read the stored preference. Only an exact `"dark"` selects dark.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        match store.get(THEME_STORAGE_KEY).as_deref() {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Flip the theme and persist the result.
    pub fn toggle(self, store: &impl KeyValueStore) -> Self {
        let next = self.flipped();
        if let Err(e) = store.set(THEME_STORAGE_KEY, next.as_str()) {
            log::warn!("theme preference not saved: {e}");
        }
        next
    }
}
