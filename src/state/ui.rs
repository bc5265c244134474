//! Page chrome state: theme, mobile navigation, and scroll position.
//!
//! DESIGN
//! ======
//! Kept apart from gallery and contact state so header and scroll controls
//! re-render without touching the project list or the form.

use super::scroll::ScrollMetrics;
use super::theme::Theme;
use crate::util::persistence::KeyValueStore;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiState {
    pub theme: Theme,
    pub nav_open: bool,
    pub scroll: ScrollMetrics,
}

impl UiState {
    /// Initial chrome state with the persisted theme applied.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        Self { theme: Theme::restore(store), ..Self::default() }
    }

    /// Flip the mobile navigation panel and return the new open state.
    pub fn toggle_nav(&mut self) -> bool {
        self.nav_open = !self.nav_open;
        self.nav_open
    }

    pub fn toggle_theme(&mut self, store: &impl KeyValueStore) -> Theme {
        self.theme = self.theme.toggle(store);
        self.theme
    }
}
