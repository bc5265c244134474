//! Applies the theme to the document root.
//!
//! Toggles the `dark` class on `<html>`; the stylesheet keys all dark colors
//! off that class.

use crate::state::theme::Theme;

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

const DARK_CLASS: &str = "dark";

/// Add or remove the `dark` class on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            if el.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()).is_err() {
                log::warn!("could not set {DARK_CLASS} class on document root");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}
