//! # portfolio
//!
//! Leptos + WASM personal portfolio page. Everything runs in the browser:
//! a filterable project gallery with a details modal, a contact form with
//! draft autosave and validation, theme and navigation toggles, and a scroll
//! progress indicator.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Root component, context providers, WASM entry point |
//! | [`pages`] | The single home page |
//! | [`components`] | Header, gallery, dialog, contact form, scroll chrome |
//! | [`state`] | Pure state models: gallery filtering, form validation, theme, scroll |
//! | [`util`] | Browser adapters: storage port, theme class, scrolling, alerts |
//! | [`consts`] | Storage keys, thresholds, user-facing messages |
//! | [`error`] | Crate error type |

pub mod app;
pub mod components;
pub mod consts;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::error_1(&format!("logger init failed: {e}").into());
    }
    log::info!("portfolio starting");
    leptos::mount::mount_to_body(app::App);
}
