//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page sections and wire DOM events to the state models,
//! reading and writing shared state through Leptos context providers.

pub mod contact_form;
pub mod project_card;
pub mod project_dialog;
pub mod project_gallery;
pub mod scroll_chrome;
pub mod site_footer;
pub mod site_header;
