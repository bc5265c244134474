//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::pages::home::HomePage;
use crate::state::contact::ContactForm;
use crate::state::gallery::GalleryFilter;
use crate::state::projects::Catalog;
use crate::state::ui::UiState;
use crate::util::dark_mode;
use crate::util::persistence::BrowserStorage;

/// Root application component.
///
/// Restores persisted theme and contact draft, applies the theme before the
/// first render, and provides all shared state contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::restore(&BrowserStorage));
    dark_mode::apply(ui.get_untracked().theme);

    let catalog = StoredValue::new(Catalog::seeded());
    let filter = RwSignal::new(GalleryFilter::default());
    let contact = RwSignal::new(ContactForm::restore(&BrowserStorage));

    provide_context(ui);
    provide_context(catalog);
    provide_context(filter);
    provide_context(contact);

    view! {
        <Title text="Portfolio"/>
        <HomePage/>
    }
}
