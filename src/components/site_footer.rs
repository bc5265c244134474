//! Footer with the copyright year.

use leptos::prelude::*;

use crate::util::browser;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let year = browser::current_year().map(|y| y.to_string()).unwrap_or_default();

    view! {
        <footer class="site-footer">
            "© " <span id="year">{year}</span> " Portfolio"
        </footer>
    }
}
