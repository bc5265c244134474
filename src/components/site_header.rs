//! Top bar with navigation, theme toggle, print and "hire me" actions.

use leptos::prelude::*;

use crate::consts::{CONTACT_EMAIL, CONTACT_SECTION_ID};
use crate::state::ui::UiState;
use crate::util::persistence::BrowserStorage;
use crate::util::{browser, dark_mode};

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;

/// Message shown by the "Hire me" button.
pub fn hire_me_message() -> String {
    format!("Thanks! Please use the contact form or email {CONTACT_EMAIL}.")
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_menu = move |_| {
        ui.update(|u| {
            u.toggle_nav();
        });
    };

    let on_theme = move |_| {
        if let Some(theme) = ui.try_update(|u| u.toggle_theme(&BrowserStorage)) {
            dark_mode::apply(theme);
        }
    };

    let on_hire = move |_| {
        browser::alert(&hire_me_message());
        browser::scroll_into_view(CONTACT_SECTION_ID);
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="#top">"Portfolio"</a>
            <button
                id="menuToggle"
                class="btn site-header__menu"
                aria-controls="navLinks"
                aria-expanded=move || ui.with(|u| u.nav_open).to_string()
                on:click=on_menu
            >
                "☰"
            </button>
            <nav id="navLinks" class="site-header__nav" class:show=move || ui.with(|u| u.nav_open)>
                <a href="#about">"About"</a>
                <a href="#projects">"Projects"</a>
                <a href="#contact">"Contact"</a>
            </nav>
            <span class="site-header__spacer"></span>
            <button
                id="themeToggle"
                class="btn site-header__theme"
                title="Toggle dark mode"
                aria-pressed=move || ui.with(|u| u.theme.is_dark()).to_string()
                on:click=on_theme
            >
                {move || if ui.with(|u| u.theme.is_dark()) { "☀" } else { "☾" }}
            </button>
            <button id="printBtn" class="btn site-header__print" on:click=move |_| browser::print()>
                "Print"
            </button>
            <button id="hireMeBtn" class="btn btn--primary site-header__hire" on:click=on_hire>
                "Hire me"
            </button>
        </header>
    }
}
