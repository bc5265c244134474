//! Reading-progress bar and back-to-top button driven by window scroll.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::browser;

#[component]
pub fn ScrollChrome() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let handle = window_event_listener(leptos::ev::scroll, move |_| {
        let metrics = browser::scroll_metrics();
        ui.update(|u| u.scroll = metrics);
    });
    on_cleanup(move || handle.remove());

    let visible = move || ui.with(|u| u.scroll.back_to_top_visible());
    let progress = move || ui.with(|u| u.scroll.progress_percent());

    view! {
        <progress id="scrollProgress" class="scroll-progress" max="100" prop:value=progress></progress>
        <button
            id="backToTop"
            class="btn back-to-top"
            title="Back to top"
            style:display=move || if visible() { "inline-block" } else { "none" }
            on:click=move |_| browser::scroll_to_top()
        >
            "↑"
        </button>
    }
}
