//! Modal overlay with a project's screenshot, description and link.

use leptos::prelude::*;

use crate::state::gallery::ProjectDetailView;

/// Blocking project details modal. Closes on the close button, a backdrop
/// click, or Escape.
#[component]
pub fn ProjectDialog(detail: ProjectDetailView, on_close: Callback<()>) -> impl IntoView {
    let handle = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let ProjectDetailView { title, image, image_alt, body, link } = detail;

    view! {
        <div class="project-dialog__backdrop" on:click=move |_| on_close.run(())>
            <div
                id="projectDialog"
                class="project-dialog"
                role="dialog"
                aria-modal="true"
                aria-labelledby="dlgTitle"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="project-dialog__header">
                    <h2 id="dlgTitle">{title}</h2>
                    <button class="project-dialog__close" title="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>
                <img id="dlgImg" class="project-dialog__image" src=image alt=image_alt/>
                <p id="dlgBody" class="project-dialog__body">{body}</p>
                <a id="dlgLink" class="btn btn--primary" href=link target="_blank" rel="noopener">
                    "Open project"
                </a>
            </div>
        </div>
    }
}
