//! Gallery card for one project.

use leptos::prelude::*;

use crate::state::gallery::ProjectCardView;

/// A project tile with a "Details" action keyed by project name.
#[component]
pub fn ProjectCard(card: ProjectCardView, on_open: Callback<String>) -> impl IntoView {
    let ProjectCardView { name, year_label, tags, image, image_alt } = card;
    let title = name.clone();
    let key = name.clone();

    view! {
        <li class="pcard">
            <img src=image alt=image_alt/>
            <div class="body">
                <h3>{title}</h3>
                <div class="meta">{year_label}</div>
                <div class="tags">
                    {tags.into_iter().map(|t| view! { <span class="tag">{t}</span> }).collect_view()}
                </div>
                <div class="actions">
                    <button class="btn" data-open=name on:click=move |_| on_open.run(key.clone())>
                        "Details"
                    </button>
                </div>
            </div>
        </li>
    }
}
