//! Projects section: search box, technology and sort selects, card grid, and
//! the details modal.
//!
//! DESIGN
//! ======
//! The grid is a derived view over the `GalleryFilter` signal and the static
//! catalog. Every input event replaces the filter, which re-renders the whole
//! list; there is no debouncing and no incremental patching to go stale.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::project_dialog::ProjectDialog;
use crate::state::gallery::{GalleryFilter, ProjectDetailView, SortOrder, gallery_cards, project_detail};
use crate::state::projects::Catalog;

#[component]
pub fn ProjectGallery() -> impl IntoView {
    let catalog = expect_context::<StoredValue<Catalog>>();
    let filter = expect_context::<RwSignal<GalleryFilter>>();
    let selected = RwSignal::new(None::<ProjectDetailView>);

    let technologies: Vec<String> =
        catalog.with_value(|c| c.technologies().into_iter().map(str::to_owned).collect());

    let on_open = Callback::new(move |name: String| {
        match catalog.with_value(|c| project_detail(c, &name)) {
            Some(detail) => selected.set(Some(detail)),
            None => log::warn!("no project named {name:?}"),
        }
    });
    let on_close = Callback::new(move |()| selected.set(None));

    let cards = move || filter.with(|f| catalog.with_value(|c| gallery_cards(c, f)));

    view! {
        <section id="projects" class="gallery">
            <h2>"Projects"</h2>
            <div class="gallery__controls">
                <input
                    id="search"
                    type="search"
                    placeholder="Search projects or tech"
                    aria-label="Search projects"
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                />
                <select
                    id="techFilter"
                    aria-label="Filter by technology"
                    on:input=move |ev| filter.update(|f| f.set_tech(&event_target_value(&ev)))
                >
                    <option value="">"All technologies"</option>
                    {technologies
                        .into_iter()
                        .map(|t| {
                            let label = t.clone();
                            view! { <option value=t>{label}</option> }
                        })
                        .collect_view()}
                </select>
                <select
                    id="sortBy"
                    aria-label="Sort projects"
                    on:input=move |ev| filter.update(|f| f.set_sort(&event_target_value(&ev)))
                >
                    <option value="">"Default order"</option>
                    {SortOrder::ALL
                        .iter()
                        .map(|s| view! { <option value=s.key()>{s.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <ul id="projectGrid" class="grid" aria-live="polite">
                {move || {
                    cards()
                        .into_iter()
                        .map(|card| view! { <ProjectCard card=card on_open=on_open/> })
                        .collect_view()
                }}
            </ul>
            {move || selected.get().map(|detail| view! { <ProjectDialog detail=detail on_close=on_close/> })}
        </section>
    }
}
