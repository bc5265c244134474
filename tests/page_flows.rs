//! End-to-end flows over the public state API, as the page drives them.

use portfolio::consts::{DRAFT_STORAGE_KEY, THEME_STORAGE_KEY};
use portfolio::state::contact::{ContactForm, Field, SubmitOutcome};
use portfolio::state::gallery::{GalleryFilter, gallery_cards, project_detail};
use portfolio::state::projects::Catalog;
use portfolio::state::ui::UiState;
use portfolio::util::persistence::{KeyValueStore, MemoryStore};

#[test]
fn draft_survives_reload_until_submitted() {
    let store = MemoryStore::new();

    let mut form = ContactForm::restore(&store);
    form.edit(&store, Field::Name, "Alex".to_owned());
    form.edit(&store, Field::Message, "short".to_owned());
    assert_eq!(form.submit(&store), SubmitOutcome::Rejected);

    // Reload: the rejected draft is still there.
    let mut form = ContactForm::restore(&store);
    assert_eq!(form.draft.name, "Alex");
    assert_eq!(form.char_count(), "(5/500)");

    form.edit(&store, Field::Email, "a@b.com".to_owned());
    form.edit(&store, Field::Dob, "2000-01-01".to_owned());
    form.edit(&store, Field::Message, "This is a long enough message.".to_owned());
    assert_eq!(form.submit(&store), SubmitOutcome::Sent);
    assert_eq!(store.get(DRAFT_STORAGE_KEY), None);

    let form = ContactForm::restore(&store);
    assert_eq!(form.draft.name, "");
    assert_eq!(form.char_count(), "(0/500)");
}

#[test]
fn theme_choice_survives_reload() {
    let store = MemoryStore::new();
    let mut ui = UiState::restore(&store);
    ui.toggle_theme(&store);
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("dark"));
    assert!(UiState::restore(&store).theme.is_dark());
}

#[test]
fn typing_narrows_then_widens_gallery() {
    let catalog = Catalog::seeded();
    let mut filter = GalleryFilter::default();
    let mut counts = Vec::new();
    for q in ["s", "sq", "sql", "sqlx", "sq", "s", ""] {
        filter.query = q.to_owned();
        counts.push(gallery_cards(&catalog, &filter).len());
    }
    assert_eq!(counts, vec![3, 2, 2, 0, 2, 3, 3]);
}

#[test]
fn every_visible_card_opens_its_own_details() {
    let catalog = Catalog::seeded();
    let mut filter = GalleryFilter::default();
    filter.set_sort("name-desc");
    for card in gallery_cards(&catalog, &filter) {
        let detail = project_detail(&catalog, &card.name).unwrap();
        assert_eq!(detail.title, card.name);
        assert_eq!(detail.image, card.image);
    }
}
