//! Gallery filtering, sorting, and view-model derivation.
//!
//! The gallery component keeps one [`GalleryFilter`] signal and re-derives
//! its cards through [`gallery_cards`] on every change, so the rendered list
//! is always a function of the full catalog and the current filter.

use std::cmp::Ordering;

use super::projects::{Catalog, Project};

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

/// Gallery sort order, keyed by the `sortBy` select values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    YearDesc,
    YearAsc,
    NameAsc,
    NameDesc,
}

impl SortOrder {
    pub const ALL: [Self; 4] = [Self::YearDesc, Self::YearAsc, Self::NameAsc, Self::NameDesc];

    /// Parse a select value. Unknown keys yield `None`, which leaves order
    /// untouched.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "year-desc" => Some(Self::YearDesc),
            "year-asc" => Some(Self::YearAsc),
            "name-asc" => Some(Self::NameAsc),
            "name-desc" => Some(Self::NameDesc),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::YearDesc => "year-desc",
            Self::YearAsc => "year-asc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::YearDesc => "Newest first",
            Self::YearAsc => "Oldest first",
            Self::NameAsc => "Name A–Z",
            Self::NameDesc => "Name Z–A",
        }
    }

    fn compare(self, a: &Project, b: &Project) -> Ordering {
        match self {
            Self::YearDesc => b.year.cmp(&a.year),
            Self::YearAsc => a.year.cmp(&b.year),
            Self::NameAsc => compare_names(&a.name, &b.name),
            Self::NameDesc => compare_names(&b.name, &a.name),
        }
    }
}

/// Case-insensitive name order; on a case-only difference lowercase sorts
/// first. Approximates browser collation for ASCII names only: accented
/// letters sort by code point, after `z`.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| b.cmp(a))
}

/// Current values of the search box, technology select and sort select.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryFilter {
    pub query: String,
    /// `None` means any technology.
    pub tech: Option<String>,
    /// `None` keeps catalog order.
    pub sort: Option<SortOrder>,
}

impl GalleryFilter {
    /// Set the technology from a select value; empty means "any".
    pub fn set_tech(&mut self, value: &str) {
        self.tech = if value.is_empty() { None } else { Some(value.to_owned()) };
    }

    pub fn set_sort(&mut self, value: &str) {
        self.sort = SortOrder::from_key(value);
    }

    fn matches(&self, project: &Project, query: &str) -> bool {
        let text_match = project.name.to_lowercase().contains(query)
            || project.tech.join(" ").to_lowercase().contains(query);
        let tech_match = self.tech.as_deref().map_or(true, |t| project.uses(t));
        text_match && tech_match
    }
}

/// Filter then stably sort the catalog.
pub fn apply_filters<'a>(catalog: &'a Catalog, filter: &GalleryFilter) -> Vec<&'a Project> {
    let query = filter.query.to_lowercase();
    let mut list: Vec<&Project> = catalog
        .projects()
        .iter()
        .filter(|p| filter.matches(p, &query))
        .collect();
    if let Some(order) = filter.sort {
        list.sort_by(|a, b| order.compare(a, b));
    }
    list
}

/// Everything a gallery card displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectCardView {
    pub name: String,
    pub year_label: String,
    pub tags: Vec<String>,
    pub image: String,
    pub image_alt: String,
}

impl From<&Project> for ProjectCardView {
    fn from(p: &Project) -> Self {
        Self {
            name: p.name.clone(),
            year_label: format!("Year: {}", p.year),
            tags: p.tech.clone(),
            image: p.image.clone(),
            image_alt: format!("{} preview", p.name),
        }
    }
}

/// Cards for the current filter, in display order.
pub fn gallery_cards(catalog: &Catalog, filter: &GalleryFilter) -> Vec<ProjectCardView> {
    apply_filters(catalog, filter).into_iter().map(ProjectCardView::from).collect()
}

/// Contents of the project details modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectDetailView {
    pub title: String,
    pub image: String,
    pub image_alt: String,
    pub body: String,
    pub link: String,
}

impl From<&Project> for ProjectDetailView {
    fn from(p: &Project) -> Self {
        Self {
            title: p.name.clone(),
            image: p.image.clone(),
            image_alt: format!("{} screenshot", p.name),
            body: p.details.clone(),
            link: p.link.clone(),
        }
    }
}

/// Look up the project behind a card's "Details" action.
pub fn project_detail(catalog: &Catalog, name: &str) -> Option<ProjectDetailView> {
    catalog.find(name).map(ProjectDetailView::from)
}
