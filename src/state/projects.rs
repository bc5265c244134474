//! Static project catalog.
//!
//! Projects are fixed at start-up. Names double as lookup keys, so the
//! catalog refuses to build when two records share a name.

use std::collections::HashSet;

use crate::error::PortfolioError;

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// One portfolio entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub year: i32,
    pub tech: Vec<String>,
    pub image: String,
    pub link: String,
    pub details: String,
}

impl Project {
    pub fn new(name: &str, year: i32, tech: &[&str], image: &str, link: &str, details: &str) -> Self {
        Self {
            name: name.to_owned(),
            year,
            tech: tech.iter().map(|t| (*t).to_owned()).collect(),
            image: image.to_owned(),
            link: link.to_owned(),
            details: details.to_owned(),
        }
    }

    /// Whether `tech` appears verbatim in this project's technology list.
    pub fn uses(&self, tech: &str) -> bool {
        self.tech.iter().any(|t| t == tech)
    }
}

/// Immutable, name-unique list of projects in display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::DuplicateProject`] naming the first repeat.
    pub fn new(projects: Vec<Project>) -> Result<Self, PortfolioError> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.name.as_str()) {
                return Err(PortfolioError::DuplicateProject(project.name.clone()));
            }
        }
        Ok(Self { projects })
    }

    /// The seeded portfolio entries.
    ///
    /// Falls back to an empty catalog (and logs) if the seed is ever edited
    /// into an invalid state.
    pub fn seeded() -> Self {
        match Self::new(seed()) {
            Ok(catalog) => catalog,
            Err(e) => {
                log::error!("project seed rejected: {e}");
                Self::default()
            }
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn find(&self, name: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.name == name)
    }

    /// Distinct technologies in first-seen order, for the filter dropdown.
    pub fn technologies(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.projects
            .iter()
            .flat_map(|p| p.tech.iter())
            .filter(|t| seen.insert(t.as_str()))
            .map(String::as_str)
            .collect()
    }
}

fn seed() -> Vec<Project> {
    vec![
        Project::new(
            "Personal Portfolio",
            2025,
            &["HTML", "CSS", "JavaScript"],
            "projects/personal-portfolio.svg",
            "#",
            "Responsive single-page site with filtering, theme toggle, and accessible components.",
        ),
        Project::new(
            "CRUD App (Java + JS)",
            2024,
            &["Java", "JavaScript", "SQL"],
            "projects/crud-app-java-js.svg",
            "#",
            "Simple CRUD app concept using Java backend and vanilla JS front-end.",
        ),
        Project::new(
            "Robotics Lab (Python)",
            2023,
            &["Python", "SQL"],
            "projects/robotics-lab-python.svg",
            "#",
            "Data processing snippets and basic robotics simulations.",
        ),
    ]
}
