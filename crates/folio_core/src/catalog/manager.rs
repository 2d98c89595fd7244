//! Catalog manager.
//!
//! # Responsibility
//! - Hold the in-memory project list (insertion order = load/append order).
//! - Replace it once from a source and render subsets into a `Dom`.
//!
//! # Invariants
//! - `load` always leaves at least one record when the source fails.
//! - Query methods take `&self` and never reorder or mutate state.

use crate::catalog::source::{parse_document, ProjectSource, SourceError};
use crate::dom::Dom;
use crate::model::project::Project;
use crate::render::cards::render_cards;
use log::{info, warn};

/// Default container id for the full project list.
pub const ALL_PROJECTS_ID: &str = "all-projects";

/// What a `load` call ended up installing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Source decoded; carries the record count.
    Loaded(usize),
    /// Source failed; the fallback record was installed.
    Fallback,
}

/// Owner of the ordered project list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog over already decoded records.
    pub fn from_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// Loads the projects document from `source`, replacing current state.
    ///
    /// Failures are logged at `warn` level and replaced by
    /// [`Project::fallback`]; they are never returned to the caller.
    pub async fn load<S>(&mut self, source: &S) -> LoadOutcome
    where
        S: ProjectSource,
    {
        let decoded = match source.fetch().await {
            Ok(body) => parse_document(&body),
            Err(err) => Err(err),
        };

        match decoded {
            Ok(projects) => {
                let count = projects.len();
                self.projects = projects;
                info!(
                    "event=catalog_load module=catalog status=ok source={} count={}",
                    source.location(),
                    count
                );
                LoadOutcome::Loaded(count)
            }
            Err(err) => {
                self.projects = vec![Project::fallback()];
                warn!(
                    "event=catalog_load module=catalog status=fallback source={} reason={} detail={}",
                    source.location(),
                    failure_kind(&err),
                    err
                );
                LoadOutcome::Fallback
            }
        }
    }

    /// All records in catalog order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Appends one record. Existing records are never updated or removed.
    pub fn add_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    /// Featured records in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Project> + '_ {
        self.projects.iter().filter(|project| project.featured)
    }

    /// Distinct category values in first-occurrence order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::<&str>::new();
        for project in &self.projects {
            let category = project.category.as_str();
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Case-insensitive substring search over title, description and
    /// technologies.
    ///
    /// The empty query matches every record.
    pub fn search(&self, query: &str) -> Vec<&Project> {
        let needle = query.to_lowercase();
        self.projects
            .iter()
            .filter(|project| matches_query(project, &needle))
            .collect()
    }

    /// Renders featured cards into `target_id`.
    ///
    /// Returns `false` without touching the DOM when the target is absent.
    pub fn render_featured<D: Dom>(&self, dom: &mut D, target_id: &str) -> bool {
        render_cards(dom, target_id, self.featured())
    }

    /// Renders every card into `target_id`.
    pub fn render_all<D: Dom>(&self, dom: &mut D, target_id: &str) -> bool {
        render_cards(dom, target_id, self.projects.iter())
    }
}

fn matches_query(project: &Project, needle: &str) -> bool {
    project.title.to_lowercase().contains(needle)
        || project.description.to_lowercase().contains(needle)
        || project
            .technologies
            .iter()
            .any(|tech| tech.to_lowercase().contains(needle))
}

fn failure_kind(err: &SourceError) -> &'static str {
    match err {
        SourceError::Unreachable { .. } => "unreachable",
        SourceError::Status { .. } => "status",
        SourceError::Malformed(_) => "malformed",
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::model::project::Project;

    fn sample() -> Catalog {
        let mut rust = Project::new("a", "Rust CLI", "Backend");
        rust.technologies = vec!["Rust".to_string(), "Clap".to_string()];
        let mut site = Project::new("b", "Portfolio site", "Frontend");
        site.description = "Static pages".to_string();
        site.featured = true;
        let mut api = Project::new("c", "API gateway", "Backend");
        api.featured = true;
        Catalog::from_projects(vec![rust, site, api])
    }

    #[test]
    fn categories_follow_first_occurrence() {
        assert_eq!(sample().categories(), vec!["Backend", "Frontend"]);
    }

    #[test]
    fn featured_preserves_order() {
        let catalog = sample();
        let ids = catalog.featured().map(|p| p.id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn search_folds_case_on_every_field() {
        let catalog = sample();
        let ids = |query: &str| {
            catalog
                .search(query)
                .into_iter()
                .map(|p| p.id.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(ids("CLAP"), vec!["a"]);
        assert_eq!(ids("static"), vec!["b"]);
        assert_eq!(ids("api"), vec!["c"]);
        assert_eq!(ids(""), vec!["a", "b", "c"]);
        assert!(ids("haskell").is_empty());
    }

    #[test]
    fn add_project_appends() {
        let mut catalog = sample();
        catalog.add_project(Project::new("d", "New", "Data"));
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.projects()[3].id, "d");
        assert_eq!(catalog.categories(), vec!["Backend", "Frontend", "Data"]);
    }
}
