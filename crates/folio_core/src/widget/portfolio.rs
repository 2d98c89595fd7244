//! Page controller owning one catalog and one DOM handle.

use crate::catalog::{Catalog, LoadOutcome, ProjectSource};
use crate::config::PortfolioConfig;
use crate::dom::Dom;
use crate::model::project::Project;
use crate::widget::filter_bar::{build_category_filters, select_category};
use crate::widget::ready::ReadySignal;
use crate::widget::search_box::{render_search_results, search_is_wired};
use log::{debug, info};

/// Widget controller for one page.
///
/// # Lifecycle
/// 1. `new` binds configuration and DOM; the catalog starts empty.
/// 2. `load` fetches once, renders, settles the ready signal, then builds
///    the filter bar and wires search.
/// 3. Event entry points (`select_category`, `on_search_input`) serve DOM
///    bindings for the rest of the page lifetime.
#[derive(Debug)]
pub struct Portfolio<D: Dom> {
    config: PortfolioConfig,
    catalog: Catalog,
    dom: D,
    ready: ReadySignal,
    outcome: Option<LoadOutcome>,
    filters_built: bool,
    search_wired: bool,
}

impl<D: Dom> Portfolio<D> {
    pub fn new(config: PortfolioConfig, dom: D) -> Self {
        Self {
            config,
            catalog: Catalog::new(),
            dom,
            ready: ReadySignal::new(),
            outcome: None,
            filters_built: false,
            search_wired: false,
        }
    }

    /// Creates a controller and runs [`Portfolio::load`] on it.
    pub async fn start<S>(config: PortfolioConfig, dom: D, source: &S) -> Self
    where
        S: ProjectSource,
    {
        let mut portfolio = Self::new(config, dom);
        portfolio.load(source).await;
        portfolio
    }

    /// Loads the catalog and brings the page to its ready state.
    ///
    /// Only the first call fetches; later calls return the first outcome.
    pub async fn load<S>(&mut self, source: &S) -> LoadOutcome
    where
        S: ProjectSource,
    {
        if let Some(outcome) = self.outcome {
            debug!("event=portfolio_load module=widget status=skipped reason=already_loaded");
            return outcome;
        }

        let outcome = self.catalog.load(source).await;
        self.outcome = Some(outcome);

        self.render_featured();
        if self.config.render_all_on_start {
            self.render_all();
        }

        self.ready.settle(&self.catalog);

        self.filters_built = build_category_filters(
            &self.catalog,
            &mut self.dom,
            &self.config.filters_id,
            &self.config.all_label,
        );
        self.search_wired = search_is_wired(&self.dom, &self.config.search_id);

        info!(
            "event=portfolio_ready module=widget status=ok projects={} filters={} search={}",
            self.catalog.len(),
            self.filters_built,
            self.search_wired
        );
        outcome
    }

    /// Runs `callback` once the catalog load has settled.
    pub fn on_ready(&mut self, callback: impl FnOnce(&Catalog) + 'static) {
        self.ready.subscribe(&self.catalog, callback);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.is_settled()
    }

    /// Outcome of the settled load, `None` before it.
    pub fn load_outcome(&self) -> Option<LoadOutcome> {
        self.outcome
    }

    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn dom(&self) -> &D {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut D {
        &mut self.dom
    }

    /// Whether filter buttons were rendered (container present).
    pub fn filters_built(&self) -> bool {
        self.filters_built
    }

    /// Whether the search input was found and should receive a listener.
    pub fn search_wired(&self) -> bool {
        self.search_wired
    }

    /// Renders featured cards into the configured container.
    pub fn render_featured(&mut self) -> bool {
        self.catalog
            .render_featured(&mut self.dom, &self.config.featured_id)
    }

    /// Renders every card into the configured full-list container.
    pub fn render_all(&mut self) -> bool {
        self.catalog.render_all(&mut self.dom, &self.config.all_id)
    }

    /// Filter-button click handler; `button` is the clicked element.
    pub fn select_category(&mut self, category: &str, button: &D::Element) {
        select_category(&mut self.dom, category, button);
    }

    /// Search input handler.
    ///
    /// Ignored until search has been wired after the load.
    pub fn on_search_input(&mut self, query: &str) -> bool {
        if !self.search_wired {
            return false;
        }
        render_search_results(&self.catalog, &mut self.dom, &self.config.all_id, query)
    }

    /// Appends a record and re-renders the lists it belongs to.
    pub fn add_project(&mut self, project: Project) {
        let featured = project.featured;
        self.catalog.add_project(project);
        self.render_all();
        if featured {
            self.render_featured();
        }
    }
}
