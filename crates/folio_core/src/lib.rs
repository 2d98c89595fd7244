//! Core logic for the portfolio widget.
//! Everything here is DOM-binding agnostic; browser and native front ends
//! plug in through [`dom::Dom`] and [`catalog::ProjectSource`].

pub mod catalog;
pub mod config;
pub mod dom;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
pub mod model;
pub mod render;
pub mod widget;

pub use catalog::{
    parse_document, Catalog, FileSource, LoadOutcome, ProjectSource, SourceError, SourceResult,
};
pub use config::{ConfigError, PortfolioConfig};
pub use dom::{ButtonRef, Document, Dom};
#[cfg(not(target_arch = "wasm32"))]
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectDocument};
pub use render::{build_card, filter_by_category, format_date, ALL_CATEGORIES};
pub use widget::{Portfolio, ReadySignal};
