//! Page-level widget wiring.
//!
//! # Responsibility
//! - Sequence load, render, readiness and event wiring for one page.
//! - Translate DOM events into catalog queries and re-renders.
//!
//! # Invariants
//! - Filter and search wiring only run after the catalog load settles.
//! - One controller owns one catalog; there is no shared global instance.

pub mod filter_bar;
mod portfolio;
pub mod ready;
pub mod search_box;

pub use filter_bar::{build_category_filters, filter_categories, select_category};
pub use portfolio::Portfolio;
pub use ready::ReadySignal;
pub use search_box::{render_search_results, search_is_wired};
