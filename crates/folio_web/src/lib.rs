//! Browser binding for the portfolio widget.
//!
//! # Responsibility
//! - Implement the core DOM contract over `web_sys`.
//! - Fetch the projects document with the browser `fetch` API.
//! - Export a small JavaScript-facing API and attach event listeners.
//!
//! # Invariants
//! - Exported functions never panic on bad input; failures become `JsValue`
//!   errors or empty strings.
//! - The controller is shared through `Rc<RefCell<_>>` and never borrowed
//!   across an await point.

pub mod api;
pub mod console;
pub mod fetch;
pub mod web_dom;

pub use api::{start_portfolio, PortfolioHandle};
pub use fetch::FetchSource;
pub use web_dom::WebDom;
