//! Card markup and display formatting.
//!
//! # Responsibility
//! - Turn project records into HTML card fragments.
//! - Apply category visibility over cards already in the DOM.
//! - Format record dates in the widget's fixed locale.
//!
//! # Invariants
//! - Every interpolated value is HTML-escaped.
//! - Every card carries `data-category` for filtering.

pub mod cards;
pub mod date;
pub mod escape;

pub use cards::{build_card, filter_by_category, render_cards, ALL_CATEGORIES};
pub use date::format_date;
pub use escape::escape_html;
