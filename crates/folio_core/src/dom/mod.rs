//! DOM contract consumed by rendering and widget code.
//!
//! # Responsibility
//! - Describe the handful of DOM operations the widget needs.
//! - Keep core code independent from any concrete browser binding.
//!
//! # Invariants
//! - Every operation on a missing element is a silent no-op.
//! - Card visibility is driven only by markup already in the DOM.

mod document;

pub use document::{ButtonRef, Document, FilterButtonNode, RenderedCard};

/// Class carried by every rendered project card.
pub const CARD_CLASS: &str = "project-card";
/// Class carried by every category filter button.
pub const FILTER_BUTTON_CLASS: &str = "filter-btn";
/// Class marking the currently selected filter button.
pub const ACTIVE_CLASS: &str = "active";
/// Attribute holding the category on cards and filter buttons.
pub const CATEGORY_ATTR: &str = "data-category";

/// Minimal DOM surface used by the widget.
pub trait Dom {
    /// Element handle passed back by event bindings (e.g. a clicked button).
    type Element;

    /// Returns whether an element with `id` exists.
    fn has_element(&self, id: &str) -> bool;

    /// Replaces the inner markup of element `id`.
    ///
    /// Returns `false` when the element does not exist.
    fn set_inner_html(&mut self, id: &str, html: &str) -> bool;

    /// Shows or hides every rendered card in document order.
    ///
    /// `is_visible` receives the card's category attribute, or `None` when
    /// the card carries none.
    fn apply_card_visibility(&mut self, is_visible: &mut dyn FnMut(Option<&str>) -> bool);

    /// Marks `button` as the sole active button among its siblings.
    fn activate_filter_button(&mut self, button: &Self::Element);
}
