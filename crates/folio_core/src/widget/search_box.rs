//! Search box behavior.
//!
//! Every input event re-runs the search and re-renders the full-list
//! container; there is no debouncing.

use crate::catalog::Catalog;
use crate::dom::Dom;
use crate::render::cards::render_cards;

/// Returns whether the search input exists, i.e. whether a listener can be
/// attached to it.
pub fn search_is_wired<D: Dom>(dom: &D, input_id: &str) -> bool {
    dom.has_element(input_id)
}

/// Input handler: replaces `results_id` with cards matching `query`.
///
/// Returns `false` when the results container is absent.
pub fn render_search_results<D: Dom>(
    catalog: &Catalog,
    dom: &mut D,
    results_id: &str,
    query: &str,
) -> bool {
    render_cards(dom, results_id, catalog.search(query))
}
