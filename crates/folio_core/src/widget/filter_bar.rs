//! Category filter bar.
//!
//! # Responsibility
//! - Derive the filter list from catalog categories.
//! - Render one button per filter and apply a clicked filter.
//!
//! # Invariants
//! - The synthetic "all" filter is always first and starts active.
//! - Remaining filters follow first-occurrence order in the catalog.
//! - Exactly one button is active after a click.

use crate::catalog::Catalog;
use crate::dom::Dom;
use crate::render::cards::{filter_by_category, ALL_CATEGORIES};
use crate::render::escape::escape_html;

/// Filter values in display order: `"all"` then distinct categories.
pub fn filter_categories(catalog: &Catalog) -> Vec<&str> {
    let mut categories = vec![ALL_CATEGORIES];
    categories.extend(
        catalog
            .categories()
            .into_iter()
            .filter(|category| *category != ALL_CATEGORIES),
    );
    categories
}

/// Renders filter buttons into `container_id`.
///
/// Returns `false` when the container is absent.
pub fn build_category_filters<D: Dom>(
    catalog: &Catalog,
    dom: &mut D,
    container_id: &str,
    all_label: &str,
) -> bool {
    if !dom.has_element(container_id) {
        return false;
    }
    let html = filter_categories(catalog)
        .into_iter()
        .map(|category| filter_button(category, all_label))
        .collect::<String>();
    dom.set_inner_html(container_id, &html)
}

fn filter_button(category: &str, all_label: &str) -> String {
    let is_all = category == ALL_CATEGORIES;
    let class = if is_all { "filter-btn active" } else { "filter-btn" };
    let label = if is_all { all_label } else { category };
    format!(
        r#"<button class="{class}" data-category="{}">{}</button>"#,
        escape_html(category),
        escape_html(label)
    )
}

/// Click handler: filters cards by `category` and activates `button`.
pub fn select_category<D: Dom>(dom: &mut D, category: &str, button: &D::Element) {
    filter_by_category(dom, category);
    dom.activate_filter_button(button);
}
