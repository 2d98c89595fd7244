//! Project card markup.
//!
//! # Responsibility
//! - Build one HTML fragment per project record.
//! - Write card lists into DOM containers.
//! - Show or hide rendered cards by category.
//!
//! # Invariants
//! - Field content is always escaped; it never becomes live markup.
//! - Link blocks appear only for present, non-empty URLs.
//! - Filtering never adds or removes cards, it only toggles visibility.

use crate::dom::Dom;
use crate::model::project::Project;
use crate::render::date::format_date;
use crate::render::escape::escape_html;

/// Sentinel category that shows every card.
pub const ALL_CATEGORIES: &str = "all";

const IMAGE_PLACEHOLDER: &str = r#"<div class="project-image"><i class="fas fa-code"></i></div>"#;

/// Builds the card fragment for one record.
pub fn build_card(project: &Project) -> String {
    let title = escape_html(&project.title);

    let image_html = match project.image_url() {
        Some(src) => format!(
            r#"<img src="{}" alt="{title}" style="width: 100%; height: 200px; object-fit: cover; border-radius: 8px;">"#,
            escape_html(src)
        ),
        None => IMAGE_PLACEHOLDER.to_string(),
    };

    let date_html = format_date(&project.date)
        .map(|date| format!(r#"<p class="project-date">{date}</p>"#))
        .unwrap_or_default();

    let tech_html = project
        .technologies
        .iter()
        .map(|tech| format!(r#"<span class="tech-tag">{}</span>"#, escape_html(tech)))
        .collect::<String>();

    let demo_link = project
        .demo_link()
        .map(|url| {
            format!(
                r#"<a href="{}" target="_blank" class="project-link"><i class="fas fa-external-link-alt"></i> Démo</a>"#,
                escape_html(url)
            )
        })
        .unwrap_or_default();

    let github_link = project
        .repository_link()
        .map(|url| {
            format!(
                r#"<a href="{}" target="_blank" class="project-link"><i class="fab fa-github"></i> Code</a>"#,
                escape_html(url)
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            r#"<div class="project-card" data-category="{category}" data-id="{id}">"#,
            "{image}",
            r#"<h3 class="project-title">{title}</h3>"#,
            r#"<p class="project-description">{description}</p>"#,
            "{date}",
            r#"<div class="project-tech">{tech}</div>"#,
            r#"<div class="project-links">{demo}{github}</div>"#,
            "</div>"
        ),
        category = escape_html(&project.category),
        id = escape_html(&project.id),
        image = image_html,
        title = title,
        description = escape_html(&project.description),
        date = date_html,
        tech = tech_html,
        demo = demo_link,
        github = github_link,
    )
}

/// Replaces `target_id` with cards for `projects`, in iteration order.
///
/// Returns `false` without building anything when the target is absent.
pub fn render_cards<'a, D, I>(dom: &mut D, target_id: &str, projects: I) -> bool
where
    D: Dom,
    I: IntoIterator<Item = &'a Project>,
{
    if !dom.has_element(target_id) {
        return false;
    }
    let html = projects.into_iter().map(build_card).collect::<String>();
    dom.set_inner_html(target_id, &html)
}

/// Shows cards whose category equals `category` and hides the rest.
///
/// [`ALL_CATEGORIES`] shows every card. Matching is exact and
/// case-sensitive; cards without a category attribute only show for
/// [`ALL_CATEGORIES`].
pub fn filter_by_category<D: Dom>(dom: &mut D, category: &str) {
    let show_all = category == ALL_CATEGORIES;
    dom.apply_card_visibility(&mut |card_category: Option<&str>| {
        show_all || card_category == Some(category)
    });
}
