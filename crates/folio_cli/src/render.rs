//! Command execution: config, logging, load, render, print.

use crate::Cli;
use folio_core::{
    default_log_level, init_logging, Document, FileSource, Portfolio, PortfolioConfig,
    ALL_CATEGORIES,
};
use futures::executor::block_on;
use log::info;

/// Runs the widget once and returns the serialized document.
///
/// A missing or malformed projects file is not an error: the widget renders
/// its fallback record, as it would in the browser.
pub fn run(cli: &Cli) -> Result<String, String> {
    let config = match &cli.config {
        Some(path) => PortfolioConfig::from_path(path).map_err(|err| err.to_string())?,
        None => PortfolioConfig::default(),
    };

    if let Some(dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let dir = dir
            .to_str()
            .ok_or_else(|| format!("log dir `{}` is not valid UTF-8", dir.display()))?;
        init_logging(level, dir)?;
    }

    let data_path = cli
        .data
        .clone()
        .unwrap_or_else(|| config.data_url.clone().into());
    let source = FileSource::new(&data_path);
    let dom = page_document(&config);
    let mut portfolio = block_on(Portfolio::start(config, dom, &source));

    if let Some(query) = &cli.search {
        portfolio.on_search_input(query);
    }

    if let Some(category) = &cli.category {
        let filters_id = portfolio.config().filters_id.clone();
        match portfolio.dom().find_filter_button(&filters_id, category) {
            Some(button) => portfolio.select_category(category, &button),
            None => folio_core::filter_by_category(portfolio.dom_mut(), category),
        }
    }

    info!(
        "event=cli_render module=cli status=ok projects={} search={} category={}",
        portfolio.catalog().len(),
        cli.search.is_some(),
        cli.category.as_deref().unwrap_or(ALL_CATEGORIES)
    );
    Ok(portfolio.dom().to_html())
}

fn page_document(config: &PortfolioConfig) -> Document {
    Document::new()
        .with_container(&config.featured_id)
        .with_container(&config.filters_id)
        .with_input(&config.search_id)
        .with_container(&config.all_id)
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::Cli;
    use std::path::PathBuf;

    fn cli(data: PathBuf) -> Cli {
        Cli {
            data: Some(data),
            config: None,
            search: None,
            category: None,
            log_level: None,
            log_dir: None,
        }
    }

    fn write_projects(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("projects.json");
        std::fs::write(
            &path,
            r#"{"projects":[
                {"id":"a","title":"Foo","category":"Frontend","featured":true},
                {"id":"b","title":"Bar","category":"Backend"}
            ]}"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn renders_every_container() {
        let dir = tempfile::tempdir().unwrap();
        let html = run(&cli(write_projects(&dir))).unwrap();

        assert!(html.contains(r#"<div id="featured-projects">"#));
        assert!(html.contains(r#"<div id="all-projects">"#));
        assert!(html.contains(r#"<button class="filter-btn active" data-category="all">Tous</button>"#));
        assert_eq!(html.matches(r#"data-id="a""#).count(), 2);
        assert_eq!(html.matches(r#"data-id="b""#).count(), 1);
    }

    #[test]
    fn category_hides_other_cards() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = cli(write_projects(&dir));
        args.category = Some("Backend".to_string());
        let html = run(&args).unwrap();

        assert!(html.contains(
            r#"<div class="project-card" style="display: none;" data-category="Frontend""#
        ));
        assert!(html.contains(r#"<div class="project-card" data-category="Backend""#));
        assert!(html.contains(r#"<button class="filter-btn active" data-category="Backend">"#));
    }

    #[test]
    fn search_narrows_full_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = cli(write_projects(&dir));
        args.search = Some("bar".to_string());
        let html = run(&args).unwrap();

        let all = html.split(r#"<div id="all-projects">"#).nth(1).unwrap();
        assert!(all.contains(r#"data-id="b""#));
        assert!(!all.contains(r#"data-id="a""#));
    }

    #[test]
    fn missing_data_renders_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let html = run(&cli(dir.path().join("absent.json"))).unwrap();
        assert!(html.contains(r#"data-id="projet-demo""#));
    }

    #[test]
    fn invalid_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.json");
        std::fs::write(&config, r#"{"unknown": true}"#).unwrap();
        let mut args = cli(write_projects(&dir));
        args.config = Some(config);

        let err = run(&args).unwrap_err();
        assert!(err.contains("invalid widget config"));
    }
}
