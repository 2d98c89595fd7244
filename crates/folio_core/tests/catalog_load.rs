use folio_core::{Catalog, FileSource, LoadOutcome, Project, ProjectSource, SourceError, SourceResult};
use futures::executor::block_on;
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::{Mutex, Once};

struct CaptureLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        self.lines
            .lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static CAPTURE: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};
static INSTALL: Once = Once::new();

fn install_capture() {
    INSTALL.call_once(|| {
        log::set_logger(&CAPTURE).unwrap();
        log::set_max_level(LevelFilter::Trace);
    });
}

fn captured_for(location: &str) -> Vec<(Level, String)> {
    let needle = format!("source={location} ");
    CAPTURE
        .lines
        .lock()
        .unwrap()
        .iter()
        .filter(|(_, line)| line.contains(&needle))
        .cloned()
        .collect()
}

struct StubSource {
    location: &'static str,
    response: SourceResult<String>,
}

impl ProjectSource for StubSource {
    fn location(&self) -> &str {
        self.location
    }

    async fn fetch(&self) -> SourceResult<String> {
        self.response.clone()
    }
}

fn stub(location: &'static str, response: SourceResult<String>) -> StubSource {
    StubSource { location, response }
}

fn assert_single_fallback(catalog: &Catalog) {
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.projects()[0], Project::fallback());
}

#[test]
fn well_formed_source_loads_every_record_in_order() {
    install_capture();
    let body = serde_json::json!({
        "projects": [
            {"id": "p1", "title": "One", "category": "Web"},
            {"id": "p2", "title": "Two", "category": "CLI", "featured": true},
            {"id": "p3", "title": "Three", "category": "Web"}
        ]
    })
    .to_string();
    let mut catalog = Catalog::new();

    let outcome = block_on(catalog.load(&stub("stub://ok", Ok(body))));

    assert_eq!(outcome, LoadOutcome::Loaded(3));
    let ids = catalog
        .projects()
        .iter()
        .map(|p| p.id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["p1", "p2", "p3"]);
    let lines = captured_for("stub://ok");
    assert!(lines.iter().any(|(level, line)| *level == Level::Info
        && line.contains("status=ok")
        && line.contains("count=3")));
}

#[test]
fn load_replaces_previous_state() {
    let mut catalog = Catalog::from_projects(vec![Project::new("old", "Old", "Web")]);
    let body = r#"{"projects":[{"id":"new"}]}"#.to_string();

    block_on(catalog.load(&stub("stub://replace", Ok(body))));

    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.projects()[0].id, "new");
}

#[test]
fn unreachable_source_falls_back_and_logs_warning() {
    install_capture();
    let mut catalog = Catalog::new();
    let source = stub(
        "stub://down",
        Err(SourceError::Unreachable {
            location: "stub://down".to_string(),
            message: "connection refused".to_string(),
        }),
    );

    let outcome = block_on(catalog.load(&source));

    assert_eq!(outcome, LoadOutcome::Fallback);
    assert_single_fallback(&catalog);
    let lines = captured_for("stub://down");
    assert!(lines.iter().any(|(level, line)| *level == Level::Warn
        && line.contains("status=fallback")
        && line.contains("reason=unreachable")));
}

#[test]
fn non_success_status_falls_back() {
    install_capture();
    let mut catalog = Catalog::new();
    let source = stub(
        "stub://404",
        Err(SourceError::Status {
            location: "stub://404".to_string(),
            status: 404,
        }),
    );

    assert_eq!(block_on(catalog.load(&source)), LoadOutcome::Fallback);
    assert_single_fallback(&catalog);
    assert!(captured_for("stub://404")
        .iter()
        .any(|(_, line)| line.contains("reason=status")));
}

#[test]
fn malformed_bodies_fall_back() {
    install_capture();
    for body in [
        "not json",
        r#"{"items":[]}"#,
        r#"{"projects":{"id":"x"}}"#,
        r#"{"projects":[{"featured":"yes"}]}"#,
    ] {
        let mut catalog = Catalog::new();
        let outcome = block_on(catalog.load(&stub("stub://bad", Ok(body.to_string()))));
        assert_eq!(outcome, LoadOutcome::Fallback, "body: {body}");
        assert_single_fallback(&catalog);
    }
    let lines = captured_for("stub://bad");
    assert_eq!(lines.len(), 4);
    assert!(lines
        .iter()
        .all(|(level, line)| *level == Level::Warn && line.contains("reason=malformed")));
}

#[test]
fn partial_records_are_kept_unvalidated() {
    let body = r#"{"projects":[{"id":"bare"},{}]}"#.to_string();
    let mut catalog = Catalog::new();

    assert_eq!(
        block_on(catalog.load(&stub("stub://partial", Ok(body)))),
        LoadOutcome::Loaded(2)
    );
    assert!(catalog.projects()[0].title.is_empty());
    assert!(catalog.projects()[1].id.is_empty());
}

#[test]
fn null_fields_keep_sibling_records() {
    let body = r#"{"projects":[
        {"id":"a","title":"A","category":"Web"},
        {"id":"b","title":null,"description":null,"date":null,"category":null,"featured":null}
    ]}"#
    .to_string();
    let mut catalog = Catalog::new();

    assert_eq!(
        block_on(catalog.load(&stub("stub://nulls", Ok(body)))),
        LoadOutcome::Loaded(2)
    );
    let ids = catalog.projects().iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
    assert_eq!(ids, vec!["a", "b"]);
    let nulled = &catalog.projects()[1];
    assert!(nulled.title.is_empty());
    assert!(nulled.category.is_empty());
    assert!(!nulled.featured);
}

#[test]
fn file_source_reads_document_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("projects.json");
    std::fs::write(
        &path,
        r#"{"projects":[{"id":"disk","title":"From disk","demo_url":"https://demo"}]}"#,
    )
    .unwrap();
    let mut catalog = Catalog::new();

    let outcome = block_on(catalog.load(&FileSource::new(&path)));

    assert_eq!(outcome, LoadOutcome::Loaded(1));
    assert_eq!(catalog.projects()[0].demo_link(), Some("https://demo"));
}

#[test]
fn missing_file_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let mut catalog = Catalog::new();

    let outcome = block_on(catalog.load(&FileSource::new(dir.path().join("absent.json"))));

    assert_eq!(outcome, LoadOutcome::Fallback);
    assert_single_fallback(&catalog);
}
