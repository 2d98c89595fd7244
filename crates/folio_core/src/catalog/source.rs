//! Project data sources.
//!
//! # Responsibility
//! - Abstract the single asynchronous fetch of the projects document.
//! - Classify fetch failures for logging.
//!
//! # Invariants
//! - A source returns the raw body; decoding happens in [`parse_document`].

use crate::model::project::{Project, ProjectDocument};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Result type for data source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Failure kinds for loading the projects document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// Resource could not be reached at all.
    Unreachable {
        location: String,
        message: String,
    },
    /// Resource answered with a non-success status.
    Status { location: String, status: u16 },
    /// Body is not a valid projects document.
    Malformed(String),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unreachable { location, message } => {
                write!(f, "project source `{location}` unreachable: {message}")
            }
            Self::Status { location, status } => {
                write!(f, "project source `{location}` answered status {status}")
            }
            Self::Malformed(message) => write!(f, "malformed projects document: {message}"),
        }
    }
}

impl Error for SourceError {}

impl From<serde_json::Error> for SourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value.to_string())
    }
}

/// Asynchronous provider of the projects document body.
///
/// Implementations are expected to run on a single-threaded event loop, so
/// the returned future is not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait ProjectSource {
    /// Human-readable location used in diagnostics.
    fn location(&self) -> &str;

    /// Fetches the raw document body.
    async fn fetch(&self) -> SourceResult<String>;
}

/// Decodes a projects document body into records, keeping source order.
///
/// # Errors
/// - Returns `SourceError::Malformed` for invalid JSON, a missing `projects`
///   field, or fields of the wrong JSON type.
pub fn parse_document(body: &str) -> SourceResult<Vec<Project>> {
    let document: ProjectDocument = serde_json::from_str(body)?;
    Ok(document.projects)
}

/// File-backed source for native tools and tests.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    location: String,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let location = path.display().to_string();
        Self { path, location }
    }
}

impl ProjectSource for FileSource {
    fn location(&self) -> &str {
        &self.location
    }

    async fn fetch(&self) -> SourceResult<String> {
        std::fs::read_to_string(&self.path).map_err(|err| SourceError::Unreachable {
            location: self.location.clone(),
            message: err.to_string(),
        })
    }
}
