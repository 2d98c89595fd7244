//! Catalog ownership, loading and queries.
//!
//! # Responsibility
//! - Own the ordered project list for the lifetime of a page.
//! - Load it once from a `ProjectSource`, falling back on failure.
//! - Answer featured, category and substring queries without mutation.
//!
//! # Invariants
//! - Load never surfaces an error; failure is logged and replaced by the
//!   fallback record.
//! - Insertion order is preserved by every query.

mod manager;
pub mod source;

pub use manager::{Catalog, LoadOutcome, ALL_PROJECTS_ID};
pub use source::{parse_document, FileSource, ProjectSource, SourceError, SourceResult};
