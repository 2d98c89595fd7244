//! Portfolio domain model.
//!
//! # Responsibility
//! - Define the project record rendered by every widget view.
//! - Keep the wire shape tolerant: missing fields default instead of failing.
//!
//! # Invariants
//! - Records are never validated on load; display code handles empty fields.
//! - Record order is meaningful and preserved by every consumer.

pub mod project;
