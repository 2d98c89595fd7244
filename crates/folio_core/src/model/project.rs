//! Project record model.
//!
//! # Responsibility
//! - Define the canonical portfolio entry and its JSON wire shape.
//! - Provide the built-in fallback record used when loading fails.
//!
//! # Invariants
//! - Every field has a default, so partial records deserialize.
//! - A JSON `null` decodes the same as a missing field.
//! - Empty optional strings are treated the same as absent ones.

use serde::{Deserialize, Deserializer, Serialize};

/// One portfolio entry with display metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    /// Identifier used for card markup; uniqueness is not enforced.
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    /// Display order is relevance order; duplicates are kept.
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    /// Optional image URL; absent renders the icon placeholder.
    pub image: Option<String>,
    #[serde(alias = "demoUrl")]
    pub demo_url: Option<String>,
    #[serde(alias = "githubUrl")]
    pub github_url: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub featured: bool,
    /// ISO date string, only parsed for display.
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    /// Free-form filter key.
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
}

impl Project {
    /// Creates a record with identity, title and category set.
    ///
    /// Remaining fields start empty; callers fill them as needed.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    /// Placeholder record substituted when the data source cannot be read.
    pub fn fallback() -> Self {
        Self {
            id: "projet-demo".to_string(),
            title: "Projet de démonstration".to_string(),
            description: "Un projet exemple pour démontrer le portfolio.".to_string(),
            technologies: vec![
                "HTML".to_string(),
                "CSS".to_string(),
                "JavaScript".to_string(),
            ],
            image: None,
            demo_url: Some("#".to_string()),
            github_url: Some("#".to_string()),
            featured: true,
            date: "2024-01-01".to_string(),
            category: "Frontend".to_string(),
        }
    }

    /// Image URL when present and non-empty.
    pub fn image_url(&self) -> Option<&str> {
        non_empty(self.image.as_deref())
    }

    /// Demo URL when present and non-empty.
    pub fn demo_link(&self) -> Option<&str> {
        non_empty(self.demo_url.as_deref())
    }

    /// Repository URL when present and non-empty.
    pub fn repository_link(&self) -> Option<&str> {
        non_empty(self.github_url.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level shape of the projects data document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub projects: Vec<Project>,
}
