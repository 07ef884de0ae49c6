use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::RemoteRepoSummary;

/// A repository entry as the persistence backend stores it. Field names on
/// the wire are camelCase; the id is always a string, even though GitHub
/// assigns numeric ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedEntry {
    pub id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "stargazersCount")]
    pub stargazers_count: u32,
    pub language: Option<String>,
    pub url: String,
}

impl SavedEntry {
    /// The one mapping between the search-side and persistence-side shapes.
    /// Coerces the numeric id to a string; every other field carries through
    /// verbatim.
    pub fn from_summary(summary: &RemoteRepoSummary) -> Self {
        SavedEntry {
            id: summary.id.to_string(),
            full_name: summary.full_name.clone(),
            created_at: summary.created_at,
            stargazers_count: summary.stargazers_count,
            language: summary.language.clone(),
            url: summary.url.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SavedReposResponse {
    pub repos: Vec<SavedEntry>,
}
