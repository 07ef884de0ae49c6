use chrono::{DateTime, Utc};
use serde::Deserialize;

// GitHub search API response structures
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteRepoSummary {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub stargazers_count: u32,
    pub language: Option<String>,
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<RemoteRepoSummary>,
}
