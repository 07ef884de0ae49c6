use std::time::Duration;

use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::config::DEFAULT_SEARCH_URL;
use crate::error::{RepoShelfError, Result};
use crate::types::{RemoteRepoSummary, SearchResponse};

const USER_AGENT: &str = "repo-shelf/0.1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the GitHub repository search endpoint.
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_SEARCH_URL)
    }

    /// Build a client against a non-default API base, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(SearchClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Search repositories matching `term`. The term is query-encoded by the
    /// URL builder; callers pass it raw.
    pub async fn search_repositories(&self, term: &str) -> Result<Vec<RemoteRepoSummary>> {
        let mut url = Url::parse(&self.base_url)?;
        // Append rather than set, so a base URL carrying a path prefix
        // keeps it.
        url.path_segments_mut()
            .map_err(|_| {
                RepoShelfError::Api(format!(
                    "search base URL cannot carry paths: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(["search", "repositories"]);
        url.query_pairs_mut().append_pair("q", term);

        debug!(%url, "searching repositories");

        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RepoShelfError::Api(format!(
                "search request failed with status {}: {}",
                status, error_text
            )));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.items)
    }
}
