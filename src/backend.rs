use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{RepoShelfError, Result};
use crate::models::{SavedEntry, SavedReposResponse};

const USER_AGENT: &str = "repo-shelf/0.1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the persistence backend that stores the saved-repositories
/// list. The backend exposes a single `/repo/` collection.
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(BackendClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the full saved list.
    pub async fn fetch_saved(&self) -> Result<Vec<SavedEntry>> {
        let url = format!("{}/repo/", self.base_url);
        debug!(%url, "fetching saved repositories");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RepoShelfError::Api(format!(
                "fetch of saved repositories failed with status {}: {}",
                status, error_text
            )));
        }

        let body: SavedReposResponse = response.json().await?;
        Ok(body.repos)
    }

    /// Persist a new entry. The backend does not return a body on success.
    pub async fn create_saved(&self, entry: &SavedEntry) -> Result<()> {
        let url = format!("{}/repo/", self.base_url);
        debug!(%url, id = %entry.id, "creating saved repository");

        let response = self.client.post(&url).json(entry).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RepoShelfError::Api(format!(
                "create of saved repository failed with status {}: {}",
                status, error_text
            )));
        }

        Ok(())
    }

    /// Remove the entry with the given id.
    pub async fn delete_saved(&self, id: &str) -> Result<()> {
        let url = format!("{}/repo/{}", self.base_url, id);
        debug!(%url, "deleting saved repository");

        let response = self.client.delete(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(RepoShelfError::Api(format!(
                "delete of saved repository failed with status {}: {}",
                status, error_text
            )));
        }

        Ok(())
    }
}
