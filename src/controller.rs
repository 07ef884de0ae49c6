use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Result;
use crate::github::SearchClient;
use crate::types::RemoteRepoSummary;

/// Delay callers should use when driving [`SearchController::search`] through
/// a [`DebouncedGate`](crate::debounce::DebouncedGate).
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(500);

/// Owner of the transient search-result list and its visibility flag.
pub struct SearchController {
    client: SearchClient,
    results: Vec<RemoteRepoSummary>,
    results_visible: bool,
}

impl SearchController {
    pub fn new(client: SearchClient) -> Self {
        SearchController {
            client,
            results: Vec::new(),
            results_visible: false,
        }
    }

    /// Run a search. An empty term clears the results synchronously without a
    /// network call. On a transport failure the prior results stay as-is and
    /// the error is returned.
    pub async fn search(&mut self, term: &str) -> Result<()> {
        if term.is_empty() {
            debug!("empty search term, clearing results");
            self.results.clear();
            self.results_visible = false;
            return Ok(());
        }

        match self.client.search_repositories(term).await {
            Ok(items) => {
                debug!(term, count = items.len(), "search results updated");
                self.results = items;
                self.results_visible = true;
                Ok(())
            }
            Err(e) => {
                warn!(term, error = %e, "search failed, keeping prior results");
                Err(e)
            }
        }
    }

    /// Pick a result. Selection consumes the transient set: the results and
    /// the visibility flag are cleared as a side effect.
    pub fn select(&mut self, index: usize) -> Option<RemoteRepoSummary> {
        let picked = self.results.get(index).cloned();
        if picked.is_some() {
            self.results.clear();
            self.results_visible = false;
        }
        picked
    }

    pub fn results(&self) -> &[RemoteRepoSummary] {
        &self.results
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }
}
