use std::sync::Arc;

use tracing::{debug, error};

use crate::backend::BackendClient;
use crate::error::Result;
use crate::models::SavedEntry;

/// Hard cap on the saved list; the save operation refuses an 11th entry.
pub const MAX_SAVED_REPOS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Idle,
    Loading,
    Populated,
    Failed,
}

/// Authoritative local copy of the persisted saved-repositories list.
///
/// The collection is only ever mutated inside [`refresh`](Self::refresh), and
/// always by full replacement with the backend's response. Save and delete
/// never patch it directly, so it reflects backend truth rather than client
/// optimism.
pub struct SavedRepoStore {
    backend: Arc<BackendClient>,
    entries: Vec<SavedEntry>,
    state: StoreState,
}

impl SavedRepoStore {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        SavedRepoStore {
            backend,
            entries: Vec::new(),
            state: StoreState::Idle,
        }
    }

    /// Re-fetch the saved list from the backend. On failure the prior
    /// collection is left untouched and the error is returned to the caller.
    pub async fn refresh(&mut self) -> Result<()> {
        self.state = StoreState::Loading;

        match self.backend.fetch_saved().await {
            Ok(repos) => {
                debug!(count = repos.len(), "replacing saved list from backend");
                self.entries = repos;
                self.state = StoreState::Populated;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "failed to refresh saved list");
                self.state = StoreState::Failed;
                Err(e)
            }
        }
    }

    pub fn entries(&self) -> &[SavedEntry] {
        &self.entries
    }

    /// An owned copy for consumers that outlive the borrow.
    pub fn snapshot(&self) -> Vec<SavedEntry> {
        self.entries.clone()
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= MAX_SAVED_REPOS
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub(crate) fn backend(&self) -> &BackendClient {
        &self.backend
    }
}
