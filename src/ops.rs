use tracing::{debug, info};

use crate::error::{RepoShelfError, Result};
use crate::models::SavedEntry;
use crate::store::SavedRepoStore;
use crate::types::RemoteRepoSummary;

/// Successful outcomes of [`save_repo`]. Saving with nothing selected is a
/// no-op, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    NothingSelected,
}

/// Validate and persist a selected search result.
///
/// Checks run in order and short-circuit before any network call: a full
/// list rejects with `CapacityExceeded`, no selection is a no-op, and an id
/// already present (compared as strings) rejects with `DuplicateEntry`.
/// After a successful create the store is refreshed from the backend; the
/// new entry is never appended locally.
pub async fn save_repo(
    store: &mut SavedRepoStore,
    selected: Option<&RemoteRepoSummary>,
) -> Result<SaveOutcome> {
    if store.is_full() {
        return Err(RepoShelfError::capacity_exceeded());
    }

    let Some(summary) = selected else {
        debug!("save requested with no selection, ignoring");
        return Ok(SaveOutcome::NothingSelected);
    };

    let entry = SavedEntry::from_summary(summary);
    if store.contains_id(&entry.id) {
        return Err(RepoShelfError::DuplicateEntry { id: entry.id });
    }

    store.backend().create_saved(&entry).await?;
    info!(id = %entry.id, full_name = %entry.full_name, "saved repository");

    store.refresh().await?;
    Ok(SaveOutcome::Saved)
}

/// Remove a saved entry by id, then refresh the store. On failure the local
/// collection is left untouched.
pub async fn delete_repo(store: &mut SavedRepoStore, id: &str) -> Result<()> {
    store.backend().delete_saved(id).await?;
    info!(id, "deleted repository");

    store.refresh().await
}
