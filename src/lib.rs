//! Client-side data-synchronization layer for a saved-repositories list.
//!
//! Reconciles three asynchronous sources: the GitHub search endpoint, a
//! small persistence backend, and in-memory UI state, under a 10-entry cap
//! with duplicate prevention, input debouncing, and deterministic ordering.
//! The presentation layer renders the state these components produce; it is
//! not part of this crate.

pub mod backend;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod error;
pub mod github;
pub mod models;
pub mod ops;
pub mod sort;
pub mod store;
pub mod types;

pub use backend::BackendClient;
pub use config::Config;
pub use controller::{SearchController, SEARCH_DEBOUNCE};
pub use debounce::DebouncedGate;
pub use error::{RepoShelfError, Result};
pub use github::SearchClient;
pub use models::SavedEntry;
pub use ops::{delete_repo, save_repo, SaveOutcome};
pub use sort::{process_short_name, sorted_entries, SortKey};
pub use store::{SavedRepoStore, StoreState, MAX_SAVED_REPOS};
pub use types::RemoteRepoSummary;
