use thiserror::Error;

use crate::store::MAX_SAVED_REPOS;

#[derive(Error, Debug)]
pub enum RepoShelfError {
    #[error("API request failed: {0}")]
    Api(String),

    #[error("saved repository limit reached ({limit} entries)")]
    CapacityExceeded { limit: usize },

    #[error("repository {id} is already saved")]
    DuplicateEntry { id: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl RepoShelfError {
    pub fn capacity_exceeded() -> Self {
        RepoShelfError::CapacityExceeded { limit: MAX_SAVED_REPOS }
    }

    /// Text the presentation layer shows for this failure. Validation
    /// failures carry their own copy; everything else collapses into the
    /// generic retry notice.
    pub fn user_notice(&self) -> &'static str {
        match self {
            RepoShelfError::CapacityExceeded { .. } => {
                "You have reached the limit of 10 saved repositories."
            }
            RepoShelfError::DuplicateEntry { .. } => "This repository is already saved.",
            _ => "There was an error processing your request. Please retry once.",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepoShelfError>;
