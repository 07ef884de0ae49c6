use repo_shelf::error::{RepoShelfError, Result};
use repo_shelf::store::MAX_SAVED_REPOS;
use std::error::Error;

#[test]
fn test_error_display() {
    let error = RepoShelfError::Api("search failed".to_string());
    assert_eq!(format!("{}", error), "API request failed: search failed");

    let error = RepoShelfError::capacity_exceeded();
    assert_eq!(
        format!("{}", error),
        "saved repository limit reached (10 entries)"
    );

    let error = RepoShelfError::DuplicateEntry {
        id: "42".to_string(),
    };
    assert_eq!(format!("{}", error), "repository 42 is already saved");
}

#[test]
fn test_capacity_constructor_uses_store_limit() {
    let error = RepoShelfError::capacity_exceeded();
    assert!(matches!(
        error,
        RepoShelfError::CapacityExceeded { limit } if limit == MAX_SAVED_REPOS
    ));
}

#[test]
fn test_user_notice_per_failure_kind() {
    assert_eq!(
        RepoShelfError::capacity_exceeded().user_notice(),
        "You have reached the limit of 10 saved repositories."
    );

    let duplicate = RepoShelfError::DuplicateEntry {
        id: "42".to_string(),
    };
    assert_eq!(duplicate.user_notice(), "This repository is already saved.");

    let transport = RepoShelfError::Api("500".to_string());
    assert_eq!(
        transport.user_notice(),
        "There was an error processing your request. Please retry once."
    );
}

#[test]
fn test_json_error_conversion() {
    let parse_error = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let error: RepoShelfError = parse_error.into();

    assert!(matches!(error, RepoShelfError::Json(_)));
    assert!(error.source().is_some());
}

#[test]
fn test_url_error_conversion() {
    let parse_error = url::Url::parse("not a url").unwrap_err();
    let error: RepoShelfError = parse_error.into();

    assert!(matches!(error, RepoShelfError::InvalidUrl(_)));
}

#[test]
fn test_result_type() {
    fn returns_result() -> Result<String> {
        Ok("success".to_string())
    }

    assert_eq!(returns_result().unwrap(), "success");

    fn returns_error() -> Result<String> {
        Err(RepoShelfError::Api("failed".to_string()))
    }

    assert!(returns_error().is_err());
}
