#![allow(dead_code)]

use repo_shelf::backend::BackendClient;
use repo_shelf::models::SavedEntry;
use repo_shelf::store::SavedRepoStore;
use repo_shelf::types::RemoteRepoSummary;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn sample_summary(id: u64, full_name: &str, stars: u32) -> RemoteRepoSummary {
    let name = full_name.rsplit('/').next().unwrap_or(full_name).to_string();
    RemoteRepoSummary {
        id,
        name,
        full_name: full_name.to_string(),
        description: Some("A test repository".to_string()),
        created_at: "2011-01-26T19:01:12Z".parse().unwrap(),
        stargazers_count: stars,
        language: Some("Rust".to_string()),
        url: format!("https://api.github.com/repos/{}", full_name),
    }
}

pub fn sample_entry(id: &str, full_name: &str, stars: u32) -> SavedEntry {
    SavedEntry {
        id: id.to_string(),
        full_name: full_name.to_string(),
        created_at: "2011-01-26T19:01:12Z".parse().unwrap(),
        stargazers_count: stars,
        language: Some("Rust".to_string()),
        url: format!("https://api.github.com/repos/{}", full_name),
    }
}

pub fn saved_body(entries: &[SavedEntry]) -> serde_json::Value {
    serde_json::json!({ "repos": entries })
}

/// Mount a `GET /repo/` mock returning the given saved list.
pub async fn mount_saved_list(server: &MockServer, entries: &[SavedEntry], expect: u64) {
    Mock::given(method("GET"))
        .and(path("/repo/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(saved_body(entries)))
        .expect(expect)
        .mount(server)
        .await;
}

pub fn store_for(server: &MockServer) -> anyhow::Result<SavedRepoStore> {
    let backend = BackendClient::new(server.uri())?;
    Ok(SavedRepoStore::new(Arc::new(backend)))
}

/// Debugging aid: run with `RUST_LOG=debug` to see client-side tracing.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
