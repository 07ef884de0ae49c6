use std::env;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_SEARCH_URL: &str = "https://api.github.com";

/// Runtime configuration, sourced from the environment (with `.env` support).
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the persistence backend.
    pub backend_url: String,
    /// Base URL of the GitHub API.
    pub search_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let backend_url =
            env::var("BACKEND_URL").unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string());
        let search_url =
            env::var("GITHUB_API_URL").unwrap_or_else(|_| DEFAULT_SEARCH_URL.to_string());

        Config {
            backend_url,
            search_url,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            search_url: DEFAULT_SEARCH_URL.to_string(),
        }
    }
}
