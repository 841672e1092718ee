//! Client configuration loaded from environment variables.

use std::env;

/// Default API root, matching the server's default port.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api/v1";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the posts API, without a trailing slash.
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from `INKPOST_API_URL`.
    pub fn from_env() -> Self {
        let api_url = env::var("INKPOST_API_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}
