//! Client configuration
//!
//! One configuration source feeds every HTTP client the application builds.
//! The general resource client and the authentication client differ only in
//! the base path appended to `server_url`.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Connection settings shared by all API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin, e.g. `http://localhost:8000`
    pub server_url: String,

    /// Base path of the general resource endpoints
    pub api_path: String,

    /// Base path of the authentication endpoints
    pub auth_path: String,

    /// Request timeout in seconds. Unbounded when absent.
    pub timeout_secs: Option<u64>,

    /// User agent sent on native targets
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:8000".to_string(),
            api_path: "/api".to_string(),
            auth_path: String::new(),
            timeout_secs: None,
            user_agent: concat!("listkeeper-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Config pointing at another origin, keeping default paths
    pub fn with_server_url(server_url: impl Into<String>) -> Self {
        Self {
            server_url: server_url.into(),
            ..Self::default()
        }
    }

    /// Check that the configuration can produce working clients
    ///
    /// # Errors
    ///
    /// Returns an error if `server_url` is not an absolute http(s) URL or a
    /// base path does not start with `/`
    pub fn validate(&self) -> CoreResult<()> {
        let url = url::Url::parse(&self.server_url).map_err(|e| {
            CoreError::invalid_config(format!("server_url {:?}: {e}", self.server_url))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::invalid_config(format!(
                "server_url must use http or https, got {}",
                url.scheme()
            )));
        }
        for (name, path) in [("api_path", &self.api_path), ("auth_path", &self.auth_path)] {
            if !path.is_empty() && !path.starts_with('/') {
                return Err(CoreError::invalid_config(format!(
                    "{name} must be empty or start with '/', got {path:?}"
                )));
            }
        }
        Ok(())
    }

    /// Join `server_url` and a base path without doubling slashes
    pub fn base_url(&self, base_path: &str) -> String {
        let origin = self.server_url.trim_end_matches('/');
        let path = base_path.trim_end_matches('/');
        format!("{origin}{path}")
    }

    pub fn api_base_url(&self) -> String {
        self.base_url(&self.api_path)
    }

    pub fn auth_base_url(&self) -> String {
        self.base_url(&self.auth_path)
    }
}
