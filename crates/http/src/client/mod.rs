//! Listkeeper HTTP client

pub mod error;

use error::ClientError;
use listkeeper_core::{ClientConfig, Navigator, Session};
use reqwest::{Client, ClientBuilder, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Notice shown when the backend rejects the stored token
pub const SESSION_EXPIRED_NOTICE: &str = "Session expired. Please log in again.";

/// What a client does when the backend answers 401
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnauthorizedPolicy {
    /// Clear the session, notify the user and navigate to the login route
    ExpireSession,
    /// Hand the error back untouched. Used where a 401 means bad
    /// credentials rather than an expired session.
    Propagate,
}

/// Builds API clients from one configuration source
#[derive(Clone)]
pub struct ApiClientFactory {
    http: Client,
    config: Arc<ClientConfig>,
    session: Arc<Session>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClientFactory {
    /// Create a factory
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the underlying
    /// HTTP client cannot be built
    pub fn new(
        config: ClientConfig,
        session: Arc<Session>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ClientError> {
        config.validate()?;
        let http = build_http_client(&config)?;

        Ok(Self {
            http,
            config: Arc::new(config),
            session,
            navigator,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Client rooted at `server_url` + `base_path`
    pub fn client(&self, base_path: &str, policy: UnauthorizedPolicy) -> ApiClient {
        ApiClient {
            http: self.http.clone(),
            base_url: self.config.base_url(base_path),
            policy,
            session: self.session.clone(),
            navigator: self.navigator.clone(),
        }
    }

    /// Client for the general resource endpoints
    pub fn api(&self) -> ApiClient {
        self.client(&self.config.api_path, UnauthorizedPolicy::ExpireSession)
    }

    /// Client for the authentication endpoints that accept credentials
    pub fn auth(&self) -> ApiClient {
        self.client(&self.config.auth_path, UnauthorizedPolicy::Propagate)
    }

    /// Client for the authentication endpoints that require a session
    pub fn auth_session(&self) -> ApiClient {
        self.client(&self.config.auth_path, UnauthorizedPolicy::ExpireSession)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http_client(config: &ClientConfig) -> Result<Client, ClientError> {
    let mut builder = ClientBuilder::new().user_agent(config.user_agent.clone());
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(std::time::Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

#[cfg(target_arch = "wasm32")]
fn build_http_client(config: &ClientConfig) -> Result<Client, ClientError> {
    // Browsers set their own user agent and own request timeouts
    let _ = config;
    Ok(ClientBuilder::new().build()?)
}

/// HTTP client that attaches the stored bearer token and intercepts 401s
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    policy: UnauthorizedPolicy,
    session: Arc<Session>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn policy(&self) -> UnauthorizedPolicy {
        self.policy
    }

    /// Create a request builder, authenticated if a token is stored
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "building request");

        let request = self.http.request(method, url);
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Execute a request and decode the JSON body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let body = self.send(request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Execute a request whose success body may or may not be a `T`
    ///
    /// An empty body or well-formed JSON of another shape yields `None`.
    /// Only a body that is not JSON at all is a decode error.
    pub async fn execute_optional<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Option<T>, ClientError> {
        let body = self.send(request).await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let value: serde_json::Value = serde_json::from_slice(&body)?;
        Ok(serde_json::from_value(value).ok())
    }

    /// Execute a request whose response body is irrelevant
    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<(), ClientError> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>, ClientError> {
        let response = request.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.bytes().await?.to_vec());
        }

        let body = response.text().await.unwrap_or_else(|_| status.to_string());
        let error = ClientError::from_status(status, body);
        debug!(status = status.as_u16(), error = %error, "request failed");

        if error.is_auth_expired() && self.policy == UnauthorizedPolicy::ExpireSession {
            self.expire_session();
        }
        Err(error)
    }

    fn expire_session(&self) {
        warn!(base_url = %self.base_url, "backend rejected the stored token, ending session");
        if let Err(e) = self
            .session
            .expire_and_redirect(self.navigator.as_ref(), SESSION_EXPIRED_NOTICE)
        {
            error!(error = %e, "failed to clear stored token");
        }
    }
}
