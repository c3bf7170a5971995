//! Authentication service

use super::{Operation, ServiceError};
use crate::client::ApiClientFactory;
use crate::client::error::ClientError;
use listkeeper_core::{Credentials, LoginResponse, User};
use reqwest::Method;

/// Login, registration and current-user lookups
#[derive(Clone)]
pub struct AuthService {
    factory: ApiClientFactory,
}

impl AuthService {
    pub const fn new(factory: ApiClientFactory) -> Self {
        Self { factory }
    }

    /// Exchange credentials for a token and persist it in durable storage
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<LoginResponse, ServiceError> {
        let client = self.factory.auth();
        let request = client
            .request(Method::POST, "/auth/login")
            .json(&Credentials::new(username, password));

        let response: LoginResponse = client
            .execute(request)
            .await
            .map_err(ServiceError::wrap(Operation::Login))?;

        self.factory
            .session()
            .set_token(&response.access_token)
            .map_err(|e| ServiceError::new(Operation::Login, ClientError::from(e)))?;

        info!(username, "logged in");
        Ok(response)
    }

    /// Create a new account
    pub async fn register(&self, username: &str, password: &str) -> Result<User, ServiceError> {
        let client = self.factory.auth();
        let request = client
            .request(Method::POST, "/auth/register")
            .json(&Credentials::new(username, password));

        let user: User = client
            .execute(request)
            .await
            .map_err(ServiceError::wrap(Operation::Register))?;

        info!(username = %user.username, "registered user");
        Ok(user)
    }

    /// Fetch the authenticated user and record it in the session
    pub async fn current_user(&self) -> Result<User, ServiceError> {
        let client = self.factory.auth_session();
        let request = client.request(Method::GET, "/auth/users/me");

        let user: User = client
            .execute(request)
            .await
            .map_err(ServiceError::wrap(Operation::FetchCurrentUser))?;

        self.factory.session().set_user(user.clone());
        Ok(user)
    }
}
