//! Role service

use super::{Operation, ServiceError};
use crate::client::ApiClientFactory;
use listkeeper_core::Role;
use reqwest::Method;
use serde::Serialize;

#[derive(Serialize)]
struct RoleBody<'a> {
    role: &'a str,
}

/// CRUD over `/roles`
#[derive(Clone)]
pub struct RoleService {
    factory: ApiClientFactory,
}

impl RoleService {
    pub const fn new(factory: ApiClientFactory) -> Self {
        Self { factory }
    }

    pub async fn list(&self) -> Result<Vec<Role>, ServiceError> {
        let client = self.factory.api();
        client
            .execute(client.request(Method::GET, "/roles"))
            .await
            .map_err(ServiceError::wrap(Operation::FetchRoles))
    }

    pub async fn create(&self, role: &str) -> Result<Option<Role>, ServiceError> {
        let client = self.factory.api();
        let request = client.request(Method::POST, "/roles").json(&RoleBody { role });
        client
            .execute_optional(request)
            .await
            .map_err(ServiceError::wrap(Operation::AddRole))
    }

    pub async fn update(&self, id: i64, role: &str) -> Result<Option<Role>, ServiceError> {
        let client = self.factory.api();
        let request = client
            .request(Method::PUT, &format!("/roles/{id}"))
            .json(&RoleBody { role });
        client
            .execute_optional(request)
            .await
            .map_err(ServiceError::wrap(Operation::UpdateRole))
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let client = self.factory.api();
        client
            .execute_empty(client.request(Method::DELETE, &format!("/roles/{id}")))
            .await
            .map_err(ServiceError::wrap(Operation::DeleteRole))
    }
}
