//! List item service

use super::{Operation, ServiceError};
use crate::client::ApiClientFactory;
use listkeeper_core::ListItem;
use reqwest::Method;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ItemBody<'a> {
    item: &'a str,
}

#[derive(Deserialize)]
struct CheckResponse {
    exists: bool,
}

/// CRUD over `/lists`
#[derive(Clone)]
pub struct ListService {
    factory: ApiClientFactory,
}

impl ListService {
    pub const fn new(factory: ApiClientFactory) -> Self {
        Self { factory }
    }

    /// Fetch every list item
    pub async fn list(&self) -> Result<Vec<ListItem>, ServiceError> {
        let client = self.factory.api();
        client
            .execute(client.request(Method::GET, "/lists"))
            .await
            .map_err(ServiceError::wrap(Operation::FetchListItems))
    }

    /// Add a new item, returning it when the backend echoes it back
    pub async fn create(&self, value: &str) -> Result<Option<ListItem>, ServiceError> {
        let client = self.factory.api();
        let request = client
            .request(Method::POST, "/lists")
            .json(&ItemBody { item: value });
        client
            .execute_optional(request)
            .await
            .map_err(ServiceError::wrap(Operation::AddListItem))
    }

    /// Replace the value of an existing item. A success without an item
    /// in the body still counts as saved.
    pub async fn update(&self, id: i64, value: &str) -> Result<Option<ListItem>, ServiceError> {
        let client = self.factory.api();
        let request = client
            .request(Method::PUT, &format!("/lists/{id}"))
            .json(&ItemBody { item: value });
        client
            .execute_optional(request)
            .await
            .map_err(ServiceError::wrap(Operation::UpdateListItem))
    }

    /// Delete an item
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let client = self.factory.api();
        client
            .execute_empty(client.request(Method::DELETE, &format!("/lists/{id}")))
            .await
            .map_err(ServiceError::wrap(Operation::DeleteListItem))
    }

    /// Check whether `value` is present in the list of the given type
    /// (e.g. `blacklist`, `whitelist`)
    pub async fn check(&self, list_type: &str, value: &str) -> Result<bool, ServiceError> {
        let client = self.factory.api();
        let request = client
            .request(Method::GET, &format!("/check/{list_type}"))
            .query(&[("value", value)]);
        let response: CheckResponse = client
            .execute(request)
            .await
            .map_err(ServiceError::wrap(Operation::CheckListValue))?;
        Ok(response.exists)
    }
}
