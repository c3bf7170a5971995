//! Listkeeper HTTP layer
//!
//! A single [`ApiClientFactory`] turns one [`ClientConfig`] into the clients
//! used by the resource services. Every client reads the bearer token from
//! durable storage when a request is built and handles an expired session in
//! one place, so call sites only ever see a [`ServiceError`].
//!
//! [`ClientConfig`]: listkeeper_core::ClientConfig

#[macro_use]
extern crate tracing;

pub mod client;
pub mod services;

pub use client::error::ClientError;
pub use client::{ApiClient, ApiClientFactory, SESSION_EXPIRED_NOTICE, UnauthorizedPolicy};
pub use services::{AuthService, ErrorKind, ListService, Operation, RoleService, ServiceError};
