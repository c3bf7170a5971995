//! Resource access services
//!
//! Each service wraps one backend resource. Failures never leak backend
//! detail into their message: callers get a fixed, per-operation message,
//! while the underlying [`ClientError`] stays reachable through
//! [`ServiceError::cause`] and is logged when the error is created.

pub mod auth;
pub mod lists;
pub mod roles;

pub use auth::AuthService;
pub use lists::ListService;
pub use roles::RoleService;

use crate::client::error::ClientError;
use std::fmt;

/// Every operation a service can fail at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Login,
    Register,
    FetchCurrentUser,
    FetchListItems,
    AddListItem,
    UpdateListItem,
    DeleteListItem,
    CheckListValue,
    FetchRoles,
    AddRole,
    UpdateRole,
    DeleteRole,
}

impl Operation {
    /// Stable, user-facing failure message
    pub const fn message(self) -> &'static str {
        match self {
            Self::Login => "Failed to login. Please check your credentials.",
            Self::Register => "Failed to register user.",
            Self::FetchCurrentUser => "Failed to fetch current user.",
            Self::FetchListItems => "Failed to fetch list items.",
            Self::AddListItem => "Failed to add list item.",
            Self::UpdateListItem => "Failed to update list item.",
            Self::DeleteListItem => "Failed to delete list item.",
            Self::CheckListValue => "Failed to check list value.",
            Self::FetchRoles => "Failed to fetch roles.",
            Self::AddRole => "Failed to add role.",
            Self::UpdateRole => "Failed to update role.",
            Self::DeleteRole => "Failed to delete role.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Coarse classification of why an operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never produced a response
    Transport,
    /// The backend answered with a non-success status other than 401
    Backend(u16),
    /// The backend rejected the token or the credentials
    AuthExpired,
    /// The response body had an unexpected shape
    Decode,
    /// Configuration or local storage failure
    Other,
}

/// A failed service operation
#[derive(Debug, thiserror::Error)]
#[error("{}", .operation.message())]
pub struct ServiceError {
    operation: Operation,
    #[source]
    cause: ClientError,
}

impl ServiceError {
    pub(crate) fn new(operation: Operation, cause: ClientError) -> Self {
        error!(operation = %operation, error = %cause, "{}", operation.message());
        Self { operation, cause }
    }

    pub(crate) fn wrap(operation: Operation) -> impl FnOnce(ClientError) -> Self {
        move |cause| Self::new(operation, cause)
    }

    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// The underlying client error
    pub const fn cause(&self) -> &ClientError {
        &self.cause
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.cause {
            ClientError::Request(_) => ErrorKind::Transport,
            ClientError::Unauthorized(_) => ErrorKind::AuthExpired,
            ClientError::Status { status, .. } => ErrorKind::Backend(*status),
            ClientError::Decode(_) => ErrorKind::Decode,
            ClientError::Configuration(_) | ClientError::Storage(_) => ErrorKind::Other,
        }
    }
}
