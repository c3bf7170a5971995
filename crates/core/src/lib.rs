//! Listkeeper core types and utilities
//!
//! Everything in this crate is platform neutral: the same session, storage and
//! routing rules back both the terminal client and the browser client.

pub mod config;
pub mod error;
pub mod router;
pub mod session;
pub mod storage;
pub mod types;

pub use config::ClientConfig;
pub use error::{CoreError, CoreResult};
pub use router::{GuardOutcome, Navigator, Route, guard};
pub use session::{Counter, Session};
pub use storage::{FileTokenStore, MemoryTokenStore, TOKEN_KEY, TokenStore};
pub use types::{Credentials, ListItem, LoginResponse, Role, User};
