//! Session context and the counter store
//!
//! A [`Session`] is created once per client and handed to whoever needs it as
//! an `Arc<Session>`. Durable storage is the single source of truth for the
//! token: the session never keeps its own copy, so a token written by login
//! and a token read after a reload are always the same value. The user record
//! is memory-only and must be re-fetched after a reload.

use crate::error::CoreResult;
use crate::router::{Navigator, Route};
use crate::storage::TokenStore;
use crate::types::User;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// The currently authenticated user and their token
pub struct Session {
    store: Arc<dyn TokenStore>,
    user: RwLock<Option<User>>,
}

impl Session {
    /// Create an empty session over the given durable store
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self {
            store,
            user: RwLock::new(None),
        }
    }

    /// The durable store backing this session
    pub fn store(&self) -> &Arc<dyn TokenStore> {
        &self.store
    }

    pub fn set_user(&self, user: User) {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }

    pub fn user(&self) -> Option<User> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Persist a new token
    pub fn set_token(&self, token: &str) -> CoreResult<()> {
        self.store.set(token)
    }

    /// Current token, read from durable storage
    pub fn token(&self) -> Option<String> {
        self.store.get()
    }

    /// Whether a token is present. A present token with an absent user is a
    /// valid state right after a reload.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Clear both the user and the stored token
    pub fn logout(&self) -> CoreResult<()> {
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.store.clear()
    }

    /// Drop the session after the backend rejected the token
    pub fn expire(&self) -> CoreResult<()> {
        self.logout()
    }

    /// Expire the session, show `notice` and send the user to the login
    /// route. The notice and navigation happen even if clearing storage
    /// fails, and that failure is returned afterwards.
    pub fn expire_and_redirect(&self, navigator: &dyn Navigator, notice: &str) -> CoreResult<()> {
        let cleared = self.expire();
        navigator.notify(notice);
        navigator.navigate(Route::Login);
        cleared
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user", &self.user())
            .field("has_token", &self.is_authenticated())
            .finish()
    }
}

/// Generic counter-style store used by the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub const fn count(self) -> u64 {
        self.count
    }

    pub const fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::router::MockNavigator;
    use crate::storage::{MemoryTokenStore, MockTokenStore};
    use mockall::Sequence;
    use mockall::predicate::eq;

    fn alice() -> User {
        User {
            username: "alice".to_string(),
            email: None,
        }
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::new(Arc::new(MemoryTokenStore::new()));
        assert_eq!(session.user(), None);
        assert_eq!(session.token(), None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn token_is_read_through_from_storage() {
        let store = Arc::new(MemoryTokenStore::new());
        let session = Session::new(store.clone());

        session.set_token("abc123").unwrap();
        assert_eq!(store.get().as_deref(), Some("abc123"));

        // A write that bypasses the session is still visible
        store.set("rotated").unwrap();
        assert_eq!(session.token().as_deref(), Some("rotated"));
    }

    #[test]
    fn logout_clears_user_and_token() {
        let session = Session::new(Arc::new(MemoryTokenStore::with_token("abc123")));
        session.set_user(alice());

        session.logout().unwrap();

        assert_eq!(session.user(), None);
        assert_eq!(session.token(), None);
    }

    #[test]
    fn reload_leaves_token_without_user() {
        let store: Arc<dyn TokenStore> = Arc::new(MemoryTokenStore::new());
        let before = Session::new(store.clone());
        before.set_token("abc123").unwrap();
        before.set_user(alice());

        let after = Session::new(store);
        assert!(after.is_authenticated());
        assert_eq!(after.user(), None);
    }

    #[test]
    fn logout_reports_storage_failure_after_clearing_user() {
        let mut store = MockTokenStore::new();
        store
            .expect_clear()
            .times(1)
            .returning(|| Err(CoreError::storage("disk full")));
        let session = Session::new(Arc::new(store));
        session.set_user(alice());

        assert!(session.logout().is_err());
        assert_eq!(session.user(), None);
    }

    #[test]
    fn expiry_clears_then_notifies_then_navigates() {
        let store = Arc::new(MemoryTokenStore::with_token("stale"));
        let session = Session::new(store.clone());
        session.set_user(alice());

        let mut seq = Sequence::new();
        let mut navigator = MockNavigator::new();
        navigator
            .expect_notify()
            .withf(|message| message == "Session expired")
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        navigator
            .expect_navigate()
            .with(eq(Route::Login))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        session
            .expire_and_redirect(&navigator, "Session expired")
            .unwrap();

        assert_eq!(store.get(), None);
        assert_eq!(session.user(), None);
    }

    #[test]
    fn expiry_still_redirects_when_storage_fails() {
        let mut store = MockTokenStore::new();
        store
            .expect_clear()
            .times(1)
            .returning(|| Err(CoreError::storage("read-only")));
        let session = Session::new(Arc::new(store));

        let mut navigator = MockNavigator::new();
        navigator.expect_notify().times(1).return_const(());
        navigator
            .expect_navigate()
            .with(eq(Route::Login))
            .times(1)
            .return_const(());

        assert!(session.expire_and_redirect(&navigator, "bye").is_err());
    }

    #[test]
    fn counter_increments() {
        let mut counter = Counter::default();
        counter.increment();
        counter.increment();
        assert_eq!(counter.count(), 2);
    }
}
