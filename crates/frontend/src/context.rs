//! Application context shared with every component

use crate::config::client_config;
use crate::navigator::BrowserNavigator;
use crate::storage::LocalTokenStore;
use listkeeper_core::Session;
use listkeeper_http::{ApiClientFactory, AuthService, ClientError, ListService, RoleService};
use std::sync::Arc;
use yew::prelude::*;

/// Session and client factory, created once when the app mounts
#[derive(Clone)]
pub struct AppContext {
    pub session: Arc<Session>,
    pub factory: ApiClientFactory,
}

impl AppContext {
    /// Build the browser context: `localStorage` for the token, alerts and
    /// page navigation for expired sessions
    pub fn browser() -> Result<Self, ClientError> {
        let session = Arc::new(Session::new(Arc::new(LocalTokenStore)));
        let factory =
            ApiClientFactory::new(client_config(), session.clone(), Arc::new(BrowserNavigator))?;
        Ok(Self { session, factory })
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.factory.clone())
    }

    pub fn lists(&self) -> ListService {
        ListService::new(self.factory.clone())
    }

    pub fn roles(&self) -> RoleService {
        RoleService::new(self.factory.clone())
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.session, &other.session)
    }
}

/// Hook to use the app context
#[hook]
pub fn use_app() -> AppContext {
    use_context::<AppContext>()
        .expect("AppContext not found. Make sure the component is rendered inside App")
}
