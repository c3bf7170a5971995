//! Route table and navigation guard

use crate::storage::TokenStore;
use std::fmt;

/// Views reachable by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    ListManagement,
    RoleManagement,
    NotFound,
}

impl Route {
    /// Every named route, catch-all excluded
    pub const ALL: [Self; 4] = [
        Self::Login,
        Self::Dashboard,
        Self::ListManagement,
        Self::RoleManagement,
    ];

    /// Canonical path for this route
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Dashboard => "/dashboard",
            Self::ListManagement => "/list-management",
            Self::RoleManagement => "/role-management",
            Self::NotFound => "/404",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Dashboard => "Dashboard",
            Self::ListManagement => "ListManagement",
            Self::RoleManagement => "RoleManagement",
            Self::NotFound => "NotFound",
        }
    }

    /// Whether navigating here needs a stored token
    pub const fn requires_auth(self) -> bool {
        matches!(
            self,
            Self::Dashboard | Self::ListManagement | Self::RoleManagement
        )
    }

    /// Resolve a path to a route. Query strings, fragments and a trailing
    /// slash are ignored; anything unknown is [`Route::NotFound`].
    pub fn recognize(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/login" => Self::Login,
            "/dashboard" => Self::Dashboard,
            "/list-management" => Self::ListManagement,
            "/role-management" => Self::RoleManagement,
            _ => Self::NotFound,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Result of evaluating the guard for one navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    Allowed(Route),
    Redirected { from: Route, to: Route },
}

impl GuardOutcome {
    /// The route that ends up rendered
    pub const fn destination(self) -> Route {
        match self {
            Self::Allowed(route) | Self::Redirected { to: route, .. } => route,
        }
    }

    pub const fn is_redirect(self) -> bool {
        matches!(self, Self::Redirected { .. })
    }
}

/// Decide whether `target` may be shown, given what durable storage holds
pub fn guard(target: Route, store: &dyn TokenStore) -> GuardOutcome {
    if target.requires_auth() && store.get().is_none() {
        GuardOutcome::Redirected {
            from: target,
            to: Route::Login,
        }
    } else {
        GuardOutcome::Allowed(target)
    }
}

/// Presentation hooks used when the HTTP layer has to pull the user out of
/// the current view
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Show a blocking, user-visible notice
    fn notify(&self, message: &str);

    /// Force navigation to `route`
    fn navigate(&self, route: Route);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryTokenStore, MockTokenStore};

    #[test]
    fn recognizes_known_paths() {
        assert_eq!(Route::recognize("/"), Route::Login);
        assert_eq!(Route::recognize("/login"), Route::Login);
        assert_eq!(Route::recognize("/dashboard"), Route::Dashboard);
        assert_eq!(Route::recognize("/list-management/"), Route::ListManagement);
        assert_eq!(
            Route::recognize("/role-management?tab=all"),
            Route::RoleManagement
        );
        assert_eq!(Route::recognize("/does/not/exist"), Route::NotFound);
        assert_eq!(Route::recognize("/dashboard/extra"), Route::NotFound);
    }

    #[test]
    fn canonical_paths_resolve_to_themselves() {
        for route in Route::ALL {
            assert_eq!(Route::recognize(route.path()), route);
        }
    }

    #[test]
    fn protected_route_without_token_redirects_to_login() {
        let store = MemoryTokenStore::new();
        for route in [
            Route::Dashboard,
            Route::ListManagement,
            Route::RoleManagement,
        ] {
            assert_eq!(
                guard(route, &store),
                GuardOutcome::Redirected {
                    from: route,
                    to: Route::Login
                }
            );
        }
    }

    #[test]
    fn protected_route_with_token_is_allowed() {
        let store = MemoryTokenStore::with_token("abc123");
        let outcome = guard(Route::Dashboard, &store);
        assert_eq!(outcome, GuardOutcome::Allowed(Route::Dashboard));
        assert!(!outcome.is_redirect());
    }

    #[test]
    fn public_routes_never_consult_storage() {
        let mut store = MockTokenStore::new();
        store.expect_get().never();

        assert_eq!(guard(Route::Login, &store), GuardOutcome::Allowed(Route::Login));
        assert_eq!(
            guard(Route::NotFound, &store),
            GuardOutcome::Allowed(Route::NotFound)
        );
    }

    #[test]
    fn guard_reads_storage_once_per_navigation() {
        let mut store = MockTokenStore::new();
        store.expect_get().times(1).returning(|| None);

        let outcome = guard(Route::RoleManagement, &store);
        assert_eq!(outcome.destination(), Route::Login);
    }
}
