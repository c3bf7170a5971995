//! Browser routes

use listkeeper_core::Route;
use yew_router::prelude::*;

#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum AppRoute {
    #[at("/")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/list-management")]
    ListManagement,
    #[at("/role-management")]
    RoleManagement,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<AppRoute> for Route {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::Login => Self::Login,
            AppRoute::Dashboard => Self::Dashboard,
            AppRoute::ListManagement => Self::ListManagement,
            AppRoute::RoleManagement => Self::RoleManagement,
            AppRoute::NotFound => Self::NotFound,
        }
    }
}

impl From<Route> for AppRoute {
    fn from(route: Route) -> Self {
        match route {
            Route::Login => Self::Login,
            Route::Dashboard => Self::Dashboard,
            Route::ListManagement => Self::ListManagement,
            Route::RoleManagement => Self::RoleManagement,
            Route::NotFound => Self::NotFound,
        }
    }
}
