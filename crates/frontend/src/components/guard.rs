//! Navigation guard for protected routes

use crate::context::use_app;
use crate::routes::AppRoute;
use listkeeper_core::{GuardOutcome, guard};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub route: AppRoute,
    pub children: Children,
}

/// Renders its children only if the guard allows `route`, otherwise
/// redirects before anything protected is shown
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    let app = use_app();

    match guard(props.route.into(), app.session.store().as_ref()) {
        GuardOutcome::Allowed(_) => html! { <>{ props.children.clone() }</> },
        GuardOutcome::Redirected { from, to } => {
            tracing::debug!(%from, %to, "navigation redirected");
            html! { <Redirect<AppRoute> to={AppRoute::from(to)} /> }
        }
    }
}
