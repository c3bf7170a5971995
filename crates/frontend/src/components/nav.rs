use crate::context::use_app;
use crate::routes::AppRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let app = use_app();
    let navigator = use_navigator();

    let on_logout = {
        let app = app.clone();
        Callback::from(move |_: MouseEvent| {
            if let Err(e) = app.session.logout() {
                tracing::error!(error = %e, "failed to clear session");
            }
            if let Some(navigator) = &navigator {
                navigator.push(&AppRoute::Login);
            }
        })
    };

    let username = app.session.user().map(|user| user.username);

    html! {
        <nav class="navbar">
            <Link<AppRoute> to={AppRoute::Dashboard}>{"Dashboard"}</Link<AppRoute>>
            <Link<AppRoute> to={AppRoute::ListManagement}>{"Lists"}</Link<AppRoute>>
            <Link<AppRoute> to={AppRoute::RoleManagement}>{"Roles"}</Link<AppRoute>>
            <span class="navbar-user">{ username.unwrap_or_default() }</span>
            <button onclick={on_logout}>{"Logout"}</button>
        </nav>
    }
}
