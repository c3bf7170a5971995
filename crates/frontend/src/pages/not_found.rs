use crate::routes::AppRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"Page not found."}</p>
            <Link<AppRoute> to={AppRoute::Login}>{"Back to login"}</Link<AppRoute>>
        </div>
    }
}
