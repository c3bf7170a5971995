use crate::components::RequireAuth;
use crate::context::AppContext;
use crate::pages::{Dashboard, ListManagement, Login, NotFound, RoleManagement};
use crate::routes::AppRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let context = use_memo((), |()| AppContext::browser().map_err(|e| e.to_string()));

    match &*context {
        Ok(context) => html! {
            <ContextProvider<AppContext> context={context.clone()}>
                <BrowserRouter>
                    <Switch<AppRoute> render={switch} />
                </BrowserRouter>
            </ContextProvider<AppContext>>
        },
        Err(error) => html! {
            <div class="fatal">
                <h1>{"Listkeeper could not start"}</h1>
                <p>{error}</p>
            </div>
        },
    }
}

fn switch(route: AppRoute) -> Html {
    match route {
        AppRoute::Login => html! { <Login /> },
        AppRoute::Dashboard => html! {
            <RequireAuth route={route}><Dashboard /></RequireAuth>
        },
        AppRoute::ListManagement => html! {
            <RequireAuth route={route}><ListManagement /></RequireAuth>
        },
        AppRoute::RoleManagement => html! {
            <RequireAuth route={route}><RoleManagement /></RequireAuth>
        },
        AppRoute::NotFound => html! { <NotFound /> },
    }
}
