use super::bind_input;
use crate::context::use_app;
use crate::routes::AppRoute;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Login)]
pub fn login() -> Html {
    let app = use_app();
    let navigator = use_navigator();
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let loading = use_state(|| false);

    let on_submit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let auth = app.auth();
            let username = (*username).clone();
            let password = (*password).clone();
            let error = error.clone();
            let loading = loading.clone();
            let navigator = navigator.clone();

            loading.set(true);
            spawn_local(async move {
                match auth.login(&username, &password).await {
                    Ok(_) => {
                        // Profile is cosmetic, a failure here is already logged
                        let _ = auth.current_user().await;
                        error.set(None);
                        if let Some(navigator) = navigator {
                            navigator.push(&AppRoute::Dashboard);
                        }
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        })
    };

    html! {
        <div class="login-page">
            <h1>{"Sign in"}</h1>
            <form onsubmit={on_submit}>
                <input
                    type="text"
                    placeholder="Username"
                    value={(*username).clone()}
                    oninput={bind_input(&username)}
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={(*password).clone()}
                    oninput={bind_input(&password)}
                />
                <button type="submit" disabled={*loading}>
                    { if *loading { "Signing in..." } else { "Login" } }
                </button>
            </form>
            if let Some(message) = (*error).clone() {
                <p class="error">{ message }</p>
            }
        </div>
    }
}
