use super::{Revision, bind_input};
use crate::components::NavBar;
use crate::context::use_app;
use listkeeper_core::Role;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(RoleManagement)]
pub fn role_management() -> Html {
    let app = use_app();
    let roles = use_state(Vec::<Role>::new);
    let error = use_state(|| None::<String>);
    let new_role = use_state(String::new);
    let revision = use_reducer(Revision::default);

    {
        let service = app.roles();
        let roles = roles.clone();
        let error = error.clone();
        use_effect_with(revision.0, move |_| {
            spawn_local(async move {
                match service.list().await {
                    Ok(fetched) => roles.set(fetched),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
            || ()
        });
    }

    let refresh = {
        let dispatcher = revision.dispatcher();
        move || dispatcher.dispatch(())
    };

    let on_add = {
        let service = app.roles();
        let new_role = new_role.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let role = new_role.trim().to_string();
            if role.is_empty() {
                return;
            }
            let service = service.clone();
            let new_role = new_role.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match service.create(&role).await {
                    Ok(_) => {
                        new_role.set(String::new());
                        refresh();
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let rows = roles.iter().map(|role| {
        let id = role.id;
        let on_rename = {
            let service = app.roles();
            let error = error.clone();
            let refresh = refresh.clone();
            let current = role.value.clone();
            Callback::from(move |_: MouseEvent| {
                let Some(value) = gloo::dialogs::prompt("Rename role", Some(current.as_str())) else {
                    return;
                };
                let service = service.clone();
                let error = error.clone();
                let refresh = refresh.clone();
                spawn_local(async move {
                    match service.update(id, &value).await {
                        Ok(_) => refresh(),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                });
            })
        };
        let on_delete = {
            let service = app.roles();
            let error = error.clone();
            let refresh = refresh.clone();
            Callback::from(move |_: MouseEvent| {
                if !gloo::dialogs::confirm("Delete this role?") {
                    return;
                }
                let service = service.clone();
                let error = error.clone();
                let refresh = refresh.clone();
                spawn_local(async move {
                    match service.delete(id).await {
                        Ok(()) => refresh(),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                });
            })
        };

        html! {
            <li key={id}>
                <span>{ &role.value }</span>
                <button onclick={on_rename}>{"Rename"}</button>
                <button onclick={on_delete}>{"Delete"}</button>
            </li>
        }
    });

    html! {
        <>
            <NavBar />
            <main class="role-management">
                <h1>{"Role management"}</h1>
                if let Some(message) = (*error).clone() {
                    <p class="error">{ message }</p>
                }
                <form onsubmit={on_add}>
                    <input
                        type="text"
                        placeholder="New role"
                        value={(*new_role).clone()}
                        oninput={bind_input(&new_role)}
                    />
                    <button type="submit">{"Add"}</button>
                </form>
                <ul>{ for rows }</ul>
            </main>
        </>
    }
}
