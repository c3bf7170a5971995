use super::{Revision, bind_input};
use crate::components::NavBar;
use crate::context::use_app;
use listkeeper_core::ListItem;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(ListManagement)]
pub fn list_management() -> Html {
    let app = use_app();
    let items = use_state(Vec::<ListItem>::new);
    let error = use_state(|| None::<String>);
    let new_value = use_state(String::new);
    let check_type = use_state(|| "blacklist".to_string());
    let check_value = use_state(String::new);
    let check_result = use_state(|| None::<bool>);
    let revision = use_reducer(Revision::default);

    {
        let lists = app.lists();
        let items = items.clone();
        let error = error.clone();
        use_effect_with(revision.0, move |_| {
            spawn_local(async move {
                match lists.list().await {
                    Ok(fetched) => items.set(fetched),
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
        let lists = app.lists();
        let new_value = new_value.clone();
        let error = error.clone();
        let refresh = refresh.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let value = new_value.trim().to_string();
            if value.is_empty() {
                return;
            }
            let lists = lists.clone();
            let new_value = new_value.clone();
            let error = error.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                match lists.create(&value).await {
                    Ok(_) => {
                        new_value.set(String::new());
                        refresh();
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let on_check = {
        let lists = app.lists();
        let check_type = check_type.clone();
        let check_value = check_value.clone();
        let check_result = check_result.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let lists = lists.clone();
            let list_type = (*check_type).clone();
            let value = (*check_value).clone();
            let check_result = check_result.clone();
            let error = error.clone();
            spawn_local(async move {
                match lists.check(&list_type, &value).await {
                    Ok(exists) => check_result.set(Some(exists)),
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let rows = items.iter().map(|item| {
        let id = item.id;
        let on_edit = {
            let lists = app.lists();
            let error = error.clone();
            let refresh = refresh.clone();
            let current = item.value.clone();
            Callback::from(move |_: MouseEvent| {
                let Some(value) = gloo::dialogs::prompt("New value", Some(current.as_str())) else {
                    return;
                };
                let lists = lists.clone();
                let error = error.clone();
                let refresh = refresh.clone();
                spawn_local(async move {
                    match lists.update(id, &value).await {
                        Ok(_) => refresh(),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                });
            })
        };
        let on_delete = {
            let lists = app.lists();
            let error = error.clone();
            let refresh = refresh.clone();
            Callback::from(move |_: MouseEvent| {
                let lists = lists.clone();
                let error = error.clone();
                let refresh = refresh.clone();
                spawn_local(async move {
                    match lists.delete(id).await {
                        Ok(()) => refresh(),
                        Err(e) => error.set(Some(e.to_string())),
                    }
                });
            })
        };

        html! {
            <li key={id}>
                <span>{ &item.value }</span>
                <button onclick={on_edit}>{"Edit"}</button>
                <button onclick={on_delete}>{"Delete"}</button>
            </li>
        }
    });

    html! {
        <>
            <NavBar />
            <main class="list-management">
                <h1>{"List management"}</h1>
                if let Some(message) = (*error).clone() {
                    <p class="error">{ message }</p>
                }
                <form onsubmit={on_add}>
                    <input
                        type="text"
                        placeholder="New item"
                        value={(*new_value).clone()}
                        oninput={bind_input(&new_value)}
                    />
                    <button type="submit">{"Add"}</button>
                </form>
                <ul>{ for rows }</ul>

                <h2>{"Check a value"}</h2>
                <form onsubmit={on_check}>
                    <input
                        type="text"
                        placeholder="List type"
                        value={(*check_type).clone()}
                        oninput={bind_input(&check_type)}
                    />
                    <input
                        type="text"
                        placeholder="Value"
                        value={(*check_value).clone()}
                        oninput={bind_input(&check_value)}
                    />
                    <button type="submit">{"Check"}</button>
                </form>
                if let Some(exists) = *check_result {
                    <p>{ if exists { "Value is listed." } else { "Value is not listed." } }</p>
                }
            </main>
        </>
    }
}
