use crate::components::NavBar;
use crate::context::use_app;
use crate::routes::AppRoute;
use listkeeper_core::Counter;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Default, PartialEq)]
struct CounterState(Counter);

enum CounterAction {
    Increment,
}

impl Reducible for CounterState {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut counter = self.0;
        match action {
            CounterAction::Increment => counter.increment(),
        }
        Rc::new(Self(counter))
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let app = use_app();
    let counter = use_reducer(CounterState::default);

    let on_increment = {
        let counter = counter.dispatcher();
        Callback::from(move |_: MouseEvent| counter.dispatch(CounterAction::Increment))
    };

    let greeting = app
        .session
        .user()
        .map_or_else(|| "Welcome".to_string(), |user| format!("Welcome, {}", user.username));

    html! {
        <>
            <NavBar />
            <main class="dashboard">
                <h1>{ greeting }</h1>
                <ul>
                    <li><Link<AppRoute> to={AppRoute::ListManagement}>{"Manage lists"}</Link<AppRoute>></li>
                    <li><Link<AppRoute> to={AppRoute::RoleManagement}>{"Manage roles"}</Link<AppRoute>></li>
                </ul>
                <p>{ format!("Count: {}", counter.0.count()) }</p>
                <button onclick={on_increment}>{"Increment"}</button>
            </main>
        </>
    }
}
