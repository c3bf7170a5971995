mod dashboard;
mod list_management;
mod login;
mod not_found;
mod role_management;

pub use dashboard::Dashboard;
pub use list_management::ListManagement;
pub use login::Login;
pub use not_found::NotFound;
pub use role_management::RoleManagement;

use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Callback writing an input's current value into a state handle
pub(crate) fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

/// Refetch trigger. Every dispatch bumps it once, whichever render the
/// dispatcher was taken from.
#[derive(Default, PartialEq, Eq)]
pub(crate) struct Revision(pub(crate) u32);

impl Reducible for Revision {
    type Action = ();

    fn reduce(self: Rc<Self>, (): ()) -> Rc<Self> {
        Rc::new(Self(self.0.wrapping_add(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_refresh_bumps_the_revision() {
        let start = Rc::new(Revision::default());

        // Two refreshes dispatched from the same render
        let first = Revision::reduce(start.clone(), ());
        let second = Revision::reduce(first, ());

        assert_eq!(start.0, 0);
        assert_eq!(second.0, 2);
    }
}
