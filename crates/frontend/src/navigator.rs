use listkeeper_core::{Navigator, Route};

/// Blocking alert plus a full page navigation, so every view and every piece
/// of in-memory state is rebuilt from durable storage
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn notify(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn navigate(&self, route: Route) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(route.path()) {
            tracing::error!(error = ?e, route = %route, "forced navigation failed");
        }
    }
}
