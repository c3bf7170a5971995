//! Terminal presentation of forced navigation

use listkeeper_core::{Navigator, Route};
use tracing::warn;

/// Prints notices to stderr. A terminal has no view to leave, so a forced
/// navigation becomes a hint about the command that reaches that view.
#[derive(Debug, Default)]
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn notify(&self, message: &str) {
        warn!("{message}");
        eprintln!("{message}");
    }

    fn navigate(&self, route: Route) {
        match route {
            Route::Login => eprintln!("Run `listkeeper login` to start a new session."),
            other => eprintln!("Redirected to {other}"),
        }
    }
}
