//! Navigation adapter for headless use.

use tracing::debug;

use agora_application::ports::NavigationSignal;

/// Navigation signal that records the redirect request in the log and
/// otherwise does nothing. Hosts with a router implement the port
/// themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigation;

impl NavigationSignal for NoopNavigation {
    fn redirect_to_login(&self, from: Option<&str>) {
        debug!(?from, "login redirect requested");
    }
}
