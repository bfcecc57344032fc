//! Navigation port.

/// Port to the router: the single capability the core needs from it.
///
/// Invoked on the unauthorized classifications (session expiry or missing
/// credential) so the host application can route the user to its login
/// entry point.
pub trait NavigationSignal: Send + Sync {
    /// Redirects to the login entry point.
    ///
    /// `from` optionally carries the originating location so the host can
    /// return there after a successful login.
    fn redirect_to_login(&self, from: Option<&str>);
}
