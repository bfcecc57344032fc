//! Port adapters.

mod navigation;
mod notifier;
mod reqwest_transport;

pub use navigation::NoopNavigation;
pub use notifier::TracingNotifier;
pub use reqwest_transport::ReqwestTransport;
