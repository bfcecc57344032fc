//! Notifier adapter for headless use.

use tracing::warn;

use agora_application::ports::Notifier;

/// Routes failure notifications through `tracing`.
///
/// The default for embeddings without a UI; hosts with one implement the
/// port themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        warn!(%message, "request failed");
    }
}
