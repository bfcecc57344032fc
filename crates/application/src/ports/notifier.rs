//! User notification port.

/// Port through which the pipeline surfaces one user-visible message per
/// failed call.
///
/// The pipeline guarantees exactly one `notify` per classified failure,
/// carrying the most specific message available (envelope message, then
/// transport message, then a generic fallback).
pub trait Notifier: Send + Sync {
    /// Surfaces a failure message to the user.
    fn notify(&self, message: &str);
}
