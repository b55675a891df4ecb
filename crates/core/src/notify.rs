//! User-facing notification port.
//!
//! Every terminal outcome of an interactive operation (profile saved, upload
//! failed, sign-in link sent) is surfaced through this trait. The rendering
//! side decides whether that means a native alert, a modal dialog or a log
//! line; this layer only guarantees that no failure is silently swallowed.

use tracing::{error, info, warn};

/// Synchronous, dismissable, non-persistent user notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier that routes everything through `tracing`.
///
/// Used by headless callers and tests that do not render notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!(notification = message, "user notification");
    }

    fn warning(&self, message: &str) {
        warn!(notification = message, "user notification");
    }

    fn error(&self, message: &str) {
        error!(notification = message, "user notification");
    }
}
