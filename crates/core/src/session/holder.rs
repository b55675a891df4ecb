//! Holder of the currently authenticated identity.
//!
//! Single-writer, many-reader state over a watch channel. The auth adapter
//! holds the [`SessionWriter`] and publishes `Some(identity)` when a session
//! is established and `None` when it is lost; everything else only reads.
//! Dropping a subscription receiver is the listener teardown.

use profilekit_domain::Identity;
use tokio::sync::watch;
use tracing::info;

/// Create a connected writer/holder pair with no session established.
pub fn session_channel() -> (SessionWriter, SessionHolder) {
    let (tx, rx) = watch::channel(None);
    (SessionWriter { tx }, SessionHolder { rx })
}

/// Read side: the current identity and change notifications.
#[derive(Debug, Clone)]
pub struct SessionHolder {
    rx: watch::Receiver<Option<Identity>>,
}

impl SessionHolder {
    /// The identity of the current session, if one is established.
    pub fn current(&self) -> Option<Identity> {
        self.rx.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.rx.borrow().is_some()
    }

    /// Subscribe to session changes.
    ///
    /// The receiver yields the value at subscription time and every change
    /// thereafter, matching the collaborator's "notify at start and on every
    /// change" contract.
    pub fn subscribe(&self) -> watch::Receiver<Option<Identity>> {
        self.rx.clone()
    }
}

/// Write side, held exclusively by the auth adapter.
#[derive(Debug)]
pub struct SessionWriter {
    tx: watch::Sender<Option<Identity>>,
}

impl SessionWriter {
    /// Publish a newly established session.
    pub fn establish(&self, identity: Identity) {
        info!(user_id = %identity.user_id, "session established");
        // send_replace never fails; the writer keeps its own receiver alive
        // through holders cloned before publication.
        let _ = self.tx.send_replace(Some(identity));
    }

    /// Publish session loss (sign-out or expiry).
    pub fn clear(&self) {
        if self.tx.send_replace(None).is_some() {
            info!("session cleared");
        }
    }

    /// A read handle onto the same session state.
    pub fn holder(&self) -> SessionHolder {
        SessionHolder { rx: self.tx.subscribe() }
    }
}
