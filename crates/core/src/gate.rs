//! Single-flight gate for the Idle/Syncing state machine.
//!
//! Each service owns exactly one gate; acquiring it moves the service to the
//! busy state, and the returned guard moves it back on every exit path,
//! including early returns and unwinds.

use std::sync::atomic::{AtomicBool, Ordering};

use profilekit_domain::{ProfileKitError, Result};

/// Re-entry gate with two states: idle and busy.
#[derive(Debug)]
pub struct Gate {
    busy: AtomicBool,
    /// Operation label used in `Busy` errors and logs
    label: &'static str,
}

impl Gate {
    pub fn new(label: &'static str) -> Self {
        Self { busy: AtomicBool::new(false), label }
    }

    /// Move to the busy state, or fail if an operation is already in flight.
    pub fn try_acquire(&self) -> Result<GateGuard<'_>> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(ProfileKitError::Busy(self.label.to_string()));
        }
        Ok(GateGuard { busy: &self.busy })
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases the gate when dropped.
#[derive(Debug)]
pub struct GateGuard<'a> {
    busy: &'a AtomicBool,
}

impl Drop for GateGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
