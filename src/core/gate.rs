//! Process-wide activation switch.
//!
//! The gate starts closed and lives only in memory; a restart always comes back inactive.
//! Handles are cheap clones sharing one flag, so the same gate is threaded explicitly into
//! the queue service, the status reporter and the HTTP layer.

use crate::errors::{Error, Result};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// Shared on/off flag gating every queue operation.
#[derive(Debug, Clone, Default)]
pub struct ActivationGate {
    active: Arc<AtomicBool>,
}

impl ActivationGate {
    /// Creates a closed gate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the system is currently active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Opens the gate. Activating an active system is a no-op.
    pub fn activate(&self) {
        let was_active = self.active.swap(true, Ordering::SeqCst);
        if !was_active {
            info!("System activated.");
        }
    }

    /// Closes the gate. Deactivating an inactive system is a no-op.
    pub fn deactivate(&self) {
        let was_active = self.active.swap(false, Ordering::SeqCst);
        if was_active {
            info!("System deactivated.");
        }
    }

    /// Fails with [`Error::SystemInactive`] while the gate is closed.
    pub fn ensure_active(&self) -> Result<()> {
        if self.is_active() {
            Ok(())
        } else {
            warn!("Operation rejected: system inactive");
            Err(Error::SystemInactive)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_starts_inactive() {
        let gate = ActivationGate::new();
        assert!(!gate.is_active());
        assert!(matches!(gate.ensure_active(), Err(Error::SystemInactive)));
    }

    #[test]
    fn test_activate_and_deactivate_are_idempotent() {
        let gate = ActivationGate::new();

        gate.activate();
        gate.activate();
        assert!(gate.is_active());
        assert!(gate.ensure_active().is_ok());

        gate.deactivate();
        gate.deactivate();
        assert!(!gate.is_active());
    }

    #[test]
    fn test_clones_share_state() {
        let gate = ActivationGate::new();
        let handle = gate.clone();

        handle.activate();
        assert!(gate.is_active());
    }
}
