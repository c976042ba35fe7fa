use crate::core::gate::ActivationGate;
use serde::Serialize;

/// Snapshot of the system state exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SystemStatus {
    /// Whether the activation gate is open
    pub active: bool,
}

/// Read-only view over the activation gate. Never gated itself.
#[derive(Debug, Clone)]
pub struct StatusReporter {
    gate: ActivationGate,
}

impl StatusReporter {
    /// Creates a reporter reading from `gate`.
    #[must_use]
    pub const fn new(gate: ActivationGate) -> Self {
        Self { gate }
    }

    /// Current activation state.
    #[must_use]
    pub fn status(&self) -> SystemStatus {
        SystemStatus {
            active: self.gate.is_active(),
        }
    }
}
