use crate::core::{ActivationGate, QueueService, StatusReporter};
use std::sync::Arc;

/// Shared state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    /// Queue operations
    pub queue: Arc<QueueService>,
    /// Activation gate, the same handle the queue holds
    pub gate: ActivationGate,
    /// Status reads
    pub status: StatusReporter,
    /// URL encoded into the access QR code
    pub join_url: Arc<str>,
}

impl AppState {
    /// Wires the state around an existing queue service.
    #[must_use]
    pub fn new(queue: QueueService, join_url: &str) -> Self {
        let gate = queue.gate().clone();
        Self {
            status: StatusReporter::new(gate.clone()),
            gate,
            queue: Arc::new(queue),
            join_url: Arc::from(join_url),
        }
    }
}
