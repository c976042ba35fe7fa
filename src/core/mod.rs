//! Core business logic - framework-agnostic queue operations.

/// Access QR code generation
pub mod access_code;
/// Process-wide activation switch
pub mod gate;
/// Queue state machine
pub mod queue;
/// Read-only status reporting
pub mod status;
/// Ticket persistence
pub mod store;

pub use access_code::generate_access_code;
pub use gate::ActivationGate;
pub use queue::{QueueService, TicketView};
pub use status::{StatusReporter, SystemStatus};
