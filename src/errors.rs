//! Unified error types for the call queue.
//!
//! Every fallible operation in the crate returns [`Result`]. The variants map onto the
//! failure kinds a caller has to tell apart: bad input, a closed gate, a missing ticket,
//! an empty queue and a failed notification are all surfaced separately.

use thiserror::Error;

/// Crate-wide error type
#[derive(Debug, Error)]
pub enum Error {
    /// Rejected input (empty name, contact or tag)
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// The activation gate is closed
    #[error("System is inactive. Activate it to continue.")]
    SystemInactive,

    /// The referenced ticket does not exist
    #[error("Ticket {id} not found")]
    TicketNotFound {
        /// Id that was looked up
        id: i64,
    },

    /// No waiting ticket is left to call
    #[error("No one is waiting in the queue")]
    QueueEmpty,

    /// The external notification send was rejected or failed
    #[error("Notification failed: {message}")]
    NotificationFailed {
        /// Reason reported by the notification transport
        message: String,
    },

    /// Access code could not be generated
    #[error("Encoding error: {message}")]
    Encoding {
        /// Reason reported by the encoder
        message: String,
    },

    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration problem
        message: String,
    },

    /// Storage failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O failure (config files, listener socket)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
