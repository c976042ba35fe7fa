//! Outbound notifications to entrants.
//!
//! [`NotificationPort`] is the only seam between the queue and the outside messaging
//! provider. The queue awaits the accept/reject outcome of a single `send` and never
//! retries on its own.

mod log;
mod twilio;

pub use log::LogNotifier;
pub use twilio::TwilioNotifier;

use async_trait::async_trait;
use thiserror::Error;

/// Failure reported by a notification transport
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The request never got a response (connect error, timeout)
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-success status
    #[error("provider rejected message with status {status}: {body}")]
    Rejected {
        /// HTTP status returned by the provider
        status: u16,
        /// Response body, usually a JSON error document
        body: String,
    },
}

/// Capability to deliver a text message to a contact address.
#[async_trait]
pub trait NotificationPort: Send + Sync {
    /// Sends `message` to `contact`. Returns once the provider accepted or rejected it.
    async fn send(&self, contact: &str, message: &str) -> Result<(), NotificationError>;
}

/// Text sent when an entrant is called for the first time.
#[must_use]
pub fn call_message(name: &str) -> String {
    format!("Hello {name}, it's your turn!")
}

/// Text sent when an entrant is called again.
#[must_use]
pub fn recall_message(name: &str) -> String {
    format!("Hello {name}, we are calling you again! Please come forward.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_distinct() {
        assert_eq!(call_message("Ana"), "Hello Ana, it's your turn!");
        assert_ne!(call_message("Ana"), recall_message("Ana"));
        assert!(recall_message("Ana").contains("Ana"));
    }
}
