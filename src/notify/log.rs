use super::{NotificationError, NotificationPort};
use async_trait::async_trait;
use tracing::info;

/// Notifier that only writes the message to the log.
///
/// Used when no SMS credentials are configured, so the queue stays usable in development.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl NotificationPort for LogNotifier {
    async fn send(&self, contact: &str, message: &str) -> Result<(), NotificationError> {
        info!(contact, message, "Notification (log only)");
        Ok(())
    }
}
