//! Queue business logic - registration, call-next, recall, removal and reset.
//!
//! Each ticket moves `Waiting -> Called -> Removed`, with `Removed` also reachable
//! straight from `Waiting`. A ticket only becomes `Called` after its notification was
//! accepted, so a failed send leaves it waiting and first in line for the next call.

use crate::{
    core::{gate::ActivationGate, store},
    entities::ticket,
    errors::{Error, Result},
    notify::{self, NotificationPort},
};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument, warn};

/// Display-safe projection of a ticket. The contact address is deliberately absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TicketView {
    /// Ticket id
    pub id: i64,
    /// Entrant name
    pub name: String,
    /// Secondary identifier (e.g. vehicle plate)
    pub tag: String,
    /// Registration time
    pub created_at: DateTime<Utc>,
    /// Whether the entrant has been called
    pub called: bool,
}

impl From<ticket::Model> for TicketView {
    fn from(model: ticket::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            tag: model.tag,
            created_at: model.created_at,
            called: model.called,
        }
    }
}

/// Orchestrates the queue on top of the ticket store and the notification port.
pub struct QueueService {
    db: DatabaseConnection,
    gate: ActivationGate,
    notifier: Arc<dyn NotificationPort>,
    /// Serializes select-notify-mark so concurrent calls never pick the same ticket
    call_lock: Mutex<()>,
}

impl QueueService {
    /// Builds a service over the given store connection, gate and notifier.
    #[must_use]
    pub fn new(
        db: DatabaseConnection,
        gate: ActivationGate,
        notifier: Arc<dyn NotificationPort>,
    ) -> Self {
        Self {
            db,
            gate,
            notifier,
            call_lock: Mutex::new(()),
        }
    }

    /// Gate handle shared with the transport layer.
    #[must_use]
    pub const fn gate(&self) -> &ActivationGate {
        &self.gate
    }

    /// Registers a new entrant at the back of the queue.
    #[instrument(skip(self))]
    pub async fn register(&self, name: &str, contact: &str, tag: &str) -> Result<ticket::Model> {
        self.gate.ensure_active()?;
        store::insert_ticket(&self.db, name, contact, tag).await
    }

    /// Notifies the earliest waiting entrant and marks them called.
    ///
    /// The call lock is held from selection through the notification send to the
    /// `called` flip. If the send fails the ticket is left untouched.
    #[instrument(skip(self))]
    pub async fn call_next(&self) -> Result<ticket::Model> {
        let _guard = self.call_lock.lock().await;
        // Checked under the lock so a call queued behind a slow send sees a later deactivation
        self.gate.ensure_active()?;

        let mut next = store::next_uncalled(&self.db)
            .await?
            .ok_or(Error::QueueEmpty)?;

        self.notifier
            .send(&next.contact, &notify::call_message(&next.name))
            .await
            .map_err(|e| {
                warn!(id = next.id, error = %e, "Call notification failed; ticket stays waiting");
                Error::NotificationFailed {
                    message: e.to_string(),
                }
            })?;
        info!(id = next.id, name = %next.name, "Entrant notified");

        match store::mark_called(&self.db, next.id).await {
            Ok(()) => {}
            Err(Error::TicketNotFound { id }) => {
                // Removed while the send was in flight; the entrant was still notified
                warn!(id, "Ticket removed before it could be marked as called");
            }
            Err(e) => return Err(e),
        }
        next.called = true;
        Ok(next)
    }

    /// Notifies a ticket again without touching its called state.
    #[instrument(skip(self))]
    pub async fn recall(&self, id: i64) -> Result<()> {
        self.gate.ensure_active()?;
        let ticket = store::get_ticket(&self.db, id).await?;

        self.notifier
            .send(&ticket.contact, &notify::recall_message(&ticket.name))
            .await
            .map_err(|e| {
                warn!(id, error = %e, "Recall notification failed");
                Error::NotificationFailed {
                    message: e.to_string(),
                }
            })?;
        info!(id, name = %ticket.name, "Entrant notified again");
        Ok(())
    }

    /// Removes a ticket from the queue for good.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: i64) -> Result<()> {
        self.gate.ensure_active()?;
        store::delete_ticket(&self.db, id).await
    }

    /// Lists every ticket in queue order, without contact details.
    #[instrument(skip(self))]
    pub async fn list_all(&self) -> Result<Vec<TicketView>> {
        self.gate.ensure_active()?;
        let tickets = store::list_ordered(&self.db).await?;
        Ok(tickets.into_iter().map(TicketView::from).collect())
    }

    /// Deletes every ticket.
    #[instrument(skip(self))]
    pub async fn reset_all(&self) -> Result<()> {
        self.gate.ensure_active()?;
        store::clear_tickets(&self.db).await?;
        Ok(())
    }
}
