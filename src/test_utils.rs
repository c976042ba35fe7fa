//! Shared test utilities for the call queue.
//!
//! Helpers for setting up an in-memory database, creating tickets with sensible
//! defaults and observing notifications without a real SMS provider.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{ActivationGate, QueueService, store},
    entities::ticket,
    errors::Result,
    notify::{NotificationError, NotificationPort},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber once per process.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Registers a ticket for `name` with placeholder contact and tag.
pub async fn create_test_ticket(db: &DatabaseConnection, name: &str) -> Result<ticket::Model> {
    store::insert_ticket(db, name, "+5500000000", "TEST1").await
}

/// Inserts a ticket with an explicit id and timestamp, bypassing the store.
pub async fn insert_ticket_at(
    db: &DatabaseConnection,
    id: i64,
    name: &str,
    created_at: DateTime<Utc>,
) -> Result<ticket::Model> {
    let model = ticket::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        contact: Set("+5500000000".to_string()),
        tag: Set("TEST1".to_string()),
        created_at: Set(created_at),
        called: Set(false),
    };
    Ok(model.insert(db).await?)
}

/// Notifier that records every message and can be switched into failure mode.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
    failing: AtomicBool,
}

impl RecordingNotifier {
    /// Makes subsequent sends fail (`true`) or succeed (`false`).
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Successfully sent `(contact, message)` pairs, oldest first.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationPort for RecordingNotifier {
    async fn send(
        &self,
        contact: &str,
        message: &str,
    ) -> std::result::Result<(), NotificationError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(NotificationError::Transport("simulated outage".to_string()));
        }
        self.sent
            .lock()
            .unwrap()
            .push((contact.to_string(), message.to_string()));
        Ok(())
    }
}

/// Builds a queue service over a fresh database with the gate already open.
pub async fn setup_active_service() -> Result<(QueueService, Arc<RecordingNotifier>)> {
    let db = setup_test_db().await?;
    let gate = ActivationGate::new();
    gate.activate();
    let notifier = Arc::new(RecordingNotifier::default());
    let service = QueueService::new(
        db,
        gate,
        Arc::clone(&notifier) as Arc<dyn NotificationPort>,
    );
    Ok((service, notifier))
}
