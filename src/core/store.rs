//! Ticket storage - durable, ordered collection of tickets.
//!
//! All reads that return more than one ticket use queue order, `(created_at, id)`
//! ascending, so ties between equal timestamps are broken deterministically by id.

use crate::{
    entities::{Ticket, ticket},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Select, Set, prelude::*, sea_query::Expr};
use tracing::{debug, info};

/// Applies queue order to a ticket query.
fn in_queue_order(query: Select<Ticket>) -> Select<Ticket> {
    query
        .order_by_asc(ticket::Column::CreatedAt)
        .order_by_asc(ticket::Column::Id)
}

/// Trims `value` and rejects it if nothing is left.
fn require_field(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            message: format!("{field} is required"),
        });
    }
    Ok(trimmed.to_string())
}

/// Inserts a new, uncalled ticket stamped with the current time.
///
/// Name, contact and tag are trimmed; any of them being empty is a validation error and
/// nothing is written.
pub async fn insert_ticket<C>(db: &C, name: &str, contact: &str, tag: &str) -> Result<ticket::Model>
where
    C: ConnectionTrait,
{
    let name = require_field("name", name)?;
    let contact = require_field("contact", contact)?;
    let tag = require_field("tag", tag)?;

    let model = ticket::ActiveModel {
        name: Set(name),
        contact: Set(contact),
        tag: Set(tag),
        created_at: Set(chrono::Utc::now()),
        called: Set(false),
        ..Default::default()
    };

    let inserted = model.insert(db).await?;
    info!(id = inserted.id, name = %inserted.name, "Ticket registered");
    Ok(inserted)
}

/// Looks up a ticket by id, in any state.
pub async fn get_ticket<C>(db: &C, id: i64) -> Result<ticket::Model>
where
    C: ConnectionTrait,
{
    Ticket::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::TicketNotFound { id })
}

/// Returns every ticket in queue order.
pub async fn list_ordered<C>(db: &C) -> Result<Vec<ticket::Model>>
where
    C: ConnectionTrait,
{
    let tickets = in_queue_order(Ticket::find()).all(db).await?;
    debug!("Fetched {} tickets.", tickets.len());
    Ok(tickets)
}

/// Returns the earliest ticket that has not been called yet.
pub async fn next_uncalled<C>(db: &C) -> Result<Option<ticket::Model>>
where
    C: ConnectionTrait,
{
    in_queue_order(Ticket::find().filter(ticket::Column::Called.eq(false)))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Flips `called` to true. Calling it on an already-called ticket leaves it called.
pub async fn mark_called<C>(db: &C, id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = Ticket::update_many()
        .col_expr(ticket::Column::Called, Expr::value(true))
        .filter(ticket::Column::Id.eq(id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::TicketNotFound { id });
    }
    debug!(id, "Ticket marked as called");
    Ok(())
}

/// Permanently deletes a ticket.
pub async fn delete_ticket<C>(db: &C, id: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    let result = Ticket::delete_by_id(id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::TicketNotFound { id });
    }
    info!(id, "Ticket removed from the queue");
    Ok(())
}

/// Deletes every ticket and returns how many were removed.
pub async fn clear_tickets<C>(db: &C) -> Result<u64>
where
    C: ConnectionTrait,
{
    let result = Ticket::delete_many().exec(db).await?;
    info!(removed = result.rows_affected, "Queue reset");
    Ok(result.rows_affected)
}
