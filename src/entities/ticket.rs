//! Ticket entity - One entrant waiting in line.
//!
//! Tickets are created on registration and never edited afterwards, except for the
//! one-way `called` flip performed by call-next. Queue order is `(created_at, id)`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ticket database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    /// Unique identifier, assigned by the store and never reused
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the entrant
    pub name: String,
    /// Notification destination (phone number)
    pub contact: String,
    /// Secondary identifier shown on the display (e.g. vehicle plate)
    pub tag: String,
    /// When the ticket was registered
    pub created_at: DateTimeUtc,
    /// Set once the entrant has been successfully called
    pub called: bool,
}

/// Tickets have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
