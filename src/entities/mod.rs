//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod ticket;

pub use ticket::{Entity as Ticket, Model as TicketModel};
