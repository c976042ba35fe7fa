/// Database configuration and connection management
pub mod database;

/// Service settings from the config file and environment variables
pub mod settings;

pub use settings::{Settings, TwilioSettings};
