//! Application settings loaded from an optional TOML file and the environment.
//!
//! Values come from three layers, later ones winning: built-in defaults, the TOML file
//! named by `CALL_QUEUE_CONFIG` (if set), and individual environment variables
//! (`PORT`, `FRONTEND_URL`, `DATABASE_URL`, `TWILIO_*`, `NOTIFY_TIMEOUT_SECS`).

use crate::config::database::DEFAULT_DATABASE_URL;
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable naming the optional TOML settings file
pub const CONFIG_PATH_VAR: &str = "CALL_QUEUE_CONFIG";

/// Runtime settings for the service
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// TCP port the HTTP API listens on
    pub port: u16,
    /// Origin of the display/registration frontend; also the base of the join URL
    pub frontend_url: String,
    /// `SeaORM` connection string
    pub database_url: String,
    /// Upper bound for a single notification request
    pub notify_timeout_secs: u64,
    /// Twilio credentials; `None` selects the logging notifier
    pub twilio: Option<TwilioSettings>,
}

/// Credentials for the Twilio SMS API
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TwilioSettings {
    /// Account SID, also the basic-auth user
    pub account_sid: String,
    /// Auth token, the basic-auth password
    pub auth_token: String,
    /// Sender phone number
    pub from_number: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: 3001,
            frontend_url: "http://localhost:3000".to_string(),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            notify_timeout_secs: 10,
            twilio: None,
        }
    }
}

impl Settings {
    /// Loads settings from the optional config file and the process environment.
    pub fn load() -> Result<Self> {
        let mut settings = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };
        settings.apply_overrides(|key| std::env::var(key).ok())?;
        info!(
            port = settings.port,
            frontend_url = %settings.frontend_url,
            sms = settings.twilio.is_some(),
            "Settings loaded"
        );
        Ok(settings)
    }

    /// Parses a TOML settings file. Missing keys fall back to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        debug!("Loading settings from {:?}", path_ref);
        let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
            message: format!("Failed to read config file {}: {e}", path_ref.display()),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Parses settings from a TOML string.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config {
            message: format!("Failed to parse settings TOML: {e}"),
        })
    }

    /// Applies variable overrides using `lookup` as the variable source.
    ///
    /// Twilio credentials are only replaced when all three variables are present.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.port = parse_number("PORT", &port)?;
        }
        if let Some(url) = lookup("FRONTEND_URL") {
            self.frontend_url = url;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database_url = url;
        }
        if let Some(secs) = lookup("NOTIFY_TIMEOUT_SECS") {
            self.notify_timeout_secs = parse_number("NOTIFY_TIMEOUT_SECS", &secs)?;
        }
        if let (Some(account_sid), Some(auth_token), Some(from_number)) = (
            lookup("TWILIO_ACCOUNT_SID"),
            lookup("TWILIO_AUTH_TOKEN"),
            lookup("TWILIO_PHONE_NUMBER"),
        ) {
            self.twilio = Some(TwilioSettings {
                account_sid,
                auth_token,
                from_number,
            });
        }
        Ok(())
    }

    /// URL encoded into the access QR code.
    #[must_use]
    pub fn join_url(&self) -> String {
        format!("{}?mode=register", self.frontend_url)
    }

    /// Timeout applied to each notification request.
    #[must_use]
    pub const fn notify_timeout(&self) -> Duration {
        Duration::from_secs(self.notify_timeout_secs)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::Config {
        message: format!("{key} must be a number, got '{value}'"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.port, 3001);
        assert!(settings.twilio.is_none());
        assert_eq!(settings.join_url(), "http://localhost:3000?mode=register");
    }

    #[test]
    fn test_parse_toml_file() {
        let toml_str = r#"
            port = 8080
            frontend_url = "https://queue.example.com"

            [twilio]
            account_sid = "AC123"
            auth_token = "secret"
            from_number = "+15550001"
        "#;

        let settings = Settings::from_toml_str(toml_str).unwrap();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.frontend_url, "https://queue.example.com");
        assert_eq!(settings.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(settings.notify_timeout_secs, 10);
        let twilio = settings.twilio.unwrap();
        assert_eq!(twilio.account_sid, "AC123");
        assert_eq!(twilio.from_number, "+15550001");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = Settings::from_toml_str("port = \"not a port\"");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = Settings::from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_env_overrides_file_values() {
        let mut settings = Settings::from_toml_str("port = 8080").unwrap();
        settings
            .apply_overrides(lookup_from(&[
                ("PORT", "9090"),
                ("FRONTEND_URL", "https://front.example.com"),
                ("NOTIFY_TIMEOUT_SECS", "3"),
            ]))
            .unwrap();

        assert_eq!(settings.port, 9090);
        assert_eq!(settings.frontend_url, "https://front.example.com");
        assert_eq!(settings.notify_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_partial_twilio_env_is_ignored() {
        let mut settings = Settings::default();
        settings
            .apply_overrides(lookup_from(&[
                ("TWILIO_ACCOUNT_SID", "AC123"),
                ("TWILIO_AUTH_TOKEN", "secret"),
            ]))
            .unwrap();
        assert!(settings.twilio.is_none());

        settings
            .apply_overrides(lookup_from(&[
                ("TWILIO_ACCOUNT_SID", "AC123"),
                ("TWILIO_AUTH_TOKEN", "secret"),
                ("TWILIO_PHONE_NUMBER", "+15550001"),
            ]))
            .unwrap();
        assert!(settings.twilio.is_some());
    }

    #[test]
    fn test_non_numeric_port_is_rejected() {
        let mut settings = Settings::default();
        let result = settings.apply_overrides(lookup_from(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
