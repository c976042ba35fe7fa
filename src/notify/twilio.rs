use super::{NotificationError, NotificationPort};
use crate::config::TwilioSettings;
use crate::errors::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

const TWILIO_API_URL: &str = "https://api.twilio.com";

/// SMS notifier backed by the Twilio Messages API.
#[derive(Clone)]
pub struct TwilioNotifier {
    client: Client,
    settings: TwilioSettings,
    api_url: String,
}

impl TwilioNotifier {
    /// Creates a notifier whose requests time out after `timeout`.
    pub fn new(settings: TwilioSettings, timeout: Duration) -> Result<Self> {
        Self::with_api_url(settings, timeout, TWILIO_API_URL)
    }

    /// Creates a notifier talking to a different API host.
    pub fn with_api_url(
        settings: TwilioSettings,
        timeout: Duration,
        api_url: impl Into<String>,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Config {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            settings,
            api_url: api_url.into(),
        })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_url, self.settings.account_sid
        )
    }
}

#[async_trait]
impl NotificationPort for TwilioNotifier {
    async fn send(
        &self,
        contact: &str,
        message: &str,
    ) -> std::result::Result<(), NotificationError> {
        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.settings.account_sid, Some(&self.settings.auth_token))
            .form(&[
                ("To", contact),
                ("From", self.settings.from_number.as_str()),
                ("Body", message),
            ])
            .send()
            .await
            .map_err(|e| NotificationError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!(contact, "SMS accepted by provider");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(contact, status = status.as_u16(), "SMS rejected by provider");
        Err(NotificationError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
