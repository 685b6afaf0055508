use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, error};

use crate::config::LineConfig;
use crate::plugins::traits::Notifier;
use crate::utils::error::AppError;

/// Pushes a text message to one LINE user through the Messaging API.
pub struct LineNotifier {
    client: Client,
    config: LineConfig,
}

impl LineNotifier {
    pub fn new(config: LineConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(LineNotifier { client, config })
    }

    fn create_payload(&self, message: &str) -> serde_json::Value {
        json!({
            "to": self.config.user_id,
            "messages": [
                { "type": "text", "text": message }
            ]
        })
    }
}

#[async_trait]
impl Notifier for LineNotifier {
    fn name(&self) -> &'static str {
        "LINE Notifier"
    }

    async fn send(&self, message: &str) -> Result<(), AppError> {
        let payload = self.create_payload(message);

        debug!("Pushing {} chars to LINE", message.chars().count());
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.channel_access_token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("LINE push rejected with {}: {}", status, body);
            return Err(AppError::Notification {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}
