//! Slack adapter. Implements ChatPort via the Web API or an incoming webhook.

use super::{expect_status, http_client, serialization_error, transport_error};
use crate::adapters::templates::slack::{Block, render_blocks};
use crate::domain::{Announcement, DomainError};
use crate::ports::ChatPort;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const PLATFORM: &str = "slack";

pub struct SlackAdapter {
    client: Client,
    api_url: String,
}

impl SlackAdapter {
    /// # Arguments
    /// * `api_url` - Web API base, e.g. "https://slack.com/api"
    pub fn new(api_url: String) -> Result<Self, DomainError> {
        Ok(Self {
            client: http_client(PLATFORM)?,
            api_url,
        })
    }
}

#[derive(Serialize)]
struct Message<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    channel: Option<&'a str>,
    blocks: Vec<Block>,
}

#[derive(Deserialize)]
struct SlackResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    ts: Option<String>,
}

#[async_trait::async_trait]
impl ChatPort for SlackAdapter {
    async fn post_message(
        &self,
        token: &str,
        channel: &str,
        announcement: &Announcement,
    ) -> Result<(), DomainError> {
        let message = Message {
            channel: Some(channel),
            blocks: render_blocks(announcement),
        };
        info!(channel, "posting Slack message via bot token");

        let res = self
            .client
            .post(format!("{}/chat.postMessage", self.api_url))
            .bearer_auth(token)
            .json(&message)
            .send()
            .await
            .map_err(|e| transport_error(PLATFORM, e))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| transport_error(PLATFORM, e))?;

        // Slack answers 200 for most failures; `ok` is the real verdict.
        let resp: SlackResponse = match serde_json::from_str(&body) {
            Ok(r) => r,
            Err(_) if !status.is_success() => {
                return Err(DomainError::Response {
                    platform: PLATFORM,
                    detail: format!("status {}: {}", status.as_u16(), body),
                });
            }
            Err(e) => return Err(serialization_error(PLATFORM, e)),
        };
        if !resp.ok {
            return Err(DomainError::Response {
                platform: PLATFORM,
                detail: format!(
                    "error: {}",
                    resp.error.as_deref().unwrap_or("unknown_error")
                ),
            });
        }

        debug!(ts = ?resp.ts, "Slack message posted");
        Ok(())
    }

    async fn post_webhook_message(
        &self,
        webhook_url: &str,
        announcement: &Announcement,
    ) -> Result<(), DomainError> {
        let message = Message {
            channel: None,
            blocks: render_blocks(announcement),
        };
        info!("posting Slack message via webhook");

        let res = self
            .client
            .post(webhook_url)
            .json(&message)
            .send()
            .await
            .map_err(|e| transport_error(PLATFORM, e))?;

        expect_status(PLATFORM, res, StatusCode::OK).await?;
        Ok(())
    }
}
