//! HTTP adapters for the three platforms. Implement the outbound ports.
//!
//! Every adapter owns one `reqwest::Client` with a fixed timeout and never retries.

pub mod linkedin;
pub mod meetup;
pub mod slack;

pub use linkedin::LinkedInAdapter;
pub use meetup::MeetupAdapter;
pub use slack::SlackAdapter;

use crate::domain::DomainError;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

/// Applies to connect + request + body for every call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

fn http_client(platform: &'static str) -> Result<Client, DomainError> {
    Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .build()
        .map_err(|e| DomainError::Transport {
            platform,
            message: format!("failed to build HTTP client: {}", e),
        })
}

fn transport_error(platform: &'static str, e: reqwest::Error) -> DomainError {
    DomainError::Transport {
        platform,
        message: e.to_string(),
    }
}

fn serialization_error(platform: &'static str, e: serde_json::Error) -> DomainError {
    DomainError::Serialization {
        platform,
        message: e.to_string(),
    }
}

/// Read the body and fail unless the status is exactly `expected`.
async fn expect_status(
    platform: &'static str,
    res: Response,
    expected: StatusCode,
) -> Result<String, DomainError> {
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| transport_error(platform, e))?;
    if status != expected {
        return Err(DomainError::Response {
            platform,
            detail: format!("status {}: {}", status.as_u16(), body),
        });
    }
    Ok(body)
}
