//! LinkedIn adapter. Implements SocialFeedPort via the UGC posts API.

use super::{expect_status, http_client, transport_error};
use crate::adapters::templates::linkedin::render_post;
use crate::domain::{Announcement, DomainError, LinkedInCredentials};
use crate::ports::SocialFeedPort;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

const PLATFORM: &str = "linkedin";

pub struct LinkedInAdapter {
    client: Client,
    api_url: String,
}

impl LinkedInAdapter {
    /// # Arguments
    /// * `api_url` - API base, e.g. "https://api.linkedin.com/v2"
    pub fn new(api_url: String) -> Result<Self, DomainError> {
        Ok(Self {
            client: http_client(PLATFORM)?,
            api_url,
        })
    }
}

#[derive(Serialize)]
struct ShareRequest<'a> {
    author: &'a str,
    commentary: String,
    visibility: Visibility,
    distribution: Distribution,
}

#[derive(Serialize)]
struct Visibility {
    #[serde(rename = "com.linkedin.ugc.MemberNetworkVisibility")]
    member_network_visibility: &'static str,
}

#[derive(Serialize)]
struct Distribution {
    #[serde(rename = "com.linkedin.ugc.FeedDistribution")]
    feed_distribution: &'static str,
}

#[derive(Deserialize)]
struct ShareResponse {
    #[serde(default)]
    id: String,
}

#[async_trait::async_trait]
impl SocialFeedPort for LinkedInAdapter {
    async fn share_event(
        &self,
        credentials: &LinkedInCredentials,
        announcement: &Announcement,
    ) -> Result<(), DomainError> {
        let request = ShareRequest {
            author: &credentials.person_urn,
            commentary: render_post(announcement),
            visibility: Visibility {
                member_network_visibility: "PUBLIC",
            },
            distribution: Distribution {
                feed_distribution: "MAIN_FEED",
            },
        };
        info!(author = %credentials.person_urn, "sharing event on LinkedIn");

        let res = self
            .client
            .post(format!("{}/ugcPosts", self.api_url))
            .bearer_auth(&credentials.access_token)
            .header("X-Restli-Protocol-Version", "2.0.0")
            .json(&request)
            .send()
            .await
            .map_err(|e| transport_error(PLATFORM, e))?;

        // The post id comes back in a header; some API versions also echo it in the body.
        let header_id = res
            .headers()
            .get("x-restli-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = expect_status(PLATFORM, res, StatusCode::CREATED).await?;

        let id = match serde_json::from_str::<ShareResponse>(&body) {
            Ok(r) if !r.id.is_empty() => Some(r.id),
            Ok(_) => header_id,
            Err(e) => {
                if !body.trim().is_empty() {
                    warn!(error = %e, "unexpected LinkedIn response body");
                }
                header_id
            }
        };
        info!(post_id = ?id, "LinkedIn post created");
        Ok(())
    }
}
