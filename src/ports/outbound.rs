//! Outbound ports. Application calls into the three platforms.
//!
//! Implemented by adapters.

use crate::domain::{Announcement, CreatedEvent, DomainError, EventDraft, LinkedInCredentials};

/// Scheduling platform (Meetup). Creates and looks up events.
#[async_trait::async_trait]
pub trait EventHostPort: Send + Sync {
    /// Create the event. Fails on unparseable schedule, transport error or any
    /// status other than "created".
    async fn create_event(&self, draft: &EventDraft) -> Result<CreatedEvent, DomainError>;

    /// Fetch an already existing event by id.
    async fn get_event(&self, event_id: &str) -> Result<CreatedEvent, DomainError>;
}

/// Messaging platform (Slack).
#[async_trait::async_trait]
pub trait ChatPort: Send + Sync {
    /// Post through the Web API with a bot token.
    async fn post_message(
        &self,
        token: &str,
        channel: &str,
        announcement: &Announcement,
    ) -> Result<(), DomainError>;

    /// Post through a pre-shared incoming webhook. No channel in the payload.
    async fn post_webhook_message(
        &self,
        webhook_url: &str,
        announcement: &Announcement,
    ) -> Result<(), DomainError>;
}

/// Professional network (LinkedIn).
#[async_trait::async_trait]
pub trait SocialFeedPort: Send + Sync {
    /// Publish a post authored by `credentials.person_urn`.
    async fn share_event(
        &self,
        credentials: &LinkedInCredentials,
        announcement: &Announcement,
    ) -> Result<(), DomainError>;
}
