//! Publish flow: validate -> create event -> share to Slack -> share to LinkedIn.
//!
//! Only validation and event creation are fatal. Sharing failures become
//! [`ShareOutcome::Failed`] and the run still completes.

use crate::adapters::templates::meetup::render_description;
use crate::domain::{
    Announcement, CreatedEvent, DomainError, EventDetails, EventDraft, RunReport, Share,
    ShareOutcome, SharePlan, SlackTarget,
};
use crate::ports::{ChatPort, EventHostPort, SocialFeedPort};
use crate::shared::config::EventConfig;
use std::sync::Arc;
use tracing::{info, warn};

pub struct PublishService {
    host: Arc<dyn EventHostPort>,
    chat: Arc<dyn ChatPort>,
    feed: Arc<dyn SocialFeedPort>,
}

impl PublishService {
    pub fn new(
        host: Arc<dyn EventHostPort>,
        chat: Arc<dyn ChatPort>,
        feed: Arc<dyn SocialFeedPort>,
    ) -> Self {
        Self { host, chat, feed }
    }

    /// Validate, then run the whole pass. An invalid config never reaches a port.
    pub async fn execute(&self, cfg: &EventConfig) -> Result<RunReport, DomainError> {
        let plan = cfg.validate()?;
        info!(title = %cfg.event.title, kind = %cfg.event.kind, "configuration validated");
        self.run(&cfg.event, &plan).await
    }

    /// Create the event, then share it according to `plan`.
    pub async fn run(
        &self,
        details: &EventDetails,
        plan: &SharePlan,
    ) -> Result<RunReport, DomainError> {
        let draft = EventDraft {
            title: details.title.clone(),
            description: render_description(&Announcement::build(details, "")),
            date: details.date.clone(),
            time: details.time.clone(),
            venue: details.venue.clone(),
            venue_address: details.venue_address.clone(),
        };

        let event = self.host.create_event(&draft).await.inspect_err(|e| {
            warn!(error = %e, "failed to create Meetup event");
        })?;
        info!(id = %event.id, url = %event.url, "Meetup event created");

        Ok(self.share(event, details, plan).await)
    }

    /// Share an event that already exists (e.g. after a failed share).
    pub async fn share_existing(
        &self,
        event_id: &str,
        cfg: &EventConfig,
    ) -> Result<RunReport, DomainError> {
        let plan = cfg.validate()?;
        let event = self.host.get_event(event_id).await?;
        info!(id = %event.id, url = %event.url, "loaded existing Meetup event");
        Ok(self.share(event, &cfg.event, &plan).await)
    }

    async fn share(
        &self,
        event: CreatedEvent,
        details: &EventDetails,
        plan: &SharePlan,
    ) -> RunReport {
        let announcement = Announcement::build(details, &event.url);
        let slack = self.share_slack(&plan.slack, &announcement).await;
        let linkedin = self.share_linkedin(plan, &announcement).await;
        info!(?slack, ?linkedin, "run complete");
        RunReport {
            event,
            slack,
            linkedin,
        }
    }

    async fn share_slack(
        &self,
        share: &Share<SlackTarget>,
        announcement: &Announcement,
    ) -> ShareOutcome {
        let result = match share {
            Share::Enabled(SlackTarget::Webhook { url }) => {
                info!("sharing to Slack via webhook");
                self.chat.post_webhook_message(url, announcement).await
            }
            Share::Enabled(SlackTarget::Bot { token, channel }) => {
                info!(channel = %channel, "sharing to Slack via bot token");
                self.chat.post_message(token, channel, announcement).await
            }
            other => {
                let outcome = ShareOutcome::skipped_for(other);
                info!(?outcome, "skipping Slack sharing");
                return outcome;
            }
        };
        outcome_of("Slack", result)
    }

    async fn share_linkedin(&self, plan: &SharePlan, announcement: &Announcement) -> ShareOutcome {
        match &plan.linkedin {
            Share::Enabled(creds) => {
                info!("sharing to LinkedIn");
                outcome_of("LinkedIn", self.feed.share_event(creds, announcement).await)
            }
            other => {
                let outcome = ShareOutcome::skipped_for(other);
                info!(?outcome, "skipping LinkedIn sharing");
                outcome
            }
        }
    }
}

fn outcome_of(platform: &str, result: Result<(), DomainError>) -> ShareOutcome {
    match result {
        Ok(()) => {
            info!(platform, "shared successfully");
            ShareOutcome::Succeeded
        }
        Err(e) => {
            warn!(platform, error = %e, "sharing failed");
            ShareOutcome::Failed(e.to_string())
        }
    }
}
