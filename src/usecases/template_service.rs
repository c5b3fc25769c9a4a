//! Template mode: no Meetup API call, only copy-paste text for all three platforms.

use crate::adapters::templates::meetup::placeholder_event_url;
use crate::adapters::templates::{MeetupTemplate, linkedin, slack};
use crate::domain::{Announcement, DomainError};
use crate::ports::OperatorPort;
use crate::shared::config::EventConfig;
use std::sync::Arc;
use tracing::info;

pub struct TemplateService {
    operator: Arc<dyn OperatorPort>,
}

impl TemplateService {
    pub fn new(operator: Arc<dyn OperatorPort>) -> Self {
        Self { operator }
    }

    /// Validate, show the Meetup template, ask for the real URL, then show the share
    /// templates pointing at it. Returns the URL the share templates used.
    pub async fn run(&self, cfg: &EventConfig) -> Result<String, DomainError> {
        cfg.validate()?;
        let group = cfg.meetup_group_urlname.as_deref();

        let meetup = MeetupTemplate::build(&cfg.event, group);
        self.operator.show_meetup_template(&meetup);
        info!(title = %meetup.title, "Meetup template generated");

        let placeholder = placeholder_event_url(group);
        let event_url = self
            .operator
            .ask_event_url(&placeholder)
            .await?
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .unwrap_or(placeholder);
        info!(url = %event_url, "using event URL for share templates");

        let announcement = Announcement::build(&cfg.event, &event_url);
        self.operator
            .show_share_template("Slack", &slack::render_text(&announcement));
        self.operator
            .show_share_template("LinkedIn", &linkedin::render_post(&announcement));

        Ok(event_url)
    }
}
