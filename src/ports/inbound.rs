//! Inbound port. Template mode talks to the operator through this.

use crate::adapters::templates::MeetupTemplate;
use crate::domain::DomainError;

/// Operator-facing side of template mode: show copy-paste text, ask for the URL.
#[async_trait::async_trait]
pub trait OperatorPort: Send + Sync {
    fn show_meetup_template(&self, template: &MeetupTemplate);

    /// `platform` is the display name ("Slack", "LinkedIn").
    fn show_share_template(&self, platform: &str, text: &str);

    /// Ask for the URL of an event the operator created by hand.
    /// `Ok(None)` means "no URL yet, keep the placeholder".
    async fn ask_event_url(&self, placeholder: &str) -> Result<Option<String>, DomainError>;
}
