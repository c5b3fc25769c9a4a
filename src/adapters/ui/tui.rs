//! Implements OperatorPort. Console templates plus an inquire prompt for the event URL.

use crate::adapters::templates::MeetupTemplate;
use crate::adapters::ui::console;
use crate::domain::DomainError;
use crate::ports::OperatorPort;
use async_trait::async_trait;
use inquire::Text;

/// TUI adapter. `prompt: false` never blocks on stdin (`--no-prompt`).
pub struct TuiOperator {
    prompt: bool,
}

impl TuiOperator {
    pub fn new(prompt: bool) -> Self {
        Self { prompt }
    }
}

#[async_trait]
impl OperatorPort for TuiOperator {
    fn show_meetup_template(&self, template: &MeetupTemplate) {
        console::print_meetup_template(template);
    }

    fn show_share_template(&self, platform: &str, text: &str) {
        console::print_share_template(platform, text);
    }

    async fn ask_event_url(&self, placeholder: &str) -> Result<Option<String>, DomainError> {
        if !self.prompt {
            return Ok(None);
        }
        Text::new("Event URL:")
            .with_placeholder(placeholder)
            .with_help_message("Paste the URL of the event you just created; leave empty to keep the placeholder")
            .prompt_skippable()
            .map_err(|e| DomainError::Prompt(e.to_string()))
    }
}
