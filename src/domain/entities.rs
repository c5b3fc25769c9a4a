//! Domain entities. Pure data structures for the core business.
//!
//! No HTTP/IO types here; adapters map their wire types into these.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of the event. Changes default speaker count, validation and copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Networking/community evening: no speakers, no sponsor line.
    Social,
    /// Talk-oriented meetup: at least one speaker, optional sponsor.
    #[default]
    Speaker,
}

impl EventKind {
    /// Parse `EVENT_TYPE`. Case-insensitive; anything unknown is a speaker event.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "social" => EventKind::Social,
            _ => EventKind::Speaker,
        }
    }

    /// Speaker count used when `NUM_SPEAKERS` is absent or unparseable.
    pub fn default_speakers(self) -> u32 {
        match self {
            EventKind::Social => 0,
            EventKind::Speaker => 1,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventKind::Social => f.write_str("social"),
            EventKind::Speaker => f.write_str("speaker"),
        }
    }
}

/// Event identity, schedule, location and attribution as configured by the operator.
///
/// Empty optional inputs are normalized to `None` during loading, so `sponsor` is
/// `Some` only when a sponsor line should be printed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EventDetails {
    pub kind: EventKind,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub venue_address: String,
    pub num_speakers: u32,
    pub sponsor: Option<String>,
    pub sponsor_url: Option<String>,
}

/// Everything the scheduling platform needs to create one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    /// Fully rendered description (user text plus speaker/sponsor lines).
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
    pub venue: String,
    pub venue_address: String,
}

/// Event as returned by the scheduling platform. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEvent {
    pub id: String,
    /// Canonical public URL, synthesized from group + id when the API omits it.
    pub url: String,
}

/// Credentials for the scheduling platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetupCredentials {
    pub api_key: String,
    pub group_urlname: String,
}

/// How the Slack announcement is delivered. Webhook wins when both are configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlackTarget {
    Webhook { url: String },
    Bot { token: String, channel: String },
}

/// Credentials for the LinkedIn share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkedInCredentials {
    pub access_token: String,
    pub person_urn: String,
}

/// Resolution of one optional sharing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Share<T> {
    Enabled(T),
    /// Toggle is off.
    Disabled,
    /// Toggle is on but credentials are incomplete.
    MissingCredentials,
}

/// Which sharing steps run, decided once during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePlan {
    pub slack: Share<SlackTarget>,
    pub linkedin: Share<LinkedInCredentials>,
}

/// Result of one sharing step. Consumed only for console and log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Skipped(String),
    Succeeded,
    Failed(String),
}

impl ShareOutcome {
    /// Map a plan entry that did not run into a skip with a readable reason.
    pub fn skipped_for<T>(share: &Share<T>) -> Self {
        match share {
            Share::Disabled => ShareOutcome::Skipped("disabled".to_string()),
            Share::MissingCredentials => {
                ShareOutcome::Skipped("missing configuration".to_string())
            }
            Share::Enabled(_) => ShareOutcome::Skipped("not attempted".to_string()),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ShareOutcome::Failed(_))
    }
}

/// Summary of a completed run: the event plus both sharing outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub event: CreatedEvent,
    pub slack: ShareOutcome,
    pub linkedin: ShareOutcome,
}
