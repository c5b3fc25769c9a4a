//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Fatal configuration problems. Raised before any network call is made.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("MEETUP_API_KEY is required")]
    MissingMeetupApiKey,

    #[error("MEETUP_GROUP_URLNAME is required")]
    MissingMeetupGroupUrlName,

    #[error("EVENT_TITLE is required")]
    MissingEventTitle,

    #[error("EVENT_DESCRIPTION is required")]
    MissingEventDescription,

    #[error("EVENT_DATE is required")]
    MissingEventDate,

    #[error("EVENT_TIME is required")]
    MissingEventTime,

    #[error("VENUE is required")]
    MissingVenue,

    #[error("VENUE_ADDRESS is required")]
    MissingVenueAddress,

    #[error("EVENT_DATE must be in YYYY-MM-DD format")]
    InvalidDateFormat,

    #[error("EVENT_TIME must be in HH:MM format")]
    InvalidTimeFormat,

    #[error("NUM_SPEAKERS must be a positive integer for speaker events")]
    InvalidSpeakerCount,

    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Network or connection failure talking to a platform.
    #[error("{platform} request failed: {message}")]
    Transport {
        platform: &'static str,
        message: String,
    },

    /// Non-success status or application-level error flag. Carries the response body.
    #[error("{platform} API returned {detail}")]
    Response {
        platform: &'static str,
        detail: String,
    },

    #[error("{platform} serialization failed: {message}")]
    Serialization {
        platform: &'static str,
        message: String,
    },

    #[error("failed to parse date/time '{0}'")]
    InvalidSchedule(String),

    #[error("prompt failed: {0}")]
    Prompt(String),
}
