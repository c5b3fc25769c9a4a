//! Application configuration. Credentials, event details, sharing toggles.
//!
//! Loading happens in two passes: the `config` crate collects raw strings into
//! [`Settings`], then [`EventConfig::from_settings`] applies defaults and the
//! combined-field shorthands. Validation is a separate step that also decides
//! which sharing targets are active.

use crate::domain::{
    ConfigError, EventDetails, EventKind, LinkedInCredentials, MeetupCredentials, Share,
    SharePlan, SlackTarget,
};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

pub const DEFAULT_MEETUP_API_URL: &str = "https://api.meetup.com";
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";
pub const DEFAULT_LINKEDIN_API_URL: &str = "https://api.linkedin.com/v2";

/// Raw values as found in the environment / config file. Keys are the lowercased
/// variable names (`EVENT_TITLE` -> `event_title`).
#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    // ─────────────────────────────────────────────────────────────────────────
    // Platform credentials
    // ─────────────────────────────────────────────────────────────────────────
    #[serde(default)]
    pub meetup_api_key: Option<String>,
    #[serde(default)]
    pub meetup_group_urlname: Option<String>,
    #[serde(default)]
    pub slack_bot_token: Option<String>,
    #[serde(default)]
    pub slack_channel: Option<String>,
    #[serde(default)]
    pub slack_webhook_url: Option<String>,
    #[serde(default)]
    pub linkedin_access_token: Option<String>,
    #[serde(default)]
    pub linkedin_person_urn: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Event details
    // ─────────────────────────────────────────────────────────────────────────
    /// `social` or `speaker` (default).
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub event_title: Option<String>,
    #[serde(default)]
    pub event_description: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub event_time: Option<String>,
    /// Shorthand: "YYYY-MM-DD HH:MM". Overrides EVENT_DATE / EVENT_TIME.
    #[serde(default)]
    pub event_datetime: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub venue_address: Option<String>,
    /// Shorthand: "Venue | Address". Overrides VENUE / VENUE_ADDRESS.
    #[serde(default)]
    pub venue_info: Option<String>,
    #[serde(default)]
    pub num_speakers: Option<String>,
    #[serde(default)]
    pub sponsor: Option<String>,
    #[serde(default)]
    pub sponsor_url: Option<String>,

    // ─────────────────────────────────────────────────────────────────────────
    // Sharing toggles and endpoints
    // ─────────────────────────────────────────────────────────────────────────
    #[serde(default)]
    pub share_slack: Option<String>,
    #[serde(default)]
    pub share_linkedin: Option<String>,
    #[serde(default)]
    pub meetup_api_url: Option<String>,
    #[serde(default)]
    pub slack_api_url: Option<String>,
    #[serde(default)]
    pub linkedin_api_url: Option<String>,
}

/// Immutable, defaulted configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventConfig {
    pub event: EventDetails,

    pub meetup_api_key: Option<String>,
    pub meetup_group_urlname: Option<String>,
    pub slack_bot_token: Option<String>,
    pub slack_channel: Option<String>,
    pub slack_webhook_url: Option<String>,
    pub linkedin_access_token: Option<String>,
    pub linkedin_person_urn: Option<String>,

    pub share_slack: bool,
    pub share_linkedin: bool,

    pub meetup_api_url: String,
    pub slack_api_url: String,
    pub linkedin_api_url: String,
}

impl EventConfig {
    /// Load from `.env`, the optional `MEETOP_CONFIG` file and the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("MEETOP_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::default());
        let settings: Settings = c.build()?.try_deserialize()?;
        Ok(Self::from_settings(settings))
    }

    /// Load from an explicit variable map instead of the process environment.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map: config::Map<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        let settings: Settings = config::Config::builder()
            .add_source(config::Environment::default().source(Some(map)))
            .build()?
            .try_deserialize()?;
        Ok(Self::from_settings(settings))
    }

    /// Defaulting pass. Pure: the same settings always give the same config.
    pub fn from_settings(s: Settings) -> Self {
        let kind = non_empty(s.event_type)
            .map(|t| EventKind::parse(&t))
            .unwrap_or_default();

        let num_speakers = non_empty(s.num_speakers)
            .and_then(|n| n.trim().parse::<i64>().ok())
            // Negative counts clamp to 0 so speaker events fail validation instead of
            // silently picking up the default.
            .map(|n| u32::try_from(n.max(0)).unwrap_or(u32::MAX))
            .unwrap_or_else(|| kind.default_speakers());

        let mut date = non_empty(s.event_date).unwrap_or_default();
        let mut time = non_empty(s.event_time).unwrap_or_default();
        if let Some((d, t)) = non_empty(s.event_datetime)
            .as_deref()
            .and_then(split_datetime)
        {
            date = d;
            time = t;
        }

        let mut venue = non_empty(s.venue).unwrap_or_default();
        let mut venue_address = non_empty(s.venue_address).unwrap_or_default();
        if let Some(info) = non_empty(s.venue_info) {
            let (v, a) = split_venue_info(&info);
            venue = v;
            venue_address = a;
        }

        Self {
            event: EventDetails {
                kind,
                title: non_empty(s.event_title).unwrap_or_default(),
                description: non_empty(s.event_description).unwrap_or_default(),
                date,
                time,
                venue,
                venue_address,
                num_speakers,
                sponsor: non_empty(s.sponsor),
                sponsor_url: non_empty(s.sponsor_url),
            },
            meetup_api_key: non_empty(s.meetup_api_key),
            meetup_group_urlname: non_empty(s.meetup_group_urlname),
            slack_bot_token: non_empty(s.slack_bot_token),
            slack_channel: non_empty(s.slack_channel),
            slack_webhook_url: non_empty(s.slack_webhook_url),
            linkedin_access_token: non_empty(s.linkedin_access_token),
            linkedin_person_urn: non_empty(s.linkedin_person_urn),
            share_slack: parse_toggle(s.share_slack),
            share_linkedin: parse_toggle(s.share_linkedin),
            meetup_api_url: base_url_or_default(s.meetup_api_url, DEFAULT_MEETUP_API_URL),
            slack_api_url: base_url_or_default(s.slack_api_url, DEFAULT_SLACK_API_URL),
            linkedin_api_url: base_url_or_default(s.linkedin_api_url, DEFAULT_LINKEDIN_API_URL),
        }
    }

    /// Check required event fields and formats, stopping at the first failure, then
    /// resolve which sharing steps will run.
    pub fn validate(&self) -> Result<SharePlan, ConfigError> {
        let e = &self.event;
        let required = [
            (&e.title, ConfigError::MissingEventTitle),
            (&e.description, ConfigError::MissingEventDescription),
            (&e.date, ConfigError::MissingEventDate),
            (&e.time, ConfigError::MissingEventTime),
            (&e.venue, ConfigError::MissingVenue),
            (&e.venue_address, ConfigError::MissingVenueAddress),
        ];
        for (value, err) in required {
            if value.trim().is_empty() {
                return Err(err);
            }
        }

        if !is_valid_date(&e.date) {
            return Err(ConfigError::InvalidDateFormat);
        }
        if !is_valid_time(&e.time) {
            return Err(ConfigError::InvalidTimeFormat);
        }
        if e.kind == EventKind::Speaker && e.num_speakers == 0 {
            return Err(ConfigError::InvalidSpeakerCount);
        }

        Ok(self.share_plan())
    }

    /// Meetup credentials, required by every mode that talks to the Meetup API.
    pub fn meetup_credentials(&self) -> Result<MeetupCredentials, ConfigError> {
        let api_key = self
            .meetup_api_key
            .clone()
            .ok_or(ConfigError::MissingMeetupApiKey)?;
        let group_urlname = self
            .meetup_group_urlname
            .clone()
            .ok_or(ConfigError::MissingMeetupGroupUrlName)?;
        Ok(MeetupCredentials {
            api_key,
            group_urlname,
        })
    }

    fn share_plan(&self) -> SharePlan {
        let slack = if !self.share_slack {
            Share::Disabled
        } else if let Some(url) = &self.slack_webhook_url {
            Share::Enabled(SlackTarget::Webhook { url: url.clone() })
        } else {
            match (&self.slack_bot_token, &self.slack_channel) {
                (Some(token), Some(channel)) => Share::Enabled(SlackTarget::Bot {
                    token: token.clone(),
                    channel: channel.clone(),
                }),
                _ => Share::MissingCredentials,
            }
        };

        let linkedin = if !self.share_linkedin {
            Share::Disabled
        } else {
            match (&self.linkedin_access_token, &self.linkedin_person_urn) {
                (Some(token), Some(urn)) => Share::Enabled(LinkedInCredentials {
                    access_token: token.clone(),
                    person_urn: urn.clone(),
                }),
                _ => Share::MissingCredentials,
            }
        };

        SharePlan { slack, linkedin }
    }
}

/// Empty and whitespace-only values count as unset.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// `"2025-01-02 18:30"` -> date and time. Anything other than two parts is ignored.
fn split_datetime(raw: &str) -> Option<(String, String)> {
    let mut parts = raw.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(d), Some(t), None) => Some((d.to_string(), t.to_string())),
        _ => None,
    }
}

/// `"Hall A | 123 Main St"` -> venue and address. Without a `|` the whole value is the venue.
fn split_venue_info(raw: &str) -> (String, String) {
    match raw.split_once('|') {
        Some((venue, address)) => (venue.trim().to_string(), address.trim().to_string()),
        None => (raw.trim().to_string(), String::new()),
    }
}

/// Unset means enabled. Unparseable means disabled (fail-safe).
fn parse_toggle(value: Option<String>) -> bool {
    match non_empty(value) {
        None => true,
        Some(v) => matches!(v.trim(), "1" | "t" | "T" | "TRUE" | "true" | "True"),
    }
}

fn base_url_or_default(value: Option<String>, default: &str) -> String {
    non_empty(value)
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

/// Strict `YYYY-MM-DD`: 4-2-2 digits and a real calendar date.
fn is_valid_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit())
        && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Strict 24-hour `HH:MM`.
fn is_valid_time(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 5
        && b[2] == b':'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 2 || c.is_ascii_digit())
        && NaiveTime::parse_from_str(s, "%H:%M").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("EVENT_TITLE", "Rust Night"),
            ("EVENT_DESCRIPTION", "Monthly gathering."),
            ("EVENT_DATE", "2025-01-02"),
            ("EVENT_TIME", "18:30"),
            ("VENUE", "Hall A"),
            ("VENUE_ADDRESS", "123 Main St"),
        ]
    }

    fn with(extra: &[(&'static str, &'static str)]) -> EventConfig {
        let mut vars = base_vars();
        vars.retain(|(k, _)| !extra.iter().any(|(ek, _)| ek == k));
        vars.extend_from_slice(extra);
        EventConfig::from_vars(vars).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = with(&[]);
        assert_eq!(cfg.event.kind, EventKind::Speaker);
        assert_eq!(cfg.event.num_speakers, 1);
        assert!(cfg.share_slack);
        assert!(cfg.share_linkedin);
        assert_eq!(cfg.meetup_api_url, DEFAULT_MEETUP_API_URL);
        assert_eq!(cfg.event.sponsor, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_social_defaults_to_zero_speakers() {
        let cfg = with(&[("EVENT_TYPE", "social")]);
        assert_eq!(cfg.event.kind, EventKind::Social);
        assert_eq!(cfg.event.num_speakers, 0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_unparseable_speaker_count_uses_kind_default() {
        assert_eq!(with(&[("NUM_SPEAKERS", "many")]).event.num_speakers, 1);
        assert_eq!(
            with(&[("NUM_SPEAKERS", "many"), ("EVENT_TYPE", "social")])
                .event
                .num_speakers,
            0
        );
    }

    #[test]
    fn test_speaker_event_requires_positive_count() {
        let cfg = with(&[("NUM_SPEAKERS", "0")]);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidSpeakerCount)
        ));
        let cfg = with(&[("NUM_SPEAKERS", "-2")]);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InvalidSpeakerCount)
        ));
    }

    #[test]
    fn test_missing_fields_report_specific_error() {
        let cases: [(&str, fn(&ConfigError) -> bool); 6] = [
            ("EVENT_TITLE", |e| matches!(e, ConfigError::MissingEventTitle)),
            ("EVENT_DESCRIPTION", |e| {
                matches!(e, ConfigError::MissingEventDescription)
            }),
            ("EVENT_DATE", |e| matches!(e, ConfigError::MissingEventDate)),
            ("EVENT_TIME", |e| matches!(e, ConfigError::MissingEventTime)),
            ("VENUE", |e| matches!(e, ConfigError::MissingVenue)),
            ("VENUE_ADDRESS", |e| {
                matches!(e, ConfigError::MissingVenueAddress)
            }),
        ];
        for (key, is_expected) in cases {
            let mut vars = base_vars();
            vars.retain(|(k, _)| *k != key);
            let cfg = EventConfig::from_vars(vars).unwrap();
            let err = cfg.validate().unwrap_err();
            assert!(is_expected(&err), "{key}: got {err}");
        }
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let cfg = with(&[("EVENT_TITLE", "   ")]);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::MissingEventTitle)
        ));
    }

    #[test]
    fn test_date_formats() {
        for good in ["2025-01-02", "2024-02-29", "1999-12-31"] {
            assert!(with(&[("EVENT_DATE", good)]).validate().is_ok(), "{good}");
        }
        for bad in [
            "2025/01/02",
            "2025-1-2",
            "25-01-02",
            "2025-13-01",
            "2025-02-30",
            "2025-01-02T",
            "02-01-2025",
        ] {
            assert!(
                matches!(
                    with(&[("EVENT_DATE", bad)]).validate(),
                    Err(ConfigError::InvalidDateFormat)
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_time_formats() {
        for good in ["00:00", "09:05", "18:30", "23:59"] {
            assert!(with(&[("EVENT_TIME", good)]).validate().is_ok(), "{good}");
        }
        for bad in ["18.30", "6:30", "24:00", "12:60", "18:30:00", "6pm", "1830"] {
            assert!(
                matches!(
                    with(&[("EVENT_TIME", bad)]).validate(),
                    Err(ConfigError::InvalidTimeFormat)
                ),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_datetime_shorthand_matches_discrete_fields() {
        let discrete = with(&[]);
        let mut vars = base_vars();
        vars.retain(|(k, _)| *k != "EVENT_DATE" && *k != "EVENT_TIME");
        vars.push(("EVENT_DATETIME", "2025-01-02 18:30"));
        let combined = EventConfig::from_vars(vars).unwrap();

        assert_eq!(combined.event.date, discrete.event.date);
        assert_eq!(combined.event.time, discrete.event.time);
        assert!(combined.validate().is_ok());
    }

    #[test]
    fn test_datetime_shorthand_overrides_and_ignores_garbage() {
        let cfg = with(&[("EVENT_DATETIME", "2025-03-04 07:15")]);
        assert_eq!(cfg.event.date, "2025-03-04");
        assert_eq!(cfg.event.time, "07:15");

        let cfg = with(&[("EVENT_DATETIME", "tomorrow")]);
        assert_eq!(cfg.event.date, "2025-01-02");
        assert_eq!(cfg.event.time, "18:30");
    }

    #[test]
    fn test_venue_info_shorthand() {
        let cfg = with(&[("VENUE_INFO", "Hall B | 9 Side Rd")]);
        assert_eq!(cfg.event.venue, "Hall B");
        assert_eq!(cfg.event.venue_address, "9 Side Rd");

        let cfg = with(&[("VENUE_INFO", "Hall B")]);
        assert_eq!(cfg.event.venue, "Hall B");
        assert_eq!(cfg.event.venue_address, "");
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::MissingVenueAddress)
        ));
    }

    #[test]
    fn test_share_toggles() {
        let cfg = with(&[("SHARE_SLACK", "false"), ("SHARE_LINKEDIN", "1")]);
        assert!(!cfg.share_slack);
        assert!(cfg.share_linkedin);

        let cfg = with(&[("SHARE_SLACK", "yes")]);
        assert!(!cfg.share_slack, "unparseable toggle is disabled");
    }

    #[test]
    fn test_share_plan_prefers_webhook() {
        let cfg = with(&[
            ("SLACK_WEBHOOK_URL", "https://hooks.slack.test/x"),
            ("SLACK_BOT_TOKEN", "xoxb"),
            ("SLACK_CHANNEL", "#events"),
        ]);
        let plan = cfg.validate().unwrap();
        assert_eq!(
            plan.slack,
            Share::Enabled(SlackTarget::Webhook {
                url: "https://hooks.slack.test/x".into()
            })
        );
    }

    #[test]
    fn test_share_plan_bot_and_missing() {
        let cfg = with(&[("SLACK_BOT_TOKEN", "xoxb"), ("SLACK_CHANNEL", "#events")]);
        assert_eq!(
            cfg.validate().unwrap().slack,
            Share::Enabled(SlackTarget::Bot {
                token: "xoxb".into(),
                channel: "#events".into()
            })
        );

        let cfg = with(&[("SLACK_BOT_TOKEN", "xoxb")]);
        let plan = cfg.validate().unwrap();
        assert_eq!(plan.slack, Share::MissingCredentials);
        assert_eq!(plan.linkedin, Share::MissingCredentials);

        let cfg = with(&[("SHARE_LINKEDIN", "false")]);
        assert_eq!(cfg.validate().unwrap().linkedin, Share::Disabled);
    }

    #[test]
    fn test_meetup_credentials() {
        let cfg = with(&[]);
        assert!(matches!(
            cfg.meetup_credentials(),
            Err(ConfigError::MissingMeetupApiKey)
        ));
        let cfg = with(&[("MEETUP_API_KEY", "k")]);
        assert!(matches!(
            cfg.meetup_credentials(),
            Err(ConfigError::MissingMeetupGroupUrlName)
        ));
        let cfg = with(&[("MEETUP_API_KEY", "k"), ("MEETUP_GROUP_URLNAME", "rust-city")]);
        assert_eq!(cfg.meetup_credentials().unwrap().group_urlname, "rust-city");
    }

    #[test]
    fn test_api_url_trailing_slash_trimmed() {
        let cfg = with(&[("SLACK_API_URL", "http://127.0.0.1:9000/api/")]);
        assert_eq!(cfg.slack_api_url, "http://127.0.0.1:9000/api");
    }
}
