//! Platform-neutral announcement model.
//!
//! An [`Announcement`] is an ordered list of labeled segments built once from the
//! event details. Every platform renderer consumes the same segments, so the
//! schedule, pluralization and sponsor rules live only here.

use crate::domain::{EventDetails, EventKind};
use chrono::NaiveDateTime;

const SCHEDULE_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";
const SCHEDULE_DISPLAY_FORMAT: &str = "%A, %B %-d, %Y at %-I:%M %p";

/// One labeled piece of announcement copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Headline { kind: EventKind, title: String },
    /// Human-readable schedule, or the raw `date time` when it did not parse.
    When(String),
    Where { venue: String, address: String },
    Speakers { count: u32, noun: &'static str },
    Sponsor { name: String, url: Option<String> },
    /// Networking framing for social events.
    Community,
    Register { url: String },
}

impl Segment {
    /// Schedule/location/speaker lines, which renderers group into one block.
    pub fn is_detail(&self) -> bool {
        matches!(
            self,
            Segment::When(_) | Segment::Where { .. } | Segment::Speakers { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub kind: EventKind,
    pub title: String,
    pub description: String,
    pub segments: Vec<Segment>,
}

impl Announcement {
    /// Build the segment list for `details`, pointing readers at `event_url`.
    pub fn build(details: &EventDetails, event_url: &str) -> Self {
        let mut segments = vec![
            Segment::Headline {
                kind: details.kind,
                title: details.title.clone(),
            },
            Segment::When(format_schedule(&details.date, &details.time)),
            Segment::Where {
                venue: details.venue.clone(),
                address: details.venue_address.clone(),
            },
        ];

        match details.kind {
            EventKind::Speaker => {
                segments.push(Segment::Speakers {
                    count: details.num_speakers,
                    noun: speaker_noun(details.num_speakers),
                });
                if let Some(name) = details.sponsor.as_deref().filter(|s| !s.is_empty()) {
                    segments.push(Segment::Sponsor {
                        name: name.to_string(),
                        url: details
                            .sponsor_url
                            .clone()
                            .filter(|u| !u.is_empty()),
                    });
                }
            }
            EventKind::Social => segments.push(Segment::Community),
        }

        segments.push(Segment::Register {
            url: event_url.to_string(),
        });

        Self {
            kind: details.kind,
            title: details.title.clone(),
            description: details.description.clone(),
            segments,
        }
    }

    pub fn when(&self) -> &str {
        self.segments
            .iter()
            .find_map(|s| match s {
                Segment::When(w) => Some(w.as_str()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn register_url(&self) -> &str {
        self.segments
            .iter()
            .find_map(|s| match s {
                Segment::Register { url } => Some(url.as_str()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// True when a speaker count line is part of the copy.
    pub fn has_speakers(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Speakers { .. }))
    }
}

/// Parse the discrete date and time fields as one naive (UTC) timestamp.
pub fn parse_schedule(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{} {}", date, time), SCHEDULE_INPUT_FORMAT).ok()
}

/// "Thursday, January 2, 2025 at 6:30 PM", or the raw inputs when they do not parse.
pub fn format_schedule(date: &str, time: &str) -> String {
    match parse_schedule(date, time) {
        Some(dt) => dt.format(SCHEDULE_DISPLAY_FORMAT).to_string(),
        None => format!("{} {}", date, time),
    }
}

/// Singular only for exactly one speaker.
pub fn speaker_noun(count: u32) -> &'static str {
    if count == 1 { "speaker" } else { "speakers" }
}

#[cfg(test)]
pub(crate) fn sample_details(kind: EventKind) -> EventDetails {
    EventDetails {
        kind,
        title: "Rust Night".to_string(),
        description: "Monthly gathering.".to_string(),
        date: "2025-01-02".to_string(),
        time: "18:30".to_string(),
        venue: "Hall A".to_string(),
        venue_address: "123 Main St".to_string(),
        num_speakers: kind.default_speakers(),
        sponsor: None,
        sponsor_url: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_schedule() {
        assert_eq!(
            format_schedule("2025-01-02", "18:30"),
            "Thursday, January 2, 2025 at 6:30 PM"
        );
        assert_eq!(
            format_schedule("2025-11-20", "09:05"),
            "Thursday, November 20, 2025 at 9:05 AM"
        );
    }

    #[test]
    fn test_format_schedule_falls_back_to_raw() {
        assert_eq!(format_schedule("next week", "evening"), "next week evening");
        assert_eq!(format_schedule("2025-02-30", "18:30"), "2025-02-30 18:30");
    }

    #[test]
    fn test_speaker_noun() {
        assert_eq!(speaker_noun(0), "speakers");
        assert_eq!(speaker_noun(1), "speaker");
        assert_eq!(speaker_noun(2), "speakers");
    }

    #[test]
    fn test_speaker_segments() {
        let mut details = sample_details(EventKind::Speaker);
        details.num_speakers = 3;
        details.sponsor = Some("Acme".into());
        details.sponsor_url = Some("https://acme.test".into());

        let a = Announcement::build(&details, "https://meetup.test/e/1");

        assert!(a.segments.contains(&Segment::Speakers {
            count: 3,
            noun: "speakers"
        }));
        assert!(a.segments.contains(&Segment::Sponsor {
            name: "Acme".into(),
            url: Some("https://acme.test".into())
        }));
        assert!(!a.segments.contains(&Segment::Community));
        assert_eq!(a.register_url(), "https://meetup.test/e/1");
        assert_eq!(a.when(), "Thursday, January 2, 2025 at 6:30 PM");
    }

    #[test]
    fn test_sponsor_url_without_name_is_dropped() {
        let mut details = sample_details(EventKind::Speaker);
        details.sponsor_url = Some("https://acme.test".into());

        let a = Announcement::build(&details, "u");
        assert!(
            !a.segments
                .iter()
                .any(|s| matches!(s, Segment::Sponsor { .. }))
        );
    }

    #[test]
    fn test_social_segments_omit_speakers_and_sponsor() {
        let mut details = sample_details(EventKind::Social);
        details.sponsor = Some("Acme".into());

        let a = Announcement::build(&details, "u");
        assert!(!a.has_speakers());
        assert!(
            !a.segments
                .iter()
                .any(|s| matches!(s, Segment::Sponsor { .. }))
        );
        assert!(a.segments.contains(&Segment::Community));
    }
}
