//! Meetup rendering: the event description and the manual-creation template.

use crate::domain::{Announcement, EventDetails, Segment};

const MEETUP_WEB_URL: &str = "https://www.meetup.com";

/// Public page of an event. Used when the API response omits `event_url`.
pub fn event_page_url(group_urlname: &str, event_id: &str) -> String {
    format!("{}/{}/events/{}/", MEETUP_WEB_URL, group_urlname, event_id)
}

/// Stand-in URL printed before the operator has created the event.
pub fn placeholder_event_url(group_urlname: Option<&str>) -> String {
    event_page_url(group_urlname.unwrap_or("your-group"), "[EVENT_ID]")
}

/// Description body: the operator's text, speaker/sponsor or community lines, sign-off.
///
/// Title, schedule and venue are structured Meetup fields, so those segments are
/// not repeated here.
pub fn render_description(announcement: &Announcement) -> String {
    let mut paragraphs = vec![announcement.description.clone()];
    for segment in &announcement.segments {
        match segment {
            Segment::Speakers { count, noun } => paragraphs.push(format!(
                "🎤 This event will feature {} amazing {} sharing their expertise!",
                count, noun
            )),
            Segment::Sponsor {
                name,
                url: Some(url),
            } => paragraphs.push(format!("Special thanks to our sponsor: {} ({})", name, url)),
            Segment::Sponsor { name, url: None } => {
                paragraphs.push(format!("Special thanks to our sponsor: {}", name))
            }
            Segment::Community => paragraphs.push(
                "🤝 Join us for networking, great conversations, and community building!"
                    .to_string(),
            ),
            _ => {}
        }
    }
    paragraphs.push("Looking forward to seeing you there! 🎉".to_string());
    paragraphs.join("\n\n")
}

/// Copy-paste fields for creating the event by hand on meetup.com.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetupTemplate {
    pub title: String,
    pub date_time: String,
    pub venue: String,
    pub address: String,
    pub description: String,
    pub event_url: String,
}

impl MeetupTemplate {
    pub fn build(details: &EventDetails, group_urlname: Option<&str>) -> Self {
        let event_url = placeholder_event_url(group_urlname);
        let announcement = Announcement::build(details, &event_url);
        Self {
            title: details.title.clone(),
            date_time: announcement.when().to_string(),
            venue: details.venue.clone(),
            address: details.venue_address.clone(),
            description: render_description(&announcement),
            event_url,
        }
    }
}
