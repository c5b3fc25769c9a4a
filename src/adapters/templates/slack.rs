//! Slack rendering: `mrkdwn` section blocks.
//!
//! Detail segments (when/where/speakers) share one block; every other segment
//! gets its own. The same blocks back the API payload and the copy-paste text.

use crate::domain::{Announcement, EventKind, Segment};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: TextObject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub text_type: String,
    pub text: String,
}

impl Block {
    fn section(text: String) -> Self {
        Self {
            block_type: "section".to_string(),
            text: TextObject {
                text_type: "mrkdwn".to_string(),
                text,
            },
        }
    }
}

pub fn render_blocks(announcement: &Announcement) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut details: Vec<String> = Vec::new();

    for segment in &announcement.segments {
        if segment.is_detail() {
            details.push(segment_line(segment));
            continue;
        }
        if !details.is_empty() {
            blocks.push(Block::section(details.join("\n")));
            details.clear();
        }
        blocks.push(Block::section(segment_line(segment)));
    }
    if !details.is_empty() {
        blocks.push(Block::section(details.join("\n")));
    }

    blocks
}

/// Copy-paste version of the blocks.
pub fn render_text(announcement: &Announcement) -> String {
    render_blocks(announcement)
        .into_iter()
        .map(|b| b.text.text)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn segment_line(segment: &Segment) -> String {
    match segment {
        Segment::Headline {
            kind: EventKind::Social,
            title,
        } => format!("🍻 *{}*", title),
        Segment::Headline {
            kind: EventKind::Speaker,
            title,
        } => format!("🎉 *New Meetup Event: {}*", title),
        Segment::When(when) => format!("📅 *When:* {}", when),
        Segment::Where { venue, .. } => format!("📍 *Where:* {}", venue),
        Segment::Speakers { count, noun } => format!("🎤 *Speakers:* {} {}", count, noun),
        Segment::Sponsor {
            name,
            url: Some(url),
        } => format!("🏢 *Sponsored by:* <{}|{}>", url, name),
        Segment::Sponsor { name, url: None } => format!("🏢 *Sponsored by:* {}", name),
        Segment::Community => {
            "🤝 Join us for networking, great conversations, and community building!".to_string()
        }
        Segment::Register { url } => format!("🔗 *Register now:* <{}|View Event>", url),
    }
}
