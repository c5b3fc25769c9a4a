//! LinkedIn rendering: long-form prose post with hashtags.

use crate::domain::{Announcement, EventKind, Segment};

const SPEAKER_HASHTAGS: &str = "#meetup #tech #community #networking #speakers #learning";
const SOCIAL_HASHTAGS: &str = "#meetup #social #community #networking";

pub fn render_post(announcement: &Announcement) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut details: Vec<String> = Vec::new();

    for segment in &announcement.segments {
        if segment.is_detail() {
            details.push(segment_line(segment));
            continue;
        }
        if !details.is_empty() {
            paragraphs.push(details.join("\n"));
            details.clear();
        }
        paragraphs.push(segment_line(segment));
    }
    if !details.is_empty() {
        paragraphs.push(details.join("\n"));
    }

    paragraphs.push(
        match announcement.kind {
            EventKind::Social => SOCIAL_HASHTAGS,
            EventKind::Speaker => SPEAKER_HASHTAGS,
        }
        .to_string(),
    );

    paragraphs.join("\n\n")
}

fn segment_line(segment: &Segment) -> String {
    match segment {
        Segment::Headline {
            kind: EventKind::Social,
            title,
        } => format!(
            "🍻 Excited to invite everyone to our upcoming social meetup: {}",
            title
        ),
        Segment::Headline {
            kind: EventKind::Speaker,
            title,
        } => format!("🎉 Excited to announce our upcoming meetup: {}", title),
        Segment::When(when) => format!("📅 Date & Time: {}", when),
        Segment::Where { venue, .. } => format!("📍 Location: {}", venue),
        Segment::Speakers { count, noun } => format!("🎤 Featuring {} amazing {}", count, noun),
        Segment::Sponsor {
            name,
            url: Some(url),
        } => format!("Special thanks to our sponsor: {} ({})", name, url),
        Segment::Sponsor { name, url: None } => {
            format!("Special thanks to our sponsor: {}", name)
        }
        Segment::Community => "🤝 Perfect opportunity for networking, meaningful conversations, \
             and connecting with like-minded professionals in our community!"
            .to_string(),
        Segment::Register { url } => format!("Don't miss out! Register now: {}", url),
    }
}
