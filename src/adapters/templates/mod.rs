//! Per-platform renderers for an [`Announcement`](crate::domain::Announcement).
//!
//! Pure string building; the platform clients and template mode both use these.

pub mod linkedin;
pub mod meetup;
pub mod slack;

pub use meetup::MeetupTemplate;
