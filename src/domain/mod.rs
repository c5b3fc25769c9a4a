//! Core domain layer. No external I/O dependencies.
//!
//! Entities, error types and the platform-neutral announcement model live here.

pub mod announcement;
pub mod entities;
pub mod errors;

pub use announcement::{Announcement, Segment};
pub use entities::{
    CreatedEvent, EventDetails, EventDraft, EventKind, LinkedInCredentials, MeetupCredentials,
    RunReport, Share, ShareOutcome, SharePlan, SlackTarget,
};
pub use errors::{ConfigError, DomainError};
