//! Infrastructure adapters. Implement the ports.
//!
//! HTTP clients for Meetup, Slack and LinkedIn, per-platform text renderers, console UI.
//! Map errors to DomainError.

pub mod integrations;
pub mod templates;
pub mod ui;
