//! meetop: create a Meetup event once, announce it on Slack and LinkedIn. Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
