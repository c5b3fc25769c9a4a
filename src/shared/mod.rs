//! Cross-cutting concerns: configuration and the run log.

pub mod config;
pub mod logging;
