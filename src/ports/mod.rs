//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: The application asks the operator through these
//! - Outbound: Called by application into the three platforms

pub mod inbound;
pub mod outbound;

pub use inbound::OperatorPort;
pub use outbound::{ChatPort, EventHostPort, SocialFeedPort};
