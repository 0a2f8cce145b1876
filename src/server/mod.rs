//! HTTP action server
//!
//! Speaks the dialogue host's action-server protocol: the host posts the
//! action name and tracker snapshot to `/webhook` and applies the events
//! that come back.

pub mod http;
pub mod webhook;

pub use http::{AppState, create_router};
pub use webhook::{ActionCall, ActionErrorBody, ActionResponse, ActionSummary, HealthStatus};
