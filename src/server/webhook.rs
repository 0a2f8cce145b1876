//! Wire types for the action webhook

use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::tracker::{Domain, Tracker};
use crate::value_objects::BotMessage;

/// Request body posted by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionCall {
    /// Action to run
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: Tracker,
    #[serde(default)]
    pub domain: Domain,
    /// Host version
    #[serde(default)]
    pub version: Option<String>,
}

/// Successful action result
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionResponse {
    pub events: Vec<Event>,
    pub responses: Vec<BotMessage>,
}

/// Error body returned for a failed action call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionErrorBody {
    pub error: String,
    pub action_name: String,
}

/// Entry in `GET /actions`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionSummary {
    pub name: String,
}

/// Body of `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}
