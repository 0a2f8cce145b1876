//! Events returned to the dialogue host

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Instruction for the host, applied after the action returns
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event")]
pub enum Event {
    /// Set a slot to a new value, or clear it with `None`
    #[serde(rename = "slot")]
    SlotSet {
        name: String,
        value: Option<String>,
        /// Seconds since the epoch; filled in when the event leaves the server
        #[serde(default)]
        timestamp: Option<f64>,
    },
}

impl Event {
    /// Set `name` to `value`
    pub fn slot_set(name: impl Into<String>, value: impl Into<String>) -> Self {
        Event::SlotSet {
            name: name.into(),
            value: Some(value.into()),
            timestamp: None,
        }
    }

    /// Clear `name`, which makes the host ask for it again
    pub fn slot_reset(name: impl Into<String>) -> Self {
        Event::SlotSet {
            name: name.into(),
            value: None,
            timestamp: None,
        }
    }

    /// Stamp the event with the time it was emitted
    pub fn stamped(self, at: DateTime<Utc>) -> Self {
        let seconds = at.timestamp_millis() as f64 / 1000.0;
        match self {
            Event::SlotSet { name, value, .. } => Event::SlotSet {
                name,
                value,
                timestamp: Some(seconds),
            },
        }
    }

    /// Name of the slot the event touches
    pub fn slot_name(&self) -> &str {
        match self {
            Event::SlotSet { name, .. } => name,
        }
    }

    /// Value the event proposes for its slot
    pub fn slot_value(&self) -> Option<&str> {
        match self {
            Event::SlotSet { value, .. } => value.as_deref(),
        }
    }
}
