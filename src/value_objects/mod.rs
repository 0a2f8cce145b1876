//! Value objects for the booking slot actions

use serde::{Deserialize, Serialize};

/// Slot holding the number of guests
pub const NUM_GUESTS_SLOT: &str = "num_guests";

/// Slot holding the number of rooms
pub const NUM_ROOMS_SLOT: &str = "num_rooms";

/// Slot holding the yes/no booking confirmation
pub const CONFIRM_BOOKING_SLOT: &str = "confirm_booking";

/// A slot value exactly as the host stores it
///
/// Values usually come from a language model upstream, so the
/// representation is unpredictable: `"3"`, `3`, `3.0`, `"three"` and
/// `"just me"` can all show up for the same slot.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSlotValue {
    /// Slot not yet filled (missing or `null`)
    Absent,
    /// JSON number
    Number(serde_json::Number),
    /// JSON string
    Text(String),
    /// Any other JSON value (bool, list, object)
    Other(serde_json::Value),
}

impl RawSlotValue {
    /// Whether the slot has not been filled yet
    pub fn is_absent(&self) -> bool {
        matches!(self, RawSlotValue::Absent)
    }

    /// Lowercased, trimmed text form of the value
    ///
    /// Numbers keep their JSON spelling, so `3.0` normalizes to `"3.0"`.
    /// Returns `None` for an absent value.
    pub fn normalized_text(&self) -> Option<String> {
        match self {
            RawSlotValue::Absent => None,
            RawSlotValue::Number(n) => Some(n.to_string()),
            RawSlotValue::Text(s) => Some(s.trim().to_lowercase()),
            RawSlotValue::Other(v) => Some(v.to_string().trim().to_lowercase()),
        }
    }
}

impl From<serde_json::Value> for RawSlotValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => RawSlotValue::Absent,
            serde_json::Value::Number(n) => RawSlotValue::Number(n),
            serde_json::Value::String(s) => RawSlotValue::Text(s),
            other => RawSlotValue::Other(other),
        }
    }
}

impl From<Option<&serde_json::Value>> for RawSlotValue {
    fn from(value: Option<&serde_json::Value>) -> Self {
        value.cloned().map(RawSlotValue::from).unwrap_or(RawSlotValue::Absent)
    }
}

impl From<&str> for RawSlotValue {
    fn from(value: &str) -> Self {
        RawSlotValue::Text(value.to_string())
    }
}

/// Result of reading a slot value as a count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedNumber {
    /// Nothing to parse; the slot is empty
    Absent,
    /// A well-defined non-negative integer
    Value(u64),
    /// The value was present but could not be read as a number
    Unparseable,
}

/// A user-facing message collected by the dispatcher
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BotMessage {
    /// The message text
    pub text: Option<String>,
    /// Response template to render instead of raw text
    pub template: Option<String>,
    /// Extra keyword arguments forwarded to the host
    #[serde(default)]
    pub custom: serde_json::Map<String, serde_json::Value>,
}

impl BotMessage {
    /// Create a plain text message
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            template: None,
            custom: serde_json::Map::new(),
        }
    }
}
