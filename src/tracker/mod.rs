//! Read-only conversation snapshot and the outbound message collector

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::value_objects::{BotMessage, RawSlotValue};

/// Host domain metadata; passed through to actions untouched
pub type Domain = serde_json::Value;

/// Snapshot of the host's conversation state for one action call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tracker {
    /// Conversation identifier
    #[serde(default)]
    pub sender_id: String,
    /// Slot values keyed by slot name
    #[serde(default)]
    pub slots: HashMap<String, serde_json::Value>,
    /// Last user message as parsed by the host
    #[serde(default)]
    pub latest_message: Option<serde_json::Value>,
    /// Most recently executed action
    #[serde(default)]
    pub latest_action_name: Option<String>,
}

impl Tracker {
    /// Create an empty tracker for a conversation
    pub fn new(sender_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            ..Self::default()
        }
    }

    /// Add a slot value
    pub fn with_slot(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.slots.insert(name.into(), value);
        self
    }

    /// Current value of a slot
    pub fn get_slot(&self, name: &str) -> RawSlotValue {
        RawSlotValue::from(self.slots.get(name))
    }
}

/// Collects the messages an action wants shown to the user
#[derive(Debug, Default)]
pub struct CollectingDispatcher {
    messages: Vec<BotMessage>,
}

impl CollectingDispatcher {
    /// Create an empty dispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a plain text message
    pub fn utter_message(&mut self, text: impl Into<String>) {
        self.messages.push(BotMessage::text(text));
    }

    /// Messages queued so far
    pub fn messages(&self) -> &[BotMessage] {
        &self.messages
    }

    /// Take the queued messages
    pub fn into_messages(self) -> Vec<BotMessage> {
        self.messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_and_null_slots_are_absent() {
        let tracker = Tracker::new("user-1").with_slot("num_rooms", json!(null));

        assert!(tracker.get_slot("num_rooms").is_absent());
        assert!(tracker.get_slot("num_guests").is_absent());
    }

    #[test]
    fn test_dispatcher_keeps_message_order() {
        let mut dispatcher = CollectingDispatcher::new();
        dispatcher.utter_message("How many guests?");
        dispatcher.utter_message("How many rooms?");

        let messages = dispatcher.into_messages();
        assert_eq!(messages[0].text.as_deref(), Some("How many guests?"));
        assert_eq!(messages[1].text.as_deref(), Some("How many rooms?"));
        assert!(messages[1].template.is_none());
    }

    #[test]
    fn test_tracker_deserializes_host_payload() {
        let tracker: Tracker = serde_json::from_value(json!({
            "sender_id": "abc",
            "slots": {"num_guests": "2", "num_rooms": 1.0},
            "latest_message": {"text": "two please"},
            "events": [],
            "paused": false
        }))
        .unwrap();

        assert_eq!(tracker.sender_id, "abc");
        assert_eq!(tracker.get_slot("num_guests"), RawSlotValue::Text("2".to_string()));
        assert!(matches!(tracker.get_slot("num_rooms"), RawSlotValue::Number(_)));
    }
}
