//! Bounded count validation shared by the guest and room slots

use tracing::debug;

use crate::parsing::parse_number;
use crate::validators::ValidationOutcome;
use crate::value_objects::{NUM_GUESTS_SLOT, NUM_ROOMS_SLOT, ParsedNumber, RawSlotValue};

/// Limits for one count slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRule {
    /// Slot the rule applies to
    pub slot: &'static str,
    /// What is being counted, as used in messages ("guests")
    pub noun: &'static str,
    /// Largest accepted value
    pub max: u64,
}

/// At most 24 guests per booking
pub const GUEST_COUNT: CountRule = CountRule {
    slot: NUM_GUESTS_SLOT,
    noun: "guests",
    max: 24,
};

/// At most 10 rooms per booking
pub const ROOM_COUNT: CountRule = CountRule {
    slot: NUM_ROOMS_SLOT,
    noun: "rooms",
    max: 10,
};

impl CountRule {
    /// Message asking the user to repeat an unreadable count
    pub fn unparseable_message(&self) -> String {
        format!(
            "I didn't catch the number of {}. Could you tell me again as a number?",
            self.noun
        )
    }

    /// Message explaining the upper limit
    pub fn too_many_message(&self) -> String {
        format!(
            "Sorry, we can only book up to {} {} at once. How many {} do you need?",
            self.max, self.noun, self.noun
        )
    }
}

/// Validate a count slot against `rule`
///
/// Zero is accepted; there is no lower bound.
pub fn validate_count(rule: &CountRule, raw: &RawSlotValue) -> ValidationOutcome {
    match parse_number(raw) {
        ParsedNumber::Absent => ValidationOutcome::Defer,
        ParsedNumber::Unparseable => {
            debug!(slot = rule.slot, value = ?raw, "count not understood");
            ValidationOutcome::Reject(Some(rule.unparseable_message()))
        }
        ParsedNumber::Value(n) if n > rule.max => {
            debug!(slot = rule.slot, value = n, max = rule.max, "count over limit");
            ValidationOutcome::Reject(Some(rule.too_many_message()))
        }
        ParsedNumber::Value(n) => {
            debug!(slot = rule.slot, value = n, "count accepted");
            ValidationOutcome::Accept(n.to_string())
        }
    }
}
