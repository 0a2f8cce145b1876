//! Slot validation rules
//!
//! Each validator looks at one raw slot value and returns exactly one
//! [`ValidationOutcome`]. Turning outcomes into host events and messages
//! happens in [`ValidationOutcome::apply`].

pub mod confirmation;
pub mod count;

pub use confirmation::{AFFIRMATIVE_PHRASES, NEGATIVE_PHRASES, validate_confirmation};
pub use count::{CountRule, GUEST_COUNT, ROOM_COUNT, validate_count};

use crate::events::Event;
use crate::tracker::CollectingDispatcher;

/// Decision for a single slot value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Slot not filled yet; leave it to the host's own prompt
    Defer,
    /// Keep the slot with this canonical value
    Accept(String),
    /// Clear the slot so the host asks again, optionally explaining why
    Reject(Option<String>),
}

impl ValidationOutcome {
    /// Emit the outcome for `slot`
    pub fn apply(self, slot: &str, dispatcher: &mut CollectingDispatcher) -> Vec<Event> {
        match self {
            ValidationOutcome::Defer => Vec::new(),
            ValidationOutcome::Accept(value) => vec![Event::slot_set(slot, value)],
            ValidationOutcome::Reject(message) => {
                if let Some(message) = message {
                    dispatcher.utter_message(message);
                }
                vec![Event::slot_reset(slot)]
            }
        }
    }
}
