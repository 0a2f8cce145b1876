//! Final clean-up of the count slots before the booking summary

use tracing::debug;

use crate::events::Event;
use crate::handlers::Action;
use crate::parsing::{integer_string, parse_float};
use crate::tracker::{CollectingDispatcher, Domain, Tracker};
use crate::value_objects::{NUM_GUESTS_SLOT, NUM_ROOMS_SLOT};

/// Slots rewritten by [`FormatNumbersAction`], in emission order
const FORMATTED_SLOTS: [&str; 2] = [NUM_ROOMS_SLOT, NUM_GUESTS_SLOT];

/// Rewrites the count slots as plain integer strings (`"3.0"` becomes `"3"`)
///
/// Values that do not read as a number are left alone. Running the action
/// on already clean values changes nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FormatNumbersAction;

impl Action for FormatNumbersAction {
    fn name(&self) -> &'static str {
        "action_format_numbers"
    }

    fn run(
        &self,
        _dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
        _domain: &Domain,
    ) -> Vec<Event> {
        FORMATTED_SLOTS
            .iter()
            .filter_map(|slot| {
                let raw = tracker.get_slot(slot);
                if raw.is_absent() {
                    return None;
                }
                match parse_float(&raw) {
                    Some(value) => Some(Event::slot_set(*slot, integer_string(value))),
                    None => {
                        debug!(slot = *slot, value = ?raw, "skipping non-numeric slot");
                        None
                    }
                }
            })
            .collect()
    }
}
