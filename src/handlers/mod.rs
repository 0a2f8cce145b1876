//! Booking action handlers
//!
//! Every handler implements [`Action`]: a fixed name the host refers to it
//! by, and a `run` that reads the tracker snapshot and returns the events
//! to apply.

pub mod format_numbers;
pub mod session_end;
pub mod slot_validation;

pub use format_numbers::FormatNumbersAction;
pub use session_end::SessionEndAction;
pub use slot_validation::{
    ValidateConfirmBookingAction, ValidateNumGuestsAction, ValidateNumRoomsAction,
};

use crate::events::Event;
use crate::tracker::{CollectingDispatcher, Domain, Tracker};

/// A custom action the dialogue host can invoke by name
pub trait Action: Send + Sync {
    /// Name the host uses to call this action
    fn name(&self) -> &'static str;

    /// Run the action against one tracker snapshot
    fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
        domain: &Domain,
    ) -> Vec<Event>;
}
