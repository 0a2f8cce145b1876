//! Per-slot validation actions

use crate::events::Event;
use crate::handlers::Action;
use crate::tracker::{CollectingDispatcher, Domain, Tracker};
use crate::validators::{GUEST_COUNT, ROOM_COUNT, validate_confirmation, validate_count};
use crate::value_objects::CONFIRM_BOOKING_SLOT;

/// Validates `num_guests` (at most 24)
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateNumGuestsAction;

impl Action for ValidateNumGuestsAction {
    fn name(&self) -> &'static str {
        "validate_num_guests"
    }

    fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
        _domain: &Domain,
    ) -> Vec<Event> {
        let raw = tracker.get_slot(GUEST_COUNT.slot);
        validate_count(&GUEST_COUNT, &raw).apply(GUEST_COUNT.slot, dispatcher)
    }
}

/// Validates `num_rooms` (at most 10)
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateNumRoomsAction;

impl Action for ValidateNumRoomsAction {
    fn name(&self) -> &'static str {
        "validate_num_rooms"
    }

    fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
        _domain: &Domain,
    ) -> Vec<Event> {
        let raw = tracker.get_slot(ROOM_COUNT.slot);
        validate_count(&ROOM_COUNT, &raw).apply(ROOM_COUNT.slot, dispatcher)
    }
}

/// Normalizes `confirm_booking` to `"true"` / `"false"`
#[derive(Debug, Default, Clone, Copy)]
pub struct ValidateConfirmBookingAction;

impl Action for ValidateConfirmBookingAction {
    fn name(&self) -> &'static str {
        "validate_confirm_booking"
    }

    fn run(
        &self,
        dispatcher: &mut CollectingDispatcher,
        tracker: &Tracker,
        _domain: &Domain,
    ) -> Vec<Event> {
        let raw = tracker.get_slot(CONFIRM_BOOKING_SLOT);
        validate_confirmation(&raw).apply(CONFIRM_BOOKING_SLOT, dispatcher)
    }
}
