//! Booking slot actions
//!
//! Custom actions for a conversational hotel booking flow. The dialogue host
//! owns the conversation; this crate supplies the callbacks it invokes to
//! clean up slot values before the booking summary is shown:
//! - Reading guest and room counts from noisy text ("just me", "room 2b", "3.0")
//! - Enforcing upper bounds on those counts and asking again when needed
//! - Normalizing yes/no confirmations to `"true"` / `"false"`
//! - A final formatting pass that strips fractional artifacts
//! - An end-of-session override that stays silent
//!
//! Actions are looked up by name in an [`ActionRegistry`] and can be served
//! to the host over HTTP with [`server::create_router`].

pub mod error;
pub mod events;
pub mod handlers;
pub mod parsing;
pub mod routing;
pub mod server;
pub mod settings;
pub mod tracker;
pub mod validators;
pub mod value_objects;

// Re-export main types
pub use error::{ActionError, ActionResult, ConfigError};
pub use events::Event;

pub use handlers::{
    Action, FormatNumbersAction, SessionEndAction, ValidateConfirmBookingAction,
    ValidateNumGuestsAction, ValidateNumRoomsAction,
};

pub use parsing::{WORD_NUMBERS, parse_number};
pub use routing::{ActionOutput, ActionRegistry};
pub use settings::{Settings, load_settings};
pub use tracker::{CollectingDispatcher, Domain, Tracker};
pub use validators::{
    CountRule, GUEST_COUNT, ROOM_COUNT, ValidationOutcome, validate_confirmation, validate_count,
};

pub use value_objects::{
    BotMessage, CONFIRM_BOOKING_SLOT, NUM_GUESTS_SLOT, NUM_ROOMS_SLOT, ParsedNumber,
    RawSlotValue,
};
