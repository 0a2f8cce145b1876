//! End-of-conversation override

use crate::events::Event;
use crate::handlers::Action;
use crate::tracker::{CollectingDispatcher, Domain, Tracker};

/// Replaces the host's default end-of-conversation action with one that
/// does nothing, so no closing message is sent.
#[derive(Debug, Default, Clone, Copy)]
pub struct SessionEndAction;

impl Action for SessionEndAction {
    fn name(&self) -> &'static str {
        "action_session_end"
    }

    fn run(
        &self,
        _dispatcher: &mut CollectingDispatcher,
        _tracker: &Tracker,
        _domain: &Domain,
    ) -> Vec<Event> {
        Vec::new()
    }
}
