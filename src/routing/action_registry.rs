//! Dispatch table from action name to handler

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::error::{ActionError, ActionResult};
use crate::events::Event;
use crate::handlers::{
    Action, FormatNumbersAction, SessionEndAction, ValidateConfirmBookingAction,
    ValidateNumGuestsAction, ValidateNumRoomsAction,
};
use crate::tracker::{CollectingDispatcher, Domain, Tracker};
use crate::value_objects::BotMessage;

/// Everything one action run produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionOutput {
    /// Events for the host to apply, in order
    pub events: Vec<Event>,
    /// Messages for the user
    pub responses: Vec<BotMessage>,
}

/// Registered actions keyed by name
#[derive(Clone, Default)]
pub struct ActionRegistry {
    actions: HashMap<&'static str, Arc<dyn Action>>,
}

impl ActionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every booking flow action
    pub fn booking() -> Self {
        let mut registry = Self::new();
        registry.register(ValidateNumGuestsAction);
        registry.register(ValidateNumRoomsAction);
        registry.register(ValidateConfirmBookingAction);
        registry.register(FormatNumbersAction);
        registry.register(SessionEndAction);
        registry
    }

    /// Register an action under its own name
    ///
    /// A second action with the same name replaces the first.
    pub fn register<A: Action + 'static>(&mut self, action: A) {
        let name = action.name();
        if self.actions.insert(name, Arc::new(action)).is_some() {
            warn!(action = name, "replacing previously registered action");
        }
    }

    /// Whether an action with this name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Registered action names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.actions.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Run the named action against a tracker snapshot
    pub fn run(&self, name: &str, tracker: &Tracker, domain: &Domain) -> ActionResult<ActionOutput> {
        let action = self
            .actions
            .get(name)
            .ok_or_else(|| ActionError::UnknownAction(name.to_string()))?;

        let mut dispatcher = CollectingDispatcher::new();
        let events = action.run(&mut dispatcher, tracker, domain);
        debug!(
            action = name,
            sender_id = %tracker.sender_id,
            events = events.len(),
            "action completed"
        );

        Ok(ActionOutput {
            events,
            responses: dispatcher.into_messages(),
        })
    }
}

impl std::fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("actions", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_registry_names() {
        let registry = ActionRegistry::booking();

        assert_eq!(
            registry.names(),
            vec![
                "action_format_numbers",
                "action_session_end",
                "validate_confirm_booking",
                "validate_num_guests",
                "validate_num_rooms",
            ]
        );
    }

    #[test]
    fn test_unknown_action() {
        let registry = ActionRegistry::booking();
        let result = registry.run("action_unknown", &Tracker::default(), &json!({}));

        assert!(matches!(result, Err(ActionError::UnknownAction(name)) if name == "action_unknown"));
    }

    #[test]
    fn test_duplicate_registration_replaces() {
        let mut registry = ActionRegistry::new();
        registry.register(SessionEndAction);
        registry.register(SessionEndAction);

        assert_eq!(registry.names().len(), 1);
        assert!(registry.contains("action_session_end"));
    }
}
