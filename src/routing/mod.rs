//! Action dispatch by name

pub mod action_registry;

pub use action_registry::{ActionOutput, ActionRegistry};
