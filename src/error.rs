//! Error types for the action server

use thiserror::Error;

/// Errors raised while dispatching an action request
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("No registered action found for name '{0}'.")]
    UnknownAction(String),

    #[error("Invalid action request: {0}")]
    InvalidRequest(String),
}

/// Errors raised while loading settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type for action dispatch
pub type ActionResult<T> = Result<T, ActionError>;
