//! HTTP endpoints

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::error::ActionError;
use crate::routing::ActionRegistry;
use crate::server::webhook::{
    ActionCall, ActionErrorBody, ActionResponse, ActionSummary, HealthStatus,
};

/// Shared server state
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: Arc<ActionRegistry>,
}

impl AppState {
    pub fn new(registry: ActionRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

/// Build the action server router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", post(run_action))
        .route("/actions", get(list_actions))
        .route("/health", get(health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Failed action call, rendered as the host expects
struct ActionFailure {
    action_name: String,
    error: ActionError,
}

impl IntoResponse for ActionFailure {
    fn into_response(self) -> Response {
        let status = match self.error {
            ActionError::UnknownAction(_) => StatusCode::NOT_FOUND,
            ActionError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };
        let body = ActionErrorBody {
            error: self.error.to_string(),
            action_name: self.action_name,
        };
        (status, Json(body)).into_response()
    }
}

async fn run_action(
    State(state): State<AppState>,
    Json(call): Json<ActionCall>,
) -> Result<Json<ActionResponse>, ActionFailure> {
    let action_name = call.next_action.trim().to_string();
    if action_name.is_empty() {
        return Err(ActionFailure {
            action_name,
            error: ActionError::InvalidRequest("`next_action` is empty".to_string()),
        });
    }

    let output = state
        .registry
        .run(&action_name, &call.tracker, &call.domain)
        .map_err(|error| {
            warn!(action = %action_name, error = %error, "action call failed");
            ActionFailure {
                action_name: action_name.clone(),
                error,
            }
        })?;

    let now = Utc::now();
    Ok(Json(ActionResponse {
        events: output.events.into_iter().map(|e| e.stamped(now)).collect(),
        responses: output.responses,
    }))
}

async fn list_actions(State(state): State<AppState>) -> Json<Vec<ActionSummary>> {
    Json(
        state
            .registry
            .names()
            .into_iter()
            .map(|name| ActionSummary {
                name: name.to_string(),
            })
            .collect(),
    )
}

async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}
