//! # Webhook Server
//!
//! HTTP surface the dialogue host calls to run custom actions.
//!
//! - `POST /webhook` runs the action named in `next_action`
//! - `GET /actions` lists registered actions
//! - `GET /health` liveness check

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::application::registry::{ActionRegistry, RegistryError};
use crate::interface::dto::{ActionCall, ActionError, ActionInfo, ActionResponse};
use crate::strings::messages;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ActionRegistry>,
}

pub fn create_router(registry: ActionRegistry) -> Router {
    let state = AppState {
        registry: Arc::new(registry),
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/actions", get(list_actions))
        .route("/webhook", post(run_action))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn list_actions(State(state): State<AppState>) -> Json<Vec<ActionInfo>> {
    Json(
        state
            .registry
            .names()
            .into_iter()
            .map(|name| ActionInfo {
                name: name.to_string(),
            })
            .collect(),
    )
}

async fn run_action(
    State(state): State<AppState>,
    Json(call): Json<ActionCall>,
) -> Result<Json<ActionResponse>, (StatusCode, Json<ActionError>)> {
    let Some(name) = call.action_name().map(str::to_string) else {
        tracing::warn!("Received action call without an action name");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ActionError {
                error: messages::NO_ACTION_NAME.to_string(),
                action_name: None,
            }),
        ));
    };

    tracing::debug!(
        version = call.version.as_deref().unwrap_or("unknown"),
        "Action call for '{}'",
        name
    );
    let tracker = call.into_tracker();
    match state.registry.run(&name, &tracker).await {
        Ok(outcome) => Ok(Json(ActionResponse::from(outcome))),
        Err(RegistryError::UnknownAction(name)) => {
            tracing::warn!("Received call for unknown action '{}'", name);
            Err((
                StatusCode::NOT_FOUND,
                Json(ActionError {
                    error: messages::unknown_action(&name),
                    action_name: Some(name),
                }),
            ))
        }
    }
}
