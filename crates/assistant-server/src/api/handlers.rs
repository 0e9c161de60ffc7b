//! HTTP request handlers.

use super::types::{
    GreetingQuery, GreetingResponse, HealthResponse, VoiceCommandRequest, VoiceCommandResponse,
};
use super::AppState;
use crate::error::ApiError;
use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use command_router::wish_me;
use tracing::{info, warn};

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Answer one transcribed voice command.
pub async fn voice_command(
    State(state): State<AppState>,
    payload: Result<Json<VoiceCommandRequest>, JsonRejection>,
) -> Result<Json<VoiceCommandResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!(error = %e, "Rejected voice command body");
        ApiError::from(e)
    })?;

    info!(command = %request.command, "Received voice command");
    let response = state.router.handle(&request.command).await;

    Ok(Json(VoiceCommandResponse { response }))
}

/// Time-of-day greeting for the given or configured user.
pub async fn greeting(
    State(state): State<AppState>,
    Query(query): Query<GreetingQuery>,
) -> Json<GreetingResponse> {
    let name = query
        .name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| state.user_name.to_string());

    Json(GreetingResponse {
        greeting: wish_me(&name),
    })
}
