//! Error types for the assistant server.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use command_router::GENERAL_ERROR_MSG;
use thiserror::Error;

use crate::api::VoiceCommandResponse;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    // The front end only reads `response`, so every failure speaks the
    // general error sentence.
    fn into_response(self) -> Response {
        let body = VoiceCommandResponse {
            response: GENERAL_ERROR_MSG.to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
