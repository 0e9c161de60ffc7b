//! Request and response bodies.

use serde::{Deserialize, Serialize};

/// Body of `POST /voice-command`.
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceCommandRequest {
    /// Transcribed command; missing means empty.
    #[serde(default)]
    pub command: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceCommandResponse {
    pub response: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Query of `GET /v1/greeting`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GreetingQuery {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GreetingResponse {
    pub greeting: String,
}
