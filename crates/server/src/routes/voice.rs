//! One-shot voice command endpoint
//!
//! The client does speech recognition and playback; this endpoint only turns
//! a transcript into an intent and a reply.

use axum::{Json, Router, body::Bytes, extract::State, routing::post};
use chrono::Utc;
use companion::{VoiceCommandOutcome, voice::process_voice_command};
use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;
use ts_rs::TS;

use crate::{AppState, error::ApiError};

pub const VOICE_COMMAND_FAILURE: &str = "Failed to process voice command";

#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
pub struct VoiceCommandRequest {
    #[serde(deserialize_with = "falsy_as_missing")]
    #[ts(optional)]
    pub transcript: Option<String>,
}

/// `null`, `false` and `0` count as no transcript. Any other non-string
/// value is rejected.
fn falsy_as_missing<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        Value::Null | Value::Bool(false) => Ok(None),
        Value::Number(n) if n.as_f64() == Some(0.0) => Ok(None),
        other => Err(D::Error::custom(format!(
            "transcript must be a string, got {other}"
        ))),
    }
}

impl VoiceCommandRequest {
    /// Parse a body regardless of its content type. Anything that is not a
    /// JSON object with a string or falsy `transcript` is a server-side failure.
    pub fn parse(body: &[u8]) -> Result<Self, ApiError> {
        serde_json::from_slice(body).map_err(|e| ApiError::internal(VOICE_COMMAND_FAILURE, e))
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/ai/voice-command", post(voice_command))
}

/// Classify a transcript and return the canned reply
pub async fn voice_command(
    State(_state): State<AppState>,
    body: Bytes,
) -> Result<Json<VoiceCommandOutcome>, ApiError> {
    let request = VoiceCommandRequest::parse(&body)?;
    let outcome = process_voice_command(request.transcript.as_deref(), Utc::now())?;

    tracing::info!(command = %outcome.command, "Voice command processed");
    Ok(Json(outcome))
}
