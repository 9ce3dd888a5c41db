//! Per-traveller sessions
//!
//! A session carries the guided voice dialog plus the seeded sign and
//! sound-alert feeds that the visual-first interface polls.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use chrono::Utc;
use companion::{
    InterfaceMode, PendingField, SessionTurn, SignDetection, SoundAlert,
    voice::SessionSnapshot,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::{AppState, error::ApiError, routes::voice::VoiceCommandRequest};

pub const SESSION_FAILURE: &str = "Failed to process session request";

#[derive(Debug, Default, Deserialize, TS)]
#[serde(default)]
pub struct CreateSessionRequest {
    pub mode: InterfaceMode,
    /// Fixes the random feeds, for reproducible demos and fixtures
    #[ts(optional)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
pub struct SessionCreated {
    pub id: Uuid,
    pub welcome: String,
    pub speaks_replies: bool,
    pub shows_visual_feeds: bool,
    pub session: SessionSnapshot,
}

#[derive(Debug, Deserialize, TS)]
pub struct RequestFieldBody {
    pub field: PendingField,
}

#[derive(Debug, Serialize, TS)]
pub struct SignPollResponse {
    pub detection: Option<SignDetection>,
    pub recent: Vec<SignDetection>,
}

#[derive(Debug, Serialize, TS)]
pub struct AlertResponse {
    pub alert: SoundAlert,
    pub recent: Vec<SoundAlert>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{id}", get(get_session).delete(close_session))
        .route("/sessions/{id}/voice", post(session_voice))
        .route("/sessions/{id}/field", post(request_field))
        .route("/sessions/{id}/navigation/stop", post(stop_navigation))
        .route("/sessions/{id}/signs/poll", post(poll_signs))
        .route("/sessions/{id}/alerts/next", post(next_alert))
}

fn parse_body<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: for<'de> Deserialize<'de> + Default,
{
    if body.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::internal(SESSION_FAILURE, e))
}

pub async fn create_session(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<SessionCreated>), ApiError> {
    let request: CreateSessionRequest = parse_body(&body)?;
    let sessions = state.sessions();
    let id = sessions.create(request.mode, request.seed, Utc::now())?;

    let session = sessions.with_session(id, |s| s.snapshot())?;
    let mode = request.mode;
    Ok((
        StatusCode::CREATED,
        Json(SessionCreated {
            id,
            welcome: mode.welcome_message().to_string(),
            speaks_replies: mode.speaks_replies(),
            shows_visual_feeds: mode.shows_visual_feeds(),
            session,
        }),
    ))
}

pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshot>, ApiError> {
    let snapshot = state.sessions().with_session(id, |s| s.snapshot())?;
    Ok(Json(snapshot))
}

pub async fn close_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.sessions().remove(id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// One turn of the guided dialog
pub async fn session_voice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<SessionTurn>, ApiError> {
    let request: VoiceCommandRequest = parse_body(&body)?;
    let transcript = request.transcript.unwrap_or_default();

    let turn = state
        .sessions()
        .with_session(id, |s| s.handle_transcript(&transcript))??;

    tracing::debug!(session_id = %id, intent = ?turn.intent, "Session turn");
    Ok(Json(turn))
}

pub async fn request_field(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Bytes,
) -> Result<Json<SessionTurn>, ApiError> {
    let request: RequestFieldBody = serde_json::from_slice(&body)
        .map_err(|_| ApiError::BadRequest("Field must be \"from\" or \"to\"".to_string()))?;
    let turn = state
        .sessions()
        .with_session(id, |s| s.request_field(request.field))?;
    Ok(Json(turn))
}

pub async fn stop_navigation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionTurn>, ApiError> {
    let turn = state.sessions().with_session(id, |s| s.stop_navigation())?;
    Ok(Json(turn))
}

pub async fn poll_signs(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SignPollResponse>, ApiError> {
    let now = Utc::now();
    let response = state.sessions().with_session(id, |s| SignPollResponse {
        detection: s.poll_signs(now),
        recent: s.recent_signs(),
    })?;
    Ok(Json(response))
}

pub async fn next_alert(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AlertResponse>, ApiError> {
    let now = Utc::now();
    let response = state.sessions().with_session(id, |s| AlertResponse {
        alert: s.next_alert(now),
        recent: s.recent_alerts(),
    })?;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };

    use crate::routes::test_helpers::*;

    async fn open(app: &axum::Router, body: &str) -> String {
        let (status, created) = send(app, post_json("/api/sessions", body)).await;
        assert_eq!(status, StatusCode::CREATED);
        created["id"].as_str().unwrap().to_string()
    }

    async fn say(app: &axum::Router, id: &str, transcript: &str) -> serde_json::Value {
        let body = serde_json::json!({ "transcript": transcript }).to_string();
        let (status, turn) = send(app, post_json(&format!("/api/sessions/{id}/voice"), &body)).await;
        assert_eq!(status, StatusCode::OK);
        turn
    }

    #[tokio::test]
    async fn test_create_session_reports_mode() {
        let app = test_app();
        let (status, created) =
            send(&app, post_json("/api/sessions", r#"{"mode":"blind"}"#)).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["session"]["mode"], "blind");
        assert_eq!(created["speaksReplies"], true);
        assert_eq!(created["showsVisualFeeds"], false);
        assert!(created["welcome"].as_str().unwrap().starts_with("Welcome"));
    }

    #[tokio::test]
    async fn test_empty_body_creates_standard_session() {
        let app = test_app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/sessions")
            .body(Body::empty())
            .unwrap();
        let (status, created) = send(&app, request).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["session"]["mode"], "standard");
    }

    #[tokio::test]
    async fn test_voice_dialog_over_http() {
        let app = test_app();
        let id = open(&app, r#"{"mode":"blind"}"#).await;

        let turn = say(&app, &id, "navigate").await;
        assert_eq!(
            turn["reply"],
            "Please set both starting location and destination first"
        );

        let turn = say(&app, &id, "from").await;
        assert_eq!(turn["pendingField"], "from");
        say(&app, &id, "Harbour Bridge").await;
        let turn = say(&app, &id, "Opera House").await;
        assert_eq!(turn["to"], "Opera House");

        let turn = say(&app, &id, "start navigation").await;
        // the navigate rule precedes the "start" rule
        assert_eq!(turn["intent"], "navigate");
        assert_eq!(turn["navigating"], true);
        assert_eq!(turn["route"]["steps"].as_array().unwrap().len(), 3);

        let (status, turn) = send(
            &app,
            post_json(&format!("/api/sessions/{id}/navigation/stop"), ""),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(turn["reply"], "Navigation stopped");

        let (_, snapshot) = send(&app, get(&format!("/api/sessions/{id}"))).await;
        assert_eq!(snapshot["from"], "Harbour Bridge");
        assert_eq!(snapshot["navigating"], false);
    }

    #[tokio::test]
    async fn test_request_field_endpoint() {
        let app = test_app();
        let id = open(&app, "{}").await;
        let uri = format!("/api/sessions/{id}/field");

        let (status, turn) = send(&app, post_json(&uri, r#"{"field":"to"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(turn["reply"], "Please say your destination");

        let (status, body) = send(&app, post_json(&uri, r#"{"field":"sideways"}"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Field must be \"from\" or \"to\"");
    }

    #[tokio::test]
    async fn test_session_voice_requires_transcript() {
        let app = test_app();
        let id = open(&app, "{}").await;
        let (status, body) = send(
            &app,
            post_json(&format!("/api/sessions/{id}/voice"), r#"{"transcript":""}"#),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No transcript provided");
    }

    #[tokio::test]
    async fn test_session_voice_empty_body_is_missing_transcript() {
        let app = test_app();
        let id = open(&app, "{}").await;
        let request = Request::builder()
            .method("POST")
            .uri(format!("/api/sessions/{id}/voice"))
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "No transcript provided");
    }

    #[tokio::test]
    async fn test_feeds_are_bounded_and_seeded() {
        let app = test_app();
        let a = open(&app, r#"{"mode":"deaf","seed":5}"#).await;
        let b = open(&app, r#"{"mode":"deaf","seed":5}"#).await;

        for _ in 0..8 {
            let (_, alert_a) = send(&app, post_json(&format!("/api/sessions/{a}/alerts/next"), "")).await;
            let (_, alert_b) = send(&app, post_json(&format!("/api/sessions/{b}/alerts/next"), "")).await;
            assert_eq!(alert_a["alert"]["message"], alert_b["alert"]["message"]);
            assert!(alert_a["recent"].as_array().unwrap().len() <= 5);

            let (status, signs) = send(&app, post_json(&format!("/api/sessions/{a}/signs/poll"), "")).await;
            assert_eq!(status, StatusCode::OK);
            assert!(signs["recent"].as_array().unwrap().len() <= 5);
        }
    }

    #[tokio::test]
    async fn test_unknown_and_closed_sessions() {
        let app = test_app();
        let missing = uuid::Uuid::new_v4();
        let (status, body) = send(&app, get(&format!("/api/sessions/{missing}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Session not found");

        let id = open(&app, "{}").await;
        let delete = Request::builder()
            .method("DELETE")
            .uri(format!("/api/sessions/{id}"))
            .body(Body::empty())
            .unwrap();
        let (status, _) = send(&app, delete).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, get(&format!("/api/sessions/{id}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
