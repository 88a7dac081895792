//! Session Control Routes

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

use alerting::TargetStatus;
use rep_engine::Phase;
use session::EventRecord;

use crate::AppState;

/// Request body for target submission
#[derive(Debug, Deserialize)]
pub struct TargetRequest {
    /// Raw caller text; validated by the pipeline
    pub target: String,
}

/// Response for accepted targets
#[derive(Debug, Serialize)]
pub struct TargetResponse {
    pub target: u32,
}

/// Error body for rejected operations
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Full pipeline status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub session_id: String,
    pub running: bool,
    pub count: u32,
    pub phase: Phase,
    pub target: TargetStatus,
    pub recent_events: Vec<EventRecord>,
}

/// Response for session lifecycle operations
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub running: bool,
    pub count: u32,
}

/// Submit a rep target
pub async fn submit_target(
    State(state): State<Arc<RwLock<AppState>>>,
    Json(request): Json<TargetRequest>,
) -> Result<Json<TargetResponse>, (StatusCode, Json<ErrorResponse>)> {
    let mut state = state.write().await;
    match state.tracker.submit_target(&request.target) {
        Ok(target) => Ok(Json(TargetResponse { target })),
        Err(e) => Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

/// Reset the count. The target, if set, stays armed.
pub async fn reset_count(State(state): State<Arc<RwLock<AppState>>>) -> Json<SessionResponse> {
    let mut state = state.write().await;
    state.tracker.reset_count();
    Json(SessionResponse {
        running: state.tracker.is_running(),
        count: state.tracker.count(),
    })
}

/// Start accepting frames
pub async fn start_session(State(state): State<Arc<RwLock<AppState>>>) -> Json<SessionResponse> {
    let mut state = state.write().await;
    state.tracker.start();
    Json(SessionResponse {
        running: true,
        count: state.tracker.count(),
    })
}

/// Stop accepting frames. Counts survive.
pub async fn stop_session(State(state): State<Arc<RwLock<AppState>>>) -> Json<SessionResponse> {
    let mut state = state.write().await;
    state.tracker.stop();
    Json(SessionResponse {
        running: false,
        count: state.tracker.count(),
    })
}

/// Get pipeline status
pub async fn get_status(State(state): State<Arc<RwLock<AppState>>>) -> Json<StatusResponse> {
    let state = state.read().await;
    Json(StatusResponse {
        session_id: state.tracker.id().to_string(),
        running: state.tracker.is_running(),
        count: state.tracker.count(),
        phase: state.tracker.phase(),
        target: state.tracker.target_status(),
        recent_events: state.tracker.recent_events().iter().cloned().collect(),
    })
}
