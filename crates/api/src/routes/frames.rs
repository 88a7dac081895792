//! Frame Ingest Route

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use pose_frame::JointFrame;
use rep_engine::{Phase, PostureSignal};

use crate::AppState;

/// Result of ingesting one frame
#[derive(Debug, Serialize)]
pub struct FrameResponse {
    /// False when the session is stopped and the frame was discarded
    pub accepted: bool,
    pub count: u32,
    pub phase: Phase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signal: Option<PostureSignal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rep_completed: Option<u32>,
}

/// Ingest one joint frame from the pose estimator.
///
/// The tracker's exclusive lock serializes frames: a frame is classified and
/// committed fully before the next one is accepted.
pub async fn ingest_frame(
    State(state): State<Arc<RwLock<AppState>>>,
    Json(frame): Json<JointFrame>,
) -> Json<FrameResponse> {
    let mut state = state.write().await;
    match state.tracker.process_frame(&frame) {
        Some(analysis) => Json(FrameResponse {
            accepted: true,
            count: analysis.count,
            phase: analysis.phase,
            signal: Some(analysis.signal),
            rep_completed: analysis.rep_completed,
        }),
        None => Json(FrameResponse {
            accepted: false,
            count: state.tracker.count(),
            phase: state.tracker.phase(),
            signal: None,
            rep_completed: None,
        }),
    }
}
