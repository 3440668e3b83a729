//! Transcript read and clear endpoints.
//!
//! GET /api/v1/transcript — the full conversation so far, for rebuilding
//! the page after a reload.
//! POST /api/v1/transcript/clear — wipe all turns; the session id is kept.

use axum::extract::State;
use axum::Json;
use futures_util::StreamExt;
use serde::Serialize;

use parlor_core::exchange::ChatEvent;
use parlor_types::chat::Turn;

use crate::state::AppState;

/// Response body for the transcript endpoints.
#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub session_id: String,
    pub started_at: String,
    pub turns: Vec<Turn>,
}

/// GET /api/v1/transcript — the current conversation.
pub async fn get_transcript(State(state): State<AppState>) -> Json<TranscriptResponse> {
    let transcript = state.transcript.lock().await;

    Json(TranscriptResponse {
        session_id: transcript.session_id().to_string(),
        started_at: transcript.started_at().to_rfc3339(),
        turns: transcript.turns().to_vec(),
    })
}

/// POST /api/v1/transcript/clear — wipe the conversation.
pub async fn clear_transcript(State(state): State<AppState>) -> Json<TranscriptResponse> {
    let mut transcript = state.transcript.lock().await;

    // Drain the dispatch stream; Clear emits a single Cleared action.
    let mut actions = state
        .engine
        .dispatch(&mut transcript, ChatEvent::Clear);
    while actions.next().await.is_some() {}
    drop(actions);

    Json(TranscriptResponse {
        session_id: transcript.session_id().to_string(),
        started_at: transcript.started_at().to_rfc3339(),
        turns: Vec::new(),
    })
}
