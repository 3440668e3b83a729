//! SSE streaming chat endpoint.
//!
//! POST /api/v1/chat/stream
//!
//! Dispatches the user message against the session transcript and streams
//! the resulting render actions as Server-Sent Events. The transcript lock
//! is held for the duration of the exchange, so concurrent submissions
//! queue rather than interleave.
//!
//! SSE event types:
//! - `user` — the stored user turn: `{ "role": "user", "content": "...", ... }`
//! - `text_delta` — incremental reply text: `{ "text": "..." }`
//! - `assistant` — the completed assistant turn, replacing the deltas
//! - `error` — the relay failed: `{ "message": "..." }`; no assistant turn
//!   was stored for this exchange
//! - `done` — stream complete: `{}`

use std::convert::Infallible;
use std::time::Duration;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use futures_util::StreamExt;
use serde::Deserialize;
use tokio_stream::Stream;

use parlor_core::exchange::{ChatEvent, RenderAction};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the streaming chat endpoint.
#[derive(Debug, Deserialize)]
pub struct StreamChatRequest {
    /// The user message to send.
    pub message: String,
}

/// POST /api/v1/chat/stream — SSE streaming chat.
pub async fn stream_chat(
    State(state): State<AppState>,
    Json(body): Json<StreamChatRequest>,
) -> Result<Sse<impl Stream<Item = Result<Event, Infallible>>>, AppError> {
    if body.message.trim().is_empty() {
        return Err(AppError::Validation(
            "message must not be empty".to_string(),
        ));
    }

    let engine = state.engine.clone();
    let transcript = state.transcript.clone();
    let message = body.message;

    let sse_stream = async_stream::stream! {
        // Held across the whole exchange: one in-flight relay call per
        // session.
        let mut transcript = transcript.lock().await;

        let mut actions = engine.dispatch(&mut transcript, ChatEvent::UserMessage(message));

        while let Some(action) = actions.next().await {
            let event = match action {
                RenderAction::UserTurn(turn) => {
                    let data = serde_json::to_string(&turn).unwrap_or_default();
                    Event::default().event("user").data(data)
                }
                RenderAction::Fragment(text) => {
                    let data = serde_json::json!({ "text": text });
                    Event::default().event("text_delta").data(data.to_string())
                }
                RenderAction::AssistantTurn(turn) => {
                    let data = serde_json::to_string(&turn).unwrap_or_default();
                    Event::default().event("assistant").data(data)
                }
                RenderAction::RelayFailed(message) => {
                    let data = serde_json::json!({ "message": message });
                    Event::default().event("error").data(data.to_string())
                }
                RenderAction::Cleared => continue,
            };
            yield Ok::<_, Infallible>(event);
        }

        yield Ok(Event::default().event("done").data("{}"));
    };

    Ok(Sse::new(sse_stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15))))
}
