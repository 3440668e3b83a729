//! Event dispatch for the chat interface.
//!
//! Instead of an implicit rerun model, every UI interaction is an explicit
//! [`ChatEvent`] dispatched against the transcript; the engine answers with
//! a stream of [`RenderAction`]s the caller renders in order.
//!
//! Ordering guarantee: the user's turn is appended (and announced) before
//! the relay is invoked, so a mid-call failure never loses the input. A
//! failed call leaves the transcript without an assistant entry for that
//! exchange -- no error placeholder is stored.

use std::pin::Pin;
use std::time::Instant;

use futures_util::{Stream, StreamExt};
use tracing::{info, warn};

use parlor_types::chat::Turn;
use parlor_types::config::GenerationParams;
use parlor_types::llm::{CompletionRequest, StreamEvent};

use crate::relay::CompletionRelay;
use crate::transcript::Transcript;

/// A UI interaction dispatched against the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEvent {
    /// The user submitted a message.
    UserMessage(String),
    /// The user asked to clear the conversation.
    Clear,
}

/// An instruction to the renderer, emitted in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderAction {
    /// The user's turn was stored; render it.
    UserTurn(Turn),
    /// An incremental fragment of the reply; append to the growing text.
    Fragment(String),
    /// The completed assistant turn was stored; replaces the fragments.
    AssistantTurn(Turn),
    /// The relay failed; show the message inline. No assistant turn was
    /// stored for this exchange.
    RelayFailed(String),
    /// The transcript was wiped; redraw empty.
    Cleared,
}

/// Drives one exchange: builds the request from the transcript, drains the
/// relay stream into an owned buffer, and appends the finished reply.
pub struct ChatEngine<R: CompletionRelay> {
    relay: R,
    params: GenerationParams,
}

impl<R: CompletionRelay> ChatEngine<R> {
    pub fn new(relay: R, params: GenerationParams) -> Self {
        Self { relay, params }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn relay_name(&self) -> &str {
        self.relay.name()
    }

    /// Build a streaming completion request from the full transcript.
    fn build_request(&self, transcript: &Transcript) -> CompletionRequest {
        CompletionRequest {
            model: self.params.model.clone(),
            messages: transcript.to_messages(),
            system: None,
            max_tokens: self.params.max_tokens,
            temperature: Some(self.params.temperature),
            top_p: Some(self.params.top_p),
            stream: true,
            stop_sequences: None,
        }
    }

    /// Dispatch one event against the transcript.
    ///
    /// The returned stream borrows both the engine and the transcript; the
    /// caller drains it to completion before the next dispatch (one
    /// in-flight exchange per session).
    pub fn dispatch<'a>(
        &'a self,
        transcript: &'a mut Transcript,
        event: ChatEvent,
    ) -> Pin<Box<dyn Stream<Item = RenderAction> + Send + 'a>> {
        match event {
            ChatEvent::Clear => Box::pin(async_stream::stream! {
                transcript.clear();
                info!(session_id = %transcript.session_id(), "transcript cleared");
                yield RenderAction::Cleared;
            }),
            ChatEvent::UserMessage(text) => Box::pin(async_stream::stream! {
                // Persist and announce the user turn before touching the
                // network: a failed call must not lose the input.
                let user_turn = transcript.push_user(text).clone();
                yield RenderAction::UserTurn(user_turn);

                let request = self.build_request(transcript);
                let started = Instant::now();
                let mut relay_stream = self.relay.stream(request);

                let mut reply = String::new();
                let mut fragments = 0usize;
                let mut failed = false;

                while let Some(event) = relay_stream.next().await {
                    match event {
                        Ok(StreamEvent::TextDelta { text }) => {
                            if !text.is_empty() {
                                reply.push_str(&text);
                                fragments += 1;
                                yield RenderAction::Fragment(text);
                            }
                        }
                        Ok(StreamEvent::Done) => break,
                        Ok(_) => {}
                        Err(e) => {
                            warn!(error = %e, "completion relay failed");
                            yield RenderAction::RelayFailed(e.to_string());
                            failed = true;
                            break;
                        }
                    }
                }

                if !failed && !reply.is_empty() {
                    info!(
                        fragments,
                        chars = reply.len(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "exchange complete"
                    );
                    let assistant_turn = transcript.push_assistant(reply).clone();
                    yield RenderAction::AssistantTurn(assistant_turn);
                }
            }),
        }
    }
}
