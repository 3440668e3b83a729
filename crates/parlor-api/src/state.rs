//! Application state wiring the engine to the HTTP handlers.
//!
//! The chat engine is generic over the relay, but AppState pins it to the
//! concrete OpenAI-compatible implementation. One transcript exists per
//! process; the mutex serializes exchanges so at most one relay call is in
//! flight for the session.

use std::sync::Arc;

use tokio::sync::Mutex;

use parlor_core::exchange::ChatEngine;
use parlor_core::transcript::Transcript;
use parlor_infra::config::RelaySettings;
use parlor_infra::llm::create_relay;
use parlor_infra::llm::openai_compat::OpenAiCompatRelay;

/// Concrete engine type pinned to the infra relay.
pub type ConcreteChatEngine = ChatEngine<OpenAiCompatRelay>;

/// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ConcreteChatEngine>,
    pub transcript: Arc<Mutex<Transcript>>,
}

impl AppState {
    /// Wire the relay and a fresh transcript from resolved settings.
    pub fn init(settings: RelaySettings) -> Self {
        let relay = create_relay(&settings);
        let engine = ChatEngine::new(relay, settings.generation);

        Self {
            engine: Arc::new(engine),
            transcript: Arc::new(Mutex::new(Transcript::new())),
        }
    }
}
