//! CompletionRelay trait definition.
//!
//! The boundary between the conversation logic and the remote model.
//! Implementations live in `parlor-infra` (e.g., `OpenAiCompatRelay`).

use std::pin::Pin;

use futures_util::Stream;

use parlor_types::llm::{CompletionRequest, RelayError, StreamEvent};

/// A boxed stream of relay events, as returned by [`CompletionRelay::stream`].
pub type RelayStream = Pin<Box<dyn Stream<Item = Result<StreamEvent, RelayError>> + Send + 'static>>;

/// Trait for the completion relay backend.
///
/// Object-safe on purpose: the application holds an `Arc<dyn CompletionRelay>`
/// so the engine can be exercised with a scripted relay in tests.
pub trait CompletionRelay: Send + Sync {
    /// Human-readable relay name (e.g., "groq").
    fn name(&self) -> &str;

    /// Send a streaming completion request and return the event stream.
    ///
    /// The stream yields [`StreamEvent::TextDelta`] fragments in arrival
    /// order and ends with [`StreamEvent::Done`]; any error terminates it.
    fn stream(&self, request: CompletionRequest) -> RelayStream;
}

impl<T: CompletionRelay + ?Sized> CompletionRelay for std::sync::Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn stream(&self, request: CompletionRequest) -> RelayStream {
        (**self).stream(request)
    }
}
