//! Infrastructure layer for Parlor.
//!
//! Contains the concrete [`parlor_core::relay::CompletionRelay`]
//! implementation over the OpenAI-compatible chat-completions protocol,
//! and environment-backed configuration resolution.

pub mod config;
pub mod llm;
