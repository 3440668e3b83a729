//! Session transcript and exchange logic for Parlor.
//!
//! This crate defines the "port" (the [`relay::CompletionRelay`] trait) that
//! the infrastructure layer implements, the in-memory session transcript,
//! and the event dispatcher that drives one exchange. It depends only on
//! `parlor-types` -- never on `parlor-infra` or any HTTP crate.

pub mod exchange;
pub mod relay;
pub mod transcript;
