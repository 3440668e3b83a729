//! Shared domain types for Parlor.
//!
//! This crate contains the types used across the Parlor workspace:
//! conversation turns, completion request/stream shapes, generation
//! parameters, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod llm;
