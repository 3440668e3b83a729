//! HTTP layer for Parlor.
//!
//! Axum-based server: the chat page at `/`, a JSON/SSE API at `/api/v1/`,
//! and a health check. CORS is open; there is no authentication, the
//! server is a single-user local app.

pub mod error;
pub mod handlers;
pub mod router;
