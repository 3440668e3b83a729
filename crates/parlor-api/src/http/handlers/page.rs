//! The single chat page.
//!
//! GET / -- the whole UI is one HTML file baked into the binary; no build
//! step, no static file directory.

use axum::response::Html;

/// GET / - Serve the chat page.
pub async fn chat_page() -> Html<&'static str> {
    Html(include_str!("../../../assets/index.html"))
}
