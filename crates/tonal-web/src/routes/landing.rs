//! Landing page route handler.
//!
//! Serves the embedded demo page for exercising the analysis routes.

use axum::response::{Html, IntoResponse};

const LANDING_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the landing page.
pub async fn index() -> impl IntoResponse {
    Html(LANDING_HTML)
}
