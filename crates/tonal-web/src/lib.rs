//! Tonal Web Server
//!
//! Axum-based gateway exposing the four analysis routes and the
//! landing page.

pub mod routes;
pub mod state;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::landing::index))
        .route("/url/sentiment", get(routes::analyze::url_sentiment))
        .route("/url/emotion", get(routes::analyze::url_emotion))
        .route("/text/sentiment", get(routes::analyze::text_sentiment))
        .route("/text/emotion", get(routes::analyze::text_emotion))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!("Gateway listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
