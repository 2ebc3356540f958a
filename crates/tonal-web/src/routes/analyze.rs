//! Analysis route handlers.
//!
//! One handler per (source-kind, mode) combination. Query parameters
//! are forwarded to the external service without local validation; an
//! absent `text`/`url` simply becomes an absent field in the outbound
//! call.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tonal_core::{ContentSource, EmotionScores};
use tonal_nlu::NluError;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct UrlQuery {
    pub url: Option<String>,
}

#[derive(Deserialize)]
pub struct TextQuery {
    pub text: Option<String>,
}

/// GET /url/sentiment - sentiment label for page content.
pub async fn url_sentiment(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<String, (StatusCode, String)> {
    let label = state
        .nlu
        .sentiment(ContentSource::Url(query.url))
        .await
        .map_err(upstream_failure)?;

    tracing::info!(%label, "url sentiment");
    Ok(label.to_string())
}

/// GET /url/emotion - emotion scores for page content.
pub async fn url_emotion(
    State(state): State<AppState>,
    Query(query): Query<UrlQuery>,
) -> Result<Json<EmotionScores>, (StatusCode, String)> {
    let scores = state
        .nlu
        .emotion(ContentSource::Url(query.url))
        .await
        .map_err(upstream_failure)?;

    tracing::info!(scores = scores.len(), "url emotion");
    Ok(Json(scores))
}

/// GET /text/sentiment - sentiment label for inline text.
pub async fn text_sentiment(
    State(state): State<AppState>,
    Query(query): Query<TextQuery>,
) -> Result<String, (StatusCode, String)> {
    let label = state
        .nlu
        .sentiment(ContentSource::Text(query.text))
        .await
        .map_err(upstream_failure)?;

    tracing::info!(%label, "text sentiment");
    Ok(label.to_string())
}

/// GET /text/emotion - emotion scores for inline text.
pub async fn text_emotion(
    State(state): State<AppState>,
    Query(query): Query<TextQuery>,
) -> Result<Json<EmotionScores>, (StatusCode, String)> {
    let scores = state
        .nlu
        .emotion(ContentSource::Text(query.text))
        .await
        .map_err(upstream_failure)?;

    tracing::info!(scores = scores.len(), "text emotion");
    Ok(Json(scores))
}

/// Map an NLU failure to an explicit gateway status: 504 when the
/// external call timed out, 502 for every other rejection.
fn upstream_failure(err: NluError) -> (StatusCode, String) {
    tracing::error!(error = %err, "NLU analysis failed");

    let status = if err.is_timeout() {
        StatusCode::GATEWAY_TIMEOUT
    } else {
        StatusCode::BAD_GATEWAY
    };
    (status, "upstream analysis failed".to_string())
}
