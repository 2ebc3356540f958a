//! HTTP client for the external NLU service.
//!
//! Posts analyze parameters to `{base_url}/v1/analyze` with IAM-style
//! basic auth and extracts the sentiment label or emotion scores from
//! the response envelope.

pub mod error;

pub use error::{NluError, NluResult};

use std::time::Duration;
use tonal_core::{
    AnalysisMode, AnalyzeParams, AnalyzeResponse, ContentSource, EmotionScores, SentimentLabel,
};
use tracing::debug;

/// API version date pinned for the analyze endpoint.
pub const SERVICE_VERSION: &str = "2020-08-01";

/// Default deadline for one external call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the external NLU service.
#[derive(Debug, Clone)]
pub struct NluConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl NluConfig {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// NLU analysis client. Built once at startup and shared across
/// requests; cloning reuses the underlying connection pool.
#[derive(Clone)]
pub struct NluClient {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl NluClient {
    /// Create a client from explicit configuration.
    pub fn new(config: &NluConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_default();

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            client,
        }
    }

    /// Send one analyze call and return the decoded response envelope.
    pub async fn analyze(&self, params: &AnalyzeParams) -> NluResult<AnalyzeResponse> {
        let response = self
            .client
            .post(format!("{}/v1/analyze", self.base_url))
            .query(&[("version", SERVICE_VERSION)])
            .basic_auth("apikey", Some(&self.api_key))
            .json(params)
            .send()
            .await
            .map_err(NluError::from_transport)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(NluError::Api { status, message });
        }

        response
            .json()
            .await
            .map_err(|e| NluError::Decode(e.to_string()))
    }

    /// Analyze sentiment for the given source, returning the document label.
    pub async fn sentiment(&self, source: ContentSource) -> NluResult<SentimentLabel> {
        let params = AnalyzeParams::new(source, AnalysisMode::Sentiment);
        let response = self.analyze(&params).await?;
        let label = response
            .sentiment_label()
            .ok_or(NluError::MissingField("result.sentiment.document.label"))?;

        debug!(%label, "sentiment analysis complete");
        Ok(label)
    }

    /// Analyze emotion for the given source, returning the document scores.
    pub async fn emotion(&self, source: ContentSource) -> NluResult<EmotionScores> {
        let params = AnalyzeParams::new(source, AnalysisMode::Emotion);
        let response = self.analyze(&params).await?;
        let scores = response
            .emotion_scores()
            .ok_or(NluError::MissingField("result.emotion.document.emotion"))?;

        debug!(scores = scores.len(), "emotion analysis complete");
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Json;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Router;
    use std::sync::{Arc, Mutex};

    type Captured = Arc<Mutex<Option<serde_json::Value>>>;

    /// Spin up a stub NLU service on an ephemeral port. Returns its base
    /// URL and a handle to the last request body it received.
    async fn stub_service(status: StatusCode, body: serde_json::Value) -> (String, Captured) {
        let captured: Captured = Arc::new(Mutex::new(None));
        let seen = captured.clone();

        let app = Router::new().route(
            "/v1/analyze",
            post(move |Json(request): Json<serde_json::Value>| {
                let body = body.clone();
                let seen = seen.clone();
                async move {
                    *seen.lock().unwrap() = Some(request);
                    (status, Json(body))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), captured)
    }

    fn client_for(base_url: &str) -> NluClient {
        NluClient::new(&NluConfig::new("test-key", base_url))
    }

    #[tokio::test]
    async fn test_sentiment_extracts_document_label() {
        let (url, captured) = stub_service(
            StatusCode::OK,
            serde_json::json!({"result": {"sentiment": {"document": {"label": "positive"}}}}),
        )
        .await;

        let label = client_for(&url)
            .sentiment(ContentSource::Text(Some("great".to_string())))
            .await
            .unwrap();
        assert_eq!(label, SentimentLabel::Positive);

        let request = captured.lock().unwrap().clone().unwrap();
        assert_eq!(request["text"], "great");
        assert!(request["features"]["sentiment"].is_object());
        assert!(request["features"].get("emotion").is_none());
    }

    #[tokio::test]
    async fn test_emotion_extracts_score_map() {
        let (url, _) = stub_service(
            StatusCode::OK,
            serde_json::json!({
                "result": {"emotion": {"document": {"emotion": {"joy": 0.9, "anger": 0.01}}}}
            }),
        )
        .await;

        let scores = client_for(&url)
            .emotion(ContentSource::Url(Some("http://x".to_string())))
            .await
            .unwrap();
        assert_eq!(scores.get("joy"), Some(&0.9));
        assert_eq!(scores.get("anger"), Some(&0.01));
    }

    #[tokio::test]
    async fn test_absent_text_is_forwarded_as_absent() {
        let (url, captured) = stub_service(
            StatusCode::OK,
            serde_json::json!({"result": {"sentiment": {"document": {"label": "neutral"}}}}),
        )
        .await;

        let label = client_for(&url)
            .sentiment(ContentSource::Text(None))
            .await
            .unwrap();
        assert_eq!(label, SentimentLabel::Neutral);

        let request = captured.lock().unwrap().clone().unwrap();
        assert!(request.get("text").is_none());
        assert!(request.get("url").is_none());
        assert!(request["features"]["sentiment"].is_object());
    }

    #[tokio::test]
    async fn test_rejected_call_becomes_api_error() {
        let (url, _) = stub_service(
            StatusCode::UNAUTHORIZED,
            serde_json::json!({"error": "invalid api key"}),
        )
        .await;

        let err = client_for(&url)
            .sentiment(ContentSource::Text(Some("hi".to_string())))
            .await
            .unwrap_err();
        match err {
            NluError::Api { status, message } => {
                assert_eq!(status, 401);
                assert!(message.contains("invalid api key"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_result_field_is_reported() {
        let (url, _) = stub_service(StatusCode::OK, serde_json::json!({"result": {}})).await;

        let err = client_for(&url)
            .emotion(ContentSource::Text(Some("hi".to_string())))
            .await
            .unwrap_err();
        assert!(matches!(err, NluError::MissingField(_)));
    }

    #[tokio::test]
    async fn test_slow_service_hits_timeout() {
        let app = Router::new().route(
            "/v1/analyze",
            post(|| async {
                tokio::time::sleep(Duration::from_millis(500)).await;
                Json(serde_json::json!({"result": {}}))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = NluConfig::new("test-key", format!("http://{addr}"))
            .with_timeout(Duration::from_millis(50));
        let err = NluClient::new(&config)
            .sentiment(ContentSource::Text(Some("hi".to_string())))
            .await
            .unwrap_err();
        assert!(err.is_timeout());
    }
}
