//! Analysis domain models.
//!
//! The wire shapes exchanged with the external NLU service: the analyze
//! request parameters and the response envelope the gateway extracts
//! its results from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which analysis feature a request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    Sentiment,
    Emotion,
}

/// The content a request points the service at.
///
/// The inner `Option` carries an absent query parameter through to the
/// external call unchanged; the gateway does not validate it locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Text(Option<String>),
    Url(Option<String>),
}

/// Feature options for a single analysis feature.
///
/// The service accepts an empty object per requested feature.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureOptions {}

/// The `features` block of an analyze request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Features {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<FeatureOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<FeatureOptions>,
}

/// Parameters for one analyze call, derived from the route that
/// produced them. Exactly one of `text`/`url` matches the source kind
/// and exactly one `features` key matches the mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub features: Features,
}

impl AnalyzeParams {
    /// Build the parameter set for a (source, mode) combination.
    pub fn new(source: ContentSource, mode: AnalysisMode) -> Self {
        let (text, url) = match source {
            ContentSource::Text(text) => (text, None),
            ContentSource::Url(url) => (None, url),
        };
        let features = match mode {
            AnalysisMode::Sentiment => Features {
                sentiment: Some(FeatureOptions::default()),
                emotion: None,
            },
            AnalysisMode::Emotion => Features {
                sentiment: None,
                emotion: Some(FeatureOptions::default()),
            },
        };
        Self { text, url, features }
    }
}

/// Overall document tone as reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emotion-name to intensity mapping, relayed as the service sent it.
pub type EmotionScores = BTreeMap<String, f64>;

/// The emotion names the service is known to score.
pub const EMOTION_KEYS: [&str; 5] = ["anger", "disgust", "fear", "joy", "sadness"];

/// Response envelope from the analyze endpoint. Only the paths the
/// gateway extracts are modeled; everything else is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub result: AnalysisBody,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<EmotionAnalysis>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub document: SentimentDocument,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentDocument {
    pub label: SentimentLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionAnalysis {
    pub document: EmotionDocument,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionDocument {
    pub emotion: EmotionScores,
}

impl AnalyzeResponse {
    /// Extract `result.sentiment.document.label`, if present.
    pub fn sentiment_label(&self) -> Option<SentimentLabel> {
        self.result.sentiment.as_ref().map(|s| s.document.label)
    }

    /// Extract `result.emotion.document.emotion`, if present.
    pub fn emotion_scores(self) -> Option<EmotionScores> {
        self.result.emotion.map(|e| e.document.emotion)
    }
}
