//! Tonal Core Library
//!
//! Domain and wire types for the sentiment/emotion analysis gateway.

pub mod analysis;

pub use analysis::{
    AnalysisMode, AnalyzeParams, AnalyzeResponse, ContentSource, EmotionScores, SentimentLabel,
};
