//! External delegate adapter.
//!
//! A delegate is a text-completion service asked to score a transcript and
//! reply with a single JSON object. The adapter is a pure boundary call:
//! one attempt, bounded by the client timeout, and every failure collapses
//! into a tagged [`DelegateError`] so the analyzer can fall back to local
//! scoring without inspecting what went wrong.

mod openai;

pub use openai::OpenAiDelegate;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::analysis::{build_radar, AnalysisResult};

/// Why a delegate attempt produced no usable scores.
#[derive(Debug, Error)]
pub enum DelegateError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("unparseable reply: {0}")]
    Parse(String),
}

/// A text-completion service that can score a transcript.
#[async_trait]
pub trait CompletionDelegate: Send + Sync {
    async fn score_transcript(
        &self,
        transcript: &str,
        expected_text: &str,
        duration_secs: u32,
    ) -> Result<DelegateScores, DelegateError>;
}

/// The loosely-typed JSON object a delegate is instructed to return.
///
/// Every field is optional because the reply is free text from a language
/// model; unknown fields (including any `radar` the model volunteers) are
/// ignored. [`DelegateScores::into_result`] fills gaps and enforces ranges.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DelegateScores {
    pub confidence_score: Option<f64>,
    pub fluency_rate: Option<f64>,
    pub speech_rate_wpm: Option<f64>,
    pub blocks: Option<f64>,
    pub repetitions: Option<f64>,
    pub prolongations: Option<f64>,
    pub filler_words: Option<f64>,
    pub voice_tremor: Option<f64>,
    pub suggestions: Option<Vec<String>>,
    pub recommended_exercises: Option<Vec<String>>,
}

impl DelegateScores {
    /// Convert delegate scalars into the canonical result shape.
    ///
    /// Missing scores take the same defaults the radar derivation assumes
    /// (confidence 70, fluency 70, 110 WPM, zero disfluencies); present
    /// scores are clamped into their documented ranges. Tip lists are capped
    /// at four entries and the radar is always regenerated locally.
    pub fn into_result(self) -> AnalysisResult {
        let mut suggestions = self.suggestions.unwrap_or_default();
        suggestions.truncate(4);
        let mut exercises = self.recommended_exercises.unwrap_or_default();
        exercises.truncate(4);

        let mut result = AnalysisResult {
            confidence_score: score_or(self.confidence_score, 70),
            fluency_rate: score_or(self.fluency_rate, 70),
            speech_rate_wpm: count_or(self.speech_rate_wpm, 110),
            blocks: count_or(self.blocks, 0),
            repetitions: count_or(self.repetitions, 0),
            prolongations: count_or(self.prolongations, 0),
            filler_words: count_or(self.filler_words, 0),
            voice_tremor: self.voice_tremor.unwrap_or(0.0).clamp(0.0, 100.0),
            radar: Vec::new(),
            suggestions,
            recommended_exercises: exercises,
        };
        result.radar = build_radar(&result);
        result
    }
}

fn score_or(value: Option<f64>, default: u32) -> u32 {
    match value {
        Some(v) => v.round().clamp(0.0, 100.0) as u32,
        None => default,
    }
}

fn count_or(value: Option<f64>, default: u32) -> u32 {
    match value {
        Some(v) => v.round().max(0.0) as u32,
        None => default,
    }
}

/// Strip Markdown code fences a model may wrap around its JSON reply.
pub fn strip_code_fences(reply: &str) -> String {
    reply.replace("```json", "").replace("```", "").trim().to_string()
}

/// Parse a raw textual reply into [`DelegateScores`].
pub fn parse_reply(reply: &str) -> Result<DelegateScores, DelegateError> {
    let cleaned = strip_code_fences(reply);
    serde_json::from_str(&cleaned).map_err(|e| DelegateError::Parse(e.to_string()))
}
