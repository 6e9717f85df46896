use std::sync::Arc;
use tracing::{info, warn};

use super::{demo, heuristic};
use super::result::AnalysisResult;
use crate::delegate::CompletionDelegate;

/// The speech metric analyzer.
///
/// Never fails outward: every internal failure degrades to a lower-quality
/// scoring path instead of surfacing an error. The decision branch is
/// ordered — delegate first when configured and a transcript exists, demo
/// output for empty transcripts, local heuristic otherwise.
pub struct SpeechAnalyzer {
    delegate: Option<Arc<dyn CompletionDelegate>>,
}

impl SpeechAnalyzer {
    /// Analyzer with no external delegate (local-only mode).
    pub fn new() -> Self {
        Self { delegate: None }
    }

    /// Analyzer that tries the given delegate before local scoring.
    pub fn with_delegate(delegate: Arc<dyn CompletionDelegate>) -> Self {
        Self {
            delegate: Some(delegate),
        }
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    /// Score a transcript, always producing a plausible result.
    ///
    /// A single delegate attempt is made when one is configured and the
    /// transcript is non-empty; any delegate failure falls through silently
    /// to the heuristic path. The radar profile is always recomputed locally,
    /// whichever path wins.
    pub async fn analyze(
        &self,
        transcript: &str,
        expected_text: &str,
        duration_secs: u32,
    ) -> AnalysisResult {
        let has_transcript = !transcript.trim().is_empty();

        if let Some(delegate) = &self.delegate {
            if has_transcript {
                match delegate
                    .score_transcript(transcript, expected_text, duration_secs)
                    .await
                {
                    Ok(scores) => {
                        info!("analysis scored by delegate");
                        return scores.into_result();
                    }
                    Err(err) => {
                        warn!("delegate scoring failed, using local heuristic: {}", err);
                    }
                }
            }
        }

        if has_transcript {
            heuristic::analyze(transcript, expected_text, duration_secs)
        } else {
            demo::demo_result()
        }
    }
}

impl Default for SpeechAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
