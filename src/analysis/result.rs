use serde::{Deserialize, Serialize};

/// The six radar axes, in the order clients render them.
pub const RADAR_METRICS: [&str; 6] = [
    "Fluency",
    "Pace",
    "Confidence",
    "Clarity",
    "Rhythm",
    "Breathing",
];

/// One axis of the radar profile, normalized to [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarPoint {
    pub metric: String,
    pub score: f64,
}

/// Complete outcome of one speech analysis.
///
/// Built fresh for every request by [`crate::analysis::SpeechAnalyzer`] and
/// never mutated afterwards. Scores are clamped to [0, 100] regardless of
/// which path (delegate, heuristic, demo) produced them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Overall speaking confidence, 0-100.
    pub confidence_score: u32,

    /// Fluency estimate, 0-100.
    pub fluency_rate: u32,

    /// Speaking rate in words per minute.
    pub speech_rate_wpm: u32,

    /// Count of speech blocks (silent struggles before a word).
    pub blocks: u32,

    /// Count of immediate word repetitions ("go go").
    pub repetitions: u32,

    /// Count of prolonged sounds ("ssssso").
    pub prolongations: u32,

    /// Count of filler words ("um", "uh", ...).
    pub filler_words: u32,

    /// Voice tremor estimate, 0-100.
    pub voice_tremor: f64,

    /// Six-axis profile in [`RADAR_METRICS`] order.
    pub radar: Vec<RadarPoint>,

    /// At most four coaching tips, in priority order.
    pub suggestions: Vec<String>,

    /// At most four recommended practice exercises.
    pub recommended_exercises: Vec<String>,
}
