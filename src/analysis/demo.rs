//! Demo result generator.
//!
//! Used when no transcript is available (no microphone, landing-page demo).
//! Values are random but bounded so the UI always has something plausible
//! to render. This is a demo-mode guarantee, not a scoring contract.

use rand::Rng;

use super::radar;
use super::result::AnalysisResult;

/// Produce a bounded pseudo-random result, independent of any input.
pub fn demo_result() -> AnalysisResult {
    let mut rng = rand::thread_rng();

    let mut result = AnalysisResult {
        confidence_score: 60 + rng.gen_range(0..25),
        fluency_rate: 65 + rng.gen_range(0..20),
        speech_rate_wpm: 100 + rng.gen_range(0..30),
        blocks: rng.gen_range(0..3),
        repetitions: rng.gen_range(0..2),
        prolongations: rng.gen_range(0..2),
        filler_words: rng.gen_range(0..4),
        voice_tremor: f64::from(rng.gen_range(0..20)),
        radar: Vec::new(),
        suggestions: vec![
            "Practice easy onset for smoother word beginnings".to_string(),
            "Use breathing pauses between phrases".to_string(),
            "Maintain a steady 100-120 WPM pace".to_string(),
            "Great job completing this session!".to_string(),
        ],
        recommended_exercises: vec![
            "Easy Onset Drill".to_string(),
            "Diaphragmatic Breathing".to_string(),
            "Slow Speech".to_string(),
            "Pausing Technique".to_string(),
        ],
    };
    result.radar = radar::build_radar(&result);
    result
}
