use super::result::{AnalysisResult, RadarPoint};

/// Derive the six-axis radar profile from a result's scalar fields.
///
/// Pure function: same scalars in, same profile out. Always used to
/// (re)compute `result.radar` — profiles volunteered by the external
/// delegate are discarded so every path produces a consistent shape.
pub fn build_radar(result: &AnalysisResult) -> Vec<RadarPoint> {
    let pace = (100.0 - (result.speech_rate_wpm as f64 - 110.0).abs() * 0.5).clamp(0.0, 100.0);
    let clarity = (95.0 - result.filler_words as f64 * 5.0).max(30.0);
    let rhythm =
        (90.0 - result.blocks as f64 * 10.0 - result.repetitions as f64 * 8.0).max(30.0);
    let breathing = (100.0 - result.voice_tremor).max(40.0);

    vec![
        point("Fluency", result.fluency_rate as f64),
        point("Pace", pace),
        point("Confidence", result.confidence_score as f64),
        point("Clarity", clarity),
        point("Rhythm", rhythm),
        point("Breathing", breathing),
    ]
}

fn point(metric: &str, score: f64) -> RadarPoint {
    RadarPoint {
        metric: metric.to_string(),
        score,
    }
}
