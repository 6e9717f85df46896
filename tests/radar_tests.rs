// Tests for radar profile derivation.

use speech_coach::{build_radar, AnalysisResult, RADAR_METRICS};

fn base_result() -> AnalysisResult {
    AnalysisResult {
        confidence_score: 80,
        fluency_rate: 75,
        speech_rate_wpm: 110,
        blocks: 1,
        repetitions: 1,
        prolongations: 0,
        filler_words: 2,
        voice_tremor: 10.0,
        radar: Vec::new(),
        suggestions: Vec::new(),
        recommended_exercises: Vec::new(),
    }
}

#[test]
fn test_radar_has_six_axes_in_fixed_order() {
    let radar = build_radar(&base_result());
    let metrics: Vec<&str> = radar.iter().map(|p| p.metric.as_str()).collect();
    assert_eq!(metrics, RADAR_METRICS);
}

#[test]
fn test_radar_is_pure() {
    let result = base_result();
    assert_eq!(build_radar(&result), build_radar(&result));
}

#[test]
fn test_radar_values() {
    let radar = build_radar(&base_result());

    // Fluency and Confidence mirror their scalars
    assert_eq!(radar[0].score, 75.0);
    assert_eq!(radar[2].score, 80.0);
    // Pace peaks at 110 WPM
    assert_eq!(radar[1].score, 100.0);
    // Clarity: 95 - 2*5
    assert_eq!(radar[3].score, 85.0);
    // Rhythm: 90 - 10 - 8
    assert_eq!(radar[4].score, 72.0);
    // Breathing: 100 - 10
    assert_eq!(radar[5].score, 90.0);
}

#[test]
fn test_pace_penalty_and_clamp() {
    let mut result = base_result();

    result.speech_rate_wpm = 0;
    assert_eq!(build_radar(&result)[1].score, 45.0);

    result.speech_rate_wpm = 170;
    assert_eq!(build_radar(&result)[1].score, 70.0);

    // Far enough off-pace to hit the lower clamp
    result.speech_rate_wpm = 400;
    assert_eq!(build_radar(&result)[1].score, 0.0);
}

#[test]
fn test_axis_floors() {
    let mut result = base_result();
    result.filler_words = 20;
    result.blocks = 10;
    result.repetitions = 10;
    result.voice_tremor = 95.0;

    let radar = build_radar(&result);
    assert_eq!(radar[3].score, 30.0, "Clarity floor");
    assert_eq!(radar[4].score, 30.0, "Rhythm floor");
    assert_eq!(radar[5].score, 40.0, "Breathing floor");
}

#[test]
fn test_all_axes_stay_in_range() {
    let mut result = base_result();
    result.speech_rate_wpm = 500;
    result.filler_words = 100;
    result.blocks = 100;
    result.repetitions = 100;
    result.voice_tremor = 100.0;

    for point in build_radar(&result) {
        assert!(
            (0.0..=100.0).contains(&point.score),
            "{} out of range: {}",
            point.metric,
            point.score
        );
    }
}
