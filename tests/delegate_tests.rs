// Tests for delegate reply parsing and conversion into the canonical
// result shape. The live HTTP call is not exercised here; transport
// failures are covered by the analyzer fallback tests.

use speech_coach::delegate::{parse_reply, strip_code_fences, DelegateError, DelegateScores};
use speech_coach::RADAR_METRICS;

const WELL_FORMED: &str = r#"{"confidence_score":70,"fluency_rate":72,"speech_rate_wpm":110,
"blocks":2,"repetitions":1,"prolongations":1,"filler_words":3,"voice_tremor":15,
"suggestions":["tip1","tip2"],"recommended_exercises":["Exercise1"]}"#;

#[test]
fn test_parse_plain_json() {
    let scores = parse_reply(WELL_FORMED).expect("should parse");
    assert_eq!(scores.confidence_score, Some(70.0));
    assert_eq!(scores.filler_words, Some(3.0));
    assert_eq!(scores.suggestions.as_deref().map(|s| s.len()), Some(2));
}

#[test]
fn test_parse_fenced_json() {
    let fenced = format!("```json\n{}\n```", WELL_FORMED);
    let scores = parse_reply(&fenced).expect("fenced reply should parse");
    assert_eq!(scores.fluency_rate, Some(72.0));
}

#[test]
fn test_strip_code_fences() {
    assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
    assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
    assert_eq!(strip_code_fences("  {} "), "{}");
}

#[test]
fn test_prose_reply_is_a_parse_error() {
    let err = parse_reply("I'm sorry, I cannot analyze that.").unwrap_err();
    assert!(matches!(err, DelegateError::Parse(_)));
}

#[test]
fn test_truncated_json_is_a_parse_error() {
    let err = parse_reply(r#"{"confidence_score":70,"flu"#).unwrap_err();
    assert!(matches!(err, DelegateError::Parse(_)));
}

#[test]
fn test_volunteered_radar_is_ignored_and_regenerated() {
    let reply = r#"{"fluency_rate":60,"speech_rate_wpm":110,
        "radar":[{"metric":"Bogus","score":1}]}"#;
    let result = parse_reply(reply).expect("unknown fields are ignored").into_result();

    let metrics: Vec<&str> = result.radar.iter().map(|p| p.metric.as_str()).collect();
    assert_eq!(metrics, RADAR_METRICS);
    assert_eq!(result.radar[0].score, 60.0);
}

#[test]
fn test_missing_fields_take_defaults() {
    let result = DelegateScores::default().into_result();

    assert_eq!(result.confidence_score, 70);
    assert_eq!(result.fluency_rate, 70);
    assert_eq!(result.speech_rate_wpm, 110);
    assert_eq!(result.blocks, 0);
    assert_eq!(result.voice_tremor, 0.0);
    assert!(result.suggestions.is_empty());
    // Default 110 WPM puts Pace at its peak
    assert_eq!(result.radar[1].score, 100.0);
}

#[test]
fn test_out_of_range_scores_are_clamped() {
    let reply = r#"{"confidence_score":150,"fluency_rate":-20,"blocks":-3,"voice_tremor":400}"#;
    let result = parse_reply(reply).expect("should parse").into_result();

    assert_eq!(result.confidence_score, 100);
    assert_eq!(result.fluency_rate, 0);
    assert_eq!(result.blocks, 0);
    assert_eq!(result.voice_tremor, 100.0);
}

#[test]
fn test_oversized_tip_lists_are_truncated() {
    let scores = DelegateScores {
        suggestions: Some((0..7).map(|i| format!("tip {}", i)).collect()),
        recommended_exercises: Some((0..6).map(|i| format!("drill {}", i)).collect()),
        ..Default::default()
    };
    let result = scores.into_result();

    assert_eq!(result.suggestions.len(), 4);
    assert_eq!(result.recommended_exercises.len(), 4);
    assert_eq!(result.suggestions[0], "tip 0");
}
