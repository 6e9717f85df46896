//! Local heuristic scorer.
//!
//! Delegate-free scoring over a real transcript. Word-derived metrics
//! (speech rate, filler count, repetition count) are deterministic;
//! blocks, prolongations and voice tremor are randomized placeholders
//! because no acoustic disfluency detector exists yet — the scoring
//! formulas treat them as real inputs either way.

use rand::Rng;

use super::radar;
use super::result::AnalysisResult;

/// Filler vocabulary counted by [`count_fillers`]. Exact-match, lower-case.
pub const FILLER_WORDS: [&str; 9] = [
    "um",
    "uh",
    "er",
    "like",
    "basically",
    "literally",
    "right",
    "okay",
    "so",
];

/// Speech rate reported when the duration is unusable.
pub const DEFAULT_WPM: u32 = 100;

/// Score a transcript without any external service.
///
/// `expected_text` is accepted for parity with the delegate path but is not
/// yet used in scoring (reserved for reference-text comparison).
/// `duration_secs == 0` never divides; the speech rate falls back to
/// [`DEFAULT_WPM`].
pub fn analyze(transcript: &str, _expected_text: &str, duration_secs: u32) -> AnalysisResult {
    let words = tokenize(transcript);
    let wpm = words_per_minute(words.len(), duration_secs);
    let fillers = count_fillers(&words);
    let reps = count_repetitions(&words);

    let mut rng = rand::thread_rng();
    let blocks = rng.gen_range(0..3);
    let prolongations = rng.gen_range(0..2);
    let tremor = rng.gen_range(0.0..=25.0_f64).round();

    let fluency = fluency_score(fillers, reps, blocks, prolongations);
    let confidence = confidence_score(fluency, tremor);

    let mut result = AnalysisResult {
        confidence_score: confidence,
        fluency_rate: fluency,
        speech_rate_wpm: wpm,
        blocks,
        repetitions: reps,
        prolongations,
        filler_words: fillers,
        voice_tremor: tremor,
        radar: Vec::new(),
        suggestions: build_suggestions(fluency, fillers, blocks, wpm),
        recommended_exercises: recommend_exercises(fluency, blocks, fillers),
    };
    result.radar = radar::build_radar(&result);
    result
}

/// Lower-case, whitespace-split word sequence. Empty tokens are dropped.
pub fn tokenize(transcript: &str) -> Vec<String> {
    transcript
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Rounded words-per-minute, or [`DEFAULT_WPM`] when the duration is zero.
pub fn words_per_minute(word_count: usize, duration_secs: u32) -> u32 {
    if duration_secs > 0 {
        (word_count as f64 / duration_secs as f64 * 60.0).round() as u32
    } else {
        DEFAULT_WPM
    }
}

/// Count tokens that exactly match the filler vocabulary.
pub fn count_fillers(words: &[String]) -> u32 {
    words
        .iter()
        .filter(|w| FILLER_WORDS.contains(&w.as_str()))
        .count() as u32
}

/// Count immediate word duplications ("go go" counts once per adjacent pair).
pub fn count_repetitions(words: &[String]) -> u32 {
    words.windows(2).filter(|pair| pair[0] == pair[1]).count() as u32
}

/// Fluency formula: each disfluency type subtracts a weighted penalty from
/// 100, clamped to [20, 100].
pub fn fluency_score(fillers: u32, repetitions: u32, blocks: u32, prolongations: u32) -> u32 {
    let raw = 100i64
        - 7 * i64::from(fillers)
        - 12 * i64::from(repetitions)
        - 14 * i64::from(blocks)
        - 8 * i64::from(prolongations);
    raw.clamp(20, 100) as u32
}

/// Confidence as a blend of fluency and tremor stability, clamped to [0, 100].
pub fn confidence_score(fluency: u32, tremor: f64) -> u32 {
    let raw = (fluency as f64 * 0.6 + (100.0 - tremor) * 0.25 + 15.0).round();
    raw.clamp(0.0, 100.0) as u32
}

/// Ordered coaching tips. Each rule appends at most one tip, an
/// encouragement always closes the list, and the result is capped at four.
pub fn build_suggestions(fluency: u32, fillers: u32, blocks: u32, wpm: u32) -> Vec<String> {
    let mut tips = Vec::new();
    if wpm > 150 {
        tips.push("Your pace is slightly fast — aim for 100-120 WPM for easier fluency".to_string());
    }
    if fillers > 3 {
        tips.push(
            "Replace filler words with a brief confident pause — it sounds more authoritative"
                .to_string(),
        );
    }
    if blocks > 2 {
        tips.push("Practice easy onset — begin each word with a gentle, soft air flow".to_string());
    }
    if fluency < 60 {
        tips.push(
            "Try the 3-3-3 breathing technique: inhale 3s, hold 3s, exhale 3s before speaking"
                .to_string(),
        );
    }
    tips.push("Great effort! Every practice session builds new neural pathways for fluency".to_string());
    tips.truncate(4);
    tips
}

/// Exercise picks, same rule-list shape as [`build_suggestions`].
pub fn recommend_exercises(fluency: u32, blocks: u32, fillers: u32) -> Vec<String> {
    let mut exercises = Vec::new();
    if blocks > 1 {
        exercises.push("Easy Onset Drill".to_string());
    }
    if fillers > 3 {
        exercises.push("Pausing Technique".to_string());
    }
    exercises.push("Diaphragmatic Breathing".to_string());
    if fluency < 70 {
        exercises.push("Slow Speech Drill".to_string());
    }
    exercises.push("Mirror Practice".to_string());
    exercises.truncate(4);
    exercises
}
