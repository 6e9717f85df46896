// Tests for the in-memory analysis store and the lenient duration parsing
// done at the HTTP boundary.

use serde_json::json;
use speech_coach::http::parse_duration_field;
use speech_coach::{analysis::demo, AnalysisRecord, AnalysisStore, MemoryStore};

fn record_for(user: &str, transcript: &str) -> AnalysisRecord {
    AnalysisRecord::new(
        Some(user.to_string()),
        transcript.to_string(),
        String::new(),
        30,
        demo::demo_result(),
    )
}

#[tokio::test]
async fn test_recent_is_newest_first() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    store.put(record_for("alice", "first")).await?;
    store.put(record_for("alice", "second")).await?;
    store.put(record_for("alice", "third")).await?;

    let history = store.recent(Some("alice"), 20).await?;
    let transcripts: Vec<&str> = history.iter().map(|r| r.transcript.as_str()).collect();
    assert_eq!(transcripts, vec!["third", "second", "first"]);
    Ok(())
}

#[tokio::test]
async fn test_recent_respects_limit() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    for i in 0..30 {
        store.put(record_for("alice", &format!("t{}", i))).await?;
    }

    let history = store.recent(None, 20).await?;
    assert_eq!(history.len(), 20);
    assert_eq!(history[0].transcript, "t29");
    Ok(())
}

#[tokio::test]
async fn test_recent_filters_by_user() -> anyhow::Result<()> {
    let store = MemoryStore::new();
    store.put(record_for("alice", "hers")).await?;
    store.put(record_for("bob", "his")).await?;

    let history = store.recent(Some("bob"), 20).await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].transcript, "his");

    let all = store.recent(None, 20).await?;
    assert_eq!(all.len(), 2);
    Ok(())
}

#[test]
fn test_record_serializes_result_fields_flat() {
    let record = record_for("alice", "hello");
    let value = serde_json::to_value(&record).expect("record serializes");

    // The stored document carries the result fields at the top level,
    // alongside the request context.
    assert!(value.get("confidence_score").is_some());
    assert!(value.get("radar").is_some());
    assert_eq!(value["transcript"], "hello");
    assert_eq!(value["duration_seconds"], 30);
}

#[test]
fn test_duration_parsing() {
    assert_eq!(parse_duration_field(Some(&json!(45)), 30), 45);
    assert_eq!(parse_duration_field(Some(&json!("45")), 30), 45);
    assert_eq!(parse_duration_field(Some(&json!(" 12 ")), 30), 12);
    // Non-numeric, non-positive and absent all take the default
    assert_eq!(parse_duration_field(Some(&json!("soon")), 30), 30);
    assert_eq!(parse_duration_field(Some(&json!(0)), 30), 30);
    assert_eq!(parse_duration_field(Some(&json!(-5)), 30), 30);
    assert_eq!(parse_duration_field(Some(&json!(null)), 30), 30);
    assert_eq!(parse_duration_field(None, 30), 30);
}
