use super::state::AppState;
use crate::analysis::AnalysisResult;
use crate::store::AnalysisRecord;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeSpeechRequest {
    /// Transcript to score. Empty or absent selects the demo path.
    #[serde(default)]
    pub transcript: String,

    /// Reference text the speaker was reading, if any.
    #[serde(default)]
    pub expected_text: String,

    /// Recording length in seconds. Clients send this as either a JSON
    /// number or a string, so it is parsed leniently.
    #[serde(default)]
    pub duration: Option<Value>,

    /// Optional owner of the stored record.
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeSpeechResponse {
    pub result: AnalysisResult,
    pub xp_earned: u32,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<AnalysisRecord>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/analysis/speech
/// Score a transcript and persist the outcome best-effort
pub async fn analyze_speech(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeSpeechRequest>,
) -> impl IntoResponse {
    let duration_secs =
        parse_duration_field(req.duration.as_ref(), state.default_duration_secs);

    info!(
        "Analyzing speech ({} chars, {}s)",
        req.transcript.len(),
        duration_secs
    );

    let result = state
        .analyzer
        .analyze(&req.transcript, &req.expected_text, duration_secs)
        .await;

    // Persistence is fire-and-forget: a failed write must never affect the
    // response the client already deserves.
    let record = AnalysisRecord::new(
        req.user_id,
        req.transcript,
        req.expected_text,
        duration_secs,
        result.clone(),
    );
    let store = state.store.clone();
    tokio::spawn(async move {
        if let Err(e) = store.put(record).await {
            warn!("Failed to persist analysis record: {}", e);
        }
    });

    (
        StatusCode::OK,
        Json(AnalyzeSpeechResponse {
            result,
            xp_earned: state.xp_per_analysis,
        }),
    )
}

/// GET /api/analysis/history
/// Recent analyses, newest first; store failure degrades to an empty list
pub async fn analysis_history(
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> impl IntoResponse {
    let history = match state
        .store
        .recent(params.user_id.as_deref(), state.history_limit)
        .await
    {
        Ok(records) => records,
        Err(e) => {
            warn!("Failed to load analysis history: {}", e);
            Vec::new()
        }
    };

    (StatusCode::OK, Json(HistoryResponse { history }))
}

/// GET /api/health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "speech-coach backend is running".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: chrono::Utc::now(),
        }),
    )
}

/// Parse the lenient duration field: a JSON number or a numeric string.
/// Anything non-numeric or non-positive falls back to the default.
pub fn parse_duration_field(raw: Option<&Value>, default_secs: u32) -> u32 {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_f64().map(|v| v as i64),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match parsed {
        Some(secs) if secs > 0 => secs as u32,
        _ => default_secs,
    }
}
