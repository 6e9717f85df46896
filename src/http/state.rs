use std::sync::Arc;

use crate::analysis::SpeechAnalyzer;
use crate::config::AnalysisConfig;
use crate::store::AnalysisStore;

/// Shared application state for HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<SpeechAnalyzer>,
    pub store: Arc<dyn AnalysisStore>,

    /// Substituted when the request's duration is missing or unusable.
    pub default_duration_secs: u32,

    /// Cap on records returned by the history endpoint.
    pub history_limit: usize,

    /// Flat reward attached to each analysis response; a gamification
    /// concern of the boundary, never part of the analyzer output.
    pub xp_per_analysis: u32,
}

impl AppState {
    pub fn new(
        analyzer: Arc<SpeechAnalyzer>,
        store: Arc<dyn AnalysisStore>,
        cfg: &AnalysisConfig,
    ) -> Self {
        Self {
            analyzer,
            store,
            default_duration_secs: cfg.default_duration_secs,
            history_limit: cfg.history_limit,
            xp_per_analysis: cfg.xp_per_analysis,
        }
    }
}
