pub mod analysis;
pub mod config;
pub mod delegate;
pub mod http;
pub mod store;

pub use analysis::{build_radar, AnalysisResult, RadarPoint, SpeechAnalyzer, RADAR_METRICS};
pub use config::Config;
pub use delegate::{CompletionDelegate, DelegateError, DelegateScores, OpenAiDelegate};
pub use http::{create_router, AppState};
pub use store::{AnalysisRecord, AnalysisStore, MemoryStore};
