//! Speech metric analysis core.
//!
//! Three scoring paths behind one entry point:
//! - delegate: an external text-completion service, when configured
//! - heuristic: local word-level scoring of a real transcript
//! - demo: bounded random placeholder output for empty transcripts
//!
//! Whichever path wins, the radar profile is derived locally and the output
//! shape is identical.

mod analyzer;
pub mod demo;
pub mod heuristic;
mod radar;
mod result;

pub use analyzer::SpeechAnalyzer;
pub use radar::build_radar;
pub use result::{AnalysisResult, RadarPoint, RADAR_METRICS};
