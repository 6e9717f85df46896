//! Persistence collaborator for analysis history.
//!
//! The HTTP boundary stores records best-effort: a failed write is logged
//! and never affects the response. Everything goes through the
//! [`AnalysisStore`] trait so handlers and tests run against fakes without
//! a database.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::analysis::AnalysisResult;

/// One stored analysis, the document shape persisted per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub id: uuid::Uuid,
    pub user_id: Option<String>,
    pub transcript: String,
    pub expected_text: String,
    pub duration_seconds: u32,
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub created_at: DateTime<Utc>,
}

impl AnalysisRecord {
    pub fn new(
        user_id: Option<String>,
        transcript: String,
        expected_text: String,
        duration_seconds: u32,
        result: AnalysisResult,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            user_id,
            transcript,
            expected_text,
            duration_seconds,
            result,
            created_at: Utc::now(),
        }
    }
}

/// Capability interface over the history store.
#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Persist one record.
    async fn put(&self, record: AnalysisRecord) -> Result<()>;

    /// Most recent records, newest first, optionally filtered by user.
    async fn recent(&self, user_id: Option<&str>, limit: usize) -> Result<Vec<AnalysisRecord>>;
}

/// In-process store. The default when no database is configured — history
/// survives for the lifetime of the process only.
pub struct MemoryStore {
    records: RwLock<Vec<AnalysisRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisStore for MemoryStore {
    async fn put(&self, record: AnalysisRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.push(record);
        Ok(())
    }

    async fn recent(&self, user_id: Option<&str>, limit: usize) -> Result<Vec<AnalysisRecord>> {
        let records = self.records.read().await;
        // Insertion order is chronological, so newest-first is a reverse scan.
        let matching: Vec<AnalysisRecord> = records
            .iter()
            .rev()
            .filter(|r| match user_id {
                Some(uid) => r.user_id.as_deref() == Some(uid),
                None => true,
            })
            .take(limit)
            .cloned()
            .collect();
        Ok(matching)
    }
}
