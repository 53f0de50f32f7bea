//! JSON-file backed scorecard source.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use shared::{
    domain::AccountId,
    error::{ApiError, ErrorCode},
    protocol::{CompletionSuggestions, LeadQualitySummary, ScorecardEnvelope, ScorecardResponse},
};
use tracing::debug;

use crate::{error::FetchError, LeadSummarySource, ScorecardSource};

/// Reads a scorecard document from disk on every fetch.
///
/// The document is either a `{"status": "ok", "payload": {...}}` /
/// `{"status": "error", "payload": {...}}` envelope or a bare
/// `{"categories": [...]}` response.
#[derive(Debug, Clone)]
pub struct FileScorecardSource {
    path: PathBuf,
}

impl FileScorecardSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<ScorecardResponse, FetchError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        debug!(path = %self.path.display(), bytes = raw.len(), "read scorecard document");
        parse_document(&raw)
    }
}

pub fn parse_document(raw: &str) -> Result<ScorecardResponse, FetchError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    if value.get("status").is_some() {
        return match serde_json::from_value::<ScorecardEnvelope>(value)? {
            ScorecardEnvelope::Ok(response) => Ok(response),
            ScorecardEnvelope::Error(api) => Err(FetchError::Remote(api)),
        };
    }
    Ok(serde_json::from_value(value)?)
}

#[async_trait]
impl ScorecardSource for FileScorecardSource {
    async fn fetch_scorecard(&self) -> Result<ScorecardResponse, FetchError> {
        self.load().await
    }

    async fn completion_suggestions(
        &self,
        account_id: &AccountId,
    ) -> Result<CompletionSuggestions, FetchError> {
        let response = self.load().await?;
        let record = response
            .categories
            .iter()
            .flat_map(|payload| payload.records.iter())
            .find(|record| &record.id == account_id)
            .ok_or_else(|| {
                ApiError::new(
                    ErrorCode::NotFound,
                    format!("account {account_id} not found"),
                )
            })?;

        Ok(CompletionSuggestions {
            account_id: record.id.clone(),
            missing_fields: record.missing_fields.join(", "),
        })
    }
}

/// Reads a lead quality summary document from disk on every fetch.
#[derive(Debug, Clone)]
pub struct FileLeadSummarySource {
    path: PathBuf,
}

impl FileLeadSummarySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl LeadSummarySource for FileLeadSummarySource {
    async fn fetch_lead_summary(&self) -> Result<LeadQualitySummary, FetchError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        debug!(path = %self.path.display(), bytes = raw.len(), "read lead summary document");
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
#[path = "tests/source_tests.rs"]
mod tests;
