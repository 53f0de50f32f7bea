use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use shared::{
    domain::AccountId,
    protocol::{CompletionSuggestions, LeadQualitySummary, ScorecardResponse},
};

pub mod controller;
pub mod error;
pub mod health;
pub mod lead_summary;
pub mod paginator;
pub mod presentation;
pub mod selector;
pub mod source;
pub mod store;

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;

pub use controller::{CategorySummary, PaginationSummary, ScorecardController, ScorecardView};
pub use error::{FetchError, RefreshError, SnapshotError};
pub use lead_summary::{LeadSummaryBoard, LeadSummaryView};
pub use paginator::{PageWindow, Paginator};
pub use selector::CategorySelector;
pub use source::{FileLeadSummarySource, FileScorecardSource};
pub use store::{DataStore, ScorecardSnapshot};

/// Upstream that labels and returns scorecard records.
#[async_trait]
pub trait ScorecardSource: Send + Sync {
    async fn fetch_scorecard(&self) -> Result<ScorecardResponse, FetchError>;
    async fn completion_suggestions(
        &self,
        account_id: &AccountId,
    ) -> Result<CompletionSuggestions, FetchError>;
}

#[async_trait]
impl<T> ScorecardSource for Arc<T>
where
    T: ScorecardSource + ?Sized,
{
    async fn fetch_scorecard(&self) -> Result<ScorecardResponse, FetchError> {
        (**self).fetch_scorecard().await
    }

    async fn completion_suggestions(
        &self,
        account_id: &AccountId,
    ) -> Result<CompletionSuggestions, FetchError> {
        (**self).completion_suggestions(account_id).await
    }
}

/// Upstream for the lead quality summary card.
#[async_trait]
pub trait LeadSummarySource: Send + Sync {
    async fn fetch_lead_summary(&self) -> Result<LeadQualitySummary, FetchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastVariant {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastMode {
    #[default]
    Dismissible,
    Sticky,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub title: String,
    pub message: String,
    pub variant: ToastVariant,
    pub mode: ToastMode,
}

impl Toast {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
            variant: ToastVariant::Error,
            mode: ToastMode::Dismissible,
        }
    }

    pub fn sticky_info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            variant: ToastVariant::Info,
            mode: ToastMode::Sticky,
        }
    }
}

/// One-way notification channel. Delivery is fire-and-forget.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, toast: Toast);
}

impl<T> NotificationSink for Arc<T>
where
    T: NotificationSink + ?Sized,
{
    fn notify(&self, toast: Toast) {
        (**self).notify(toast)
    }
}
