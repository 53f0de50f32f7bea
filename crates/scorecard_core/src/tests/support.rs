use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shared::{
    domain::{AccountId, Category, Record},
    error::{ApiError, ErrorCode},
    protocol::{CategoryPayload, CompletionSuggestions, ScorecardResponse},
};

use crate::{FetchError, NotificationSink, ScorecardSource, Toast};

pub fn record(id: &str, score: f64) -> Record {
    Record {
        id: AccountId::new(id),
        name: format!("Account {id}"),
        owner_name: "Dewi".to_string(),
        completeness_score: score,
        missing_fields: Vec::new(),
    }
}

/// `count` records with ids `{prefix}-1..` and the given score.
pub fn records(prefix: &str, count: usize, score: f64) -> Vec<Record> {
    (1..=count)
        .map(|n| record(&format!("{prefix}-{n}"), score))
        .collect()
}

pub fn response(critical: Vec<Record>, at_risk: Vec<Record>, healthy: Vec<Record>) -> ScorecardResponse {
    ScorecardResponse {
        categories: vec![
            CategoryPayload {
                label: Category::Critical.label().to_string(),
                records: critical,
            },
            CategoryPayload {
                label: Category::AtRisk.label().to_string(),
                records: at_risk,
            },
            CategoryPayload {
                label: Category::Healthy.label().to_string(),
                records: healthy,
            },
        ],
    }
}

/// Scripted source. Swap the response or switch failures on between calls.
#[derive(Default)]
pub struct TestScorecardSource {
    response: Mutex<ScorecardResponse>,
    fail_with: Mutex<Option<ApiError>>,
    fetches: Mutex<u32>,
}

impl TestScorecardSource {
    pub fn ok(response: ScorecardResponse) -> Self {
        Self {
            response: Mutex::new(response),
            ..Self::default()
        }
    }

    pub fn set_response(&self, response: ScorecardResponse) {
        *self.response.lock().expect("response lock") = response;
    }

    pub fn fail_with(&self, code: ErrorCode, message: &str) {
        *self.fail_with.lock().expect("fail lock") = Some(ApiError::new(code, message));
    }

    pub fn recover(&self) {
        *self.fail_with.lock().expect("fail lock") = None;
    }

    pub fn fetches(&self) -> u32 {
        *self.fetches.lock().expect("fetch lock")
    }
}

#[async_trait]
impl ScorecardSource for TestScorecardSource {
    async fn fetch_scorecard(&self) -> Result<ScorecardResponse, FetchError> {
        *self.fetches.lock().expect("fetch lock") += 1;
        if let Some(err) = self.fail_with.lock().expect("fail lock").clone() {
            return Err(FetchError::Remote(err));
        }
        Ok(self.response.lock().expect("response lock").clone())
    }

    async fn completion_suggestions(
        &self,
        account_id: &AccountId,
    ) -> Result<CompletionSuggestions, FetchError> {
        if let Some(err) = self.fail_with.lock().expect("fail lock").clone() {
            return Err(FetchError::Remote(err));
        }
        let response = self.response.lock().expect("response lock");
        response
            .categories
            .iter()
            .flat_map(|payload| payload.records.iter())
            .find(|record| &record.id == account_id)
            .map(|record| CompletionSuggestions {
                account_id: record.id.clone(),
                missing_fields: record.missing_fields.join(", "),
            })
            .ok_or_else(|| FetchError::Remote(ApiError::new(ErrorCode::NotFound, "no such account")))
    }
}

#[derive(Default, Clone)]
pub struct RecordingSink {
    toasts: Arc<Mutex<Vec<Toast>>>,
}

impl RecordingSink {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().expect("toast lock").clone()
    }
}

impl NotificationSink for RecordingSink {
    fn notify(&self, toast: Toast) {
        self.toasts.lock().expect("toast lock").push(toast);
    }
}
