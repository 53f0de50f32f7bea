use serde::{Deserialize, Serialize};

use crate::{
    domain::{AccountId, Record},
    error::ApiError,
};

/// One labelled bucket as delivered by the scorecard endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub label: String,
    #[serde(default)]
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorecardResponse {
    #[serde(default)]
    pub categories: Vec<CategoryPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionSuggestions {
    pub account_id: AccountId,
    pub missing_fields: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountHealthDetails {
    pub overall_health_score: f64,
    #[serde(default)]
    pub open_opps_value: f64,
    #[serde(default)]
    pub open_opps_count: u32,
    #[serde(default)]
    pub open_cases_count: Option<u32>,
    #[serde(default)]
    pub contact_count: u32,
    #[serde(default)]
    pub completeness_score: f64,
    #[serde(default)]
    pub missing_fields: Vec<String>,
}

/// Either a scorecard or the remote's error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", content = "payload", rename_all = "snake_case")]
pub enum ScorecardEnvelope {
    Ok(ScorecardResponse),
    Error(ApiError),
}

/// A lead listed on the quality summary as needing attention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRow {
    pub name: String,
    pub score: f64,
    #[serde(default)]
    pub owner_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadQualitySummary {
    pub average_score: f64,
    #[serde(default)]
    pub poor_leads: Vec<LeadRow>,
}
