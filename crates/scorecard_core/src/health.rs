//! Score-to-rating thresholds for the account health and lead quality cards.

use serde::Serialize;
use shared::protocol::AccountHealthDetails;

/// Completeness score that fills the health progress bar.
pub const COMPLETENESS_SCORE_MAX: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthRating {
    Excellent,
    Healthy,
    AtRisk,
    Poor,
}

impl HealthRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            HealthRating::Excellent
        } else if score >= 60.0 {
            HealthRating::Healthy
        } else if score >= 40.0 {
            HealthRating::AtRisk
        } else {
            HealthRating::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthRating::Excellent => "EXCELLENT",
            HealthRating::Healthy => "HEALTHY",
            HealthRating::AtRisk => "AT RISK",
            HealthRating::Poor => "POOR",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            HealthRating::Excellent => "excellent",
            HealthRating::Healthy => "healthy",
            HealthRating::AtRisk => "at-risk",
            HealthRating::Poor => "poor",
        }
    }

    pub fn score_class(self) -> String {
        format!("score-display score-{}", self.slug())
    }

    pub fn badge_class(self) -> String {
        format!("slds-badge slds-badge_inverse badge-{}", self.slug())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileStatus {
    Success,
    Warning,
    Error,
    Neutral,
}

impl TileStatus {
    pub fn class(self) -> &'static str {
        match self {
            TileStatus::Success => "health-tile tile-success",
            TileStatus::Warning => "health-tile tile-warning",
            TileStatus::Error => "health-tile tile-error",
            TileStatus::Neutral => "health-tile tile-neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    AllGood,
    UnderControl,
    NeedsAttention,
}

impl CaseStatus {
    pub fn from_open_cases(cases: u32) -> Self {
        match cases {
            0 => CaseStatus::AllGood,
            1..=2 => CaseStatus::UnderControl,
            _ => CaseStatus::NeedsAttention,
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            CaseStatus::AllGood => "All Good",
            CaseStatus::UnderControl => "Under Control",
            CaseStatus::NeedsAttention => "Needs Attention",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            CaseStatus::AllGood => "status-good",
            CaseStatus::UnderControl => "status-warning",
            CaseStatus::NeedsAttention => "status-error",
        }
    }
}

/// Derived view of one account's health details. `None` details render as
/// neutral tiles with a zero score.
#[derive(Debug, Clone, Default)]
pub struct AccountHealth {
    details: Option<AccountHealthDetails>,
}

impl AccountHealth {
    pub fn new(details: Option<AccountHealthDetails>) -> Self {
        Self { details }
    }

    pub fn overall_score(&self) -> f64 {
        self.details
            .as_ref()
            .map_or(0.0, |details| details.overall_health_score)
    }

    pub fn rating(&self) -> HealthRating {
        HealthRating::from_score(self.overall_score())
    }

    pub fn sales_tile(&self) -> TileStatus {
        match &self.details {
            Some(details) if details.open_opps_count > 0 => TileStatus::Success,
            _ => TileStatus::Neutral,
        }
    }

    pub fn support_tile(&self) -> TileStatus {
        let Some(details) = &self.details else {
            return TileStatus::Neutral;
        };
        match details.open_cases_count.unwrap_or(0) {
            0 => TileStatus::Success,
            1..=2 => TileStatus::Warning,
            _ => TileStatus::Error,
        }
    }

    pub fn engagement_tile(&self) -> TileStatus {
        match &self.details {
            Some(details) if details.contact_count > 5 => TileStatus::Success,
            _ => TileStatus::Neutral,
        }
    }

    pub fn completeness_tile(&self) -> TileStatus {
        let Some(details) = &self.details else {
            return TileStatus::Neutral;
        };
        if details.completeness_score >= 16.0 {
            TileStatus::Success
        } else if details.completeness_score >= 10.0 {
            TileStatus::Warning
        } else {
            TileStatus::Error
        }
    }

    /// Width of the completeness bar, in percent.
    pub fn completeness_percent(&self) -> f64 {
        let score = self
            .details
            .as_ref()
            .map_or(0.0, |details| details.completeness_score);
        score * 100.0 / COMPLETENESS_SCORE_MAX
    }

    /// Open opportunity value as Rupiah, e.g. `Rp 250.000.000`.
    pub fn formatted_opp_value(&self) -> String {
        format_idr(
            self.details
                .as_ref()
                .map_or(0.0, |details| details.open_opps_value),
        )
    }

    pub fn missing_fields(&self) -> &[String] {
        self.details
            .as_ref()
            .map(|details| details.missing_fields.as_slice())
            .unwrap_or_default()
    }

    pub fn case_status(&self) -> Option<CaseStatus> {
        self.details
            .as_ref()
            .and_then(|details| details.open_cases_count)
            .map(CaseStatus::from_open_cases)
    }
}

/// Formats an amount the way `id-ID` renders IDR: no decimals, `.` between
/// thousands, non-breaking space after `Rp`.
pub fn format_idr(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}Rp\u{a0}{grouped}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityRating {
    Outstanding,
    Good,
    Fair,
    NeedsAttention,
}

impl QualityRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 90.0 {
            QualityRating::Outstanding
        } else if score >= 70.0 {
            QualityRating::Good
        } else if score >= 50.0 {
            QualityRating::Fair
        } else {
            QualityRating::NeedsAttention
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityRating::Outstanding => "Luar Biasa",
            QualityRating::Good => "Baik",
            QualityRating::Fair => "Cukup",
            QualityRating::NeedsAttention => "Perlu Perhatian",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            QualityRating::Outstanding => "slds-badge slds-text-heading_small rating-great",
            QualityRating::Good => "slds-badge slds-text-heading_small rating-good",
            QualityRating::Fair | QualityRating::NeedsAttention => {
                "slds-badge slds-text-heading_small rating-poor"
            }
        }
    }
}

/// A lead field and its current value, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub label: String,
    pub value: Option<String>,
}

impl FieldCheck {
    pub fn new(label: impl Into<String>, value: Option<String>) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn is_filled(&self) -> bool {
        self.value
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    }
}

/// Percentage of filled fields, rounded to the nearest integer.
pub fn quality_score(checks: &[FieldCheck]) -> u32 {
    if checks.is_empty() {
        return 0;
    }
    let filled = checks.iter().filter(|check| check.is_filled()).count();
    (filled as f64 / checks.len() as f64 * 100.0).round() as u32
}

pub fn recommendations(checks: &[FieldCheck]) -> Vec<&str> {
    checks
        .iter()
        .filter(|check| !check.is_filled())
        .map(|check| check.label.as_str())
        .collect()
}

pub fn recommendation_text(missing: &[&str]) -> Option<String> {
    match missing {
        [] => None,
        [only] => Some(format!("Lengkapi field {only}.")),
        many => Some(format!("Lengkapi field: {}.", many.join(", "))),
    }
}

#[cfg(test)]
#[path = "tests/health_tests.rs"]
mod tests;
