//! Display classes derived from category and score.

use serde::Serialize;
use shared::domain::{AccountId, Category, Record};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub icon_name: &'static str,
    pub icon_variant: &'static str,
    pub accent_colour: &'static str,
    pub score_class: &'static str,
    pub level_class: &'static str,
}

const LEVEL_BADGE: &str = "slds-badge slds-badge_lightest";

pub fn category_style(category: Category) -> CategoryStyle {
    match category {
        Category::Critical => CategoryStyle {
            icon_name: "utility:error",
            icon_variant: "error",
            accent_colour: "#c23934",
            score_class: "slds-text-color_error slds-text-title_bold",
            level_class: LEVEL_BADGE,
        },
        Category::AtRisk => CategoryStyle {
            icon_name: "utility:warning",
            icon_variant: "warning",
            accent_colour: "#dd7a01",
            score_class: "slds-text-color_default slds-text-title_bold",
            level_class: LEVEL_BADGE,
        },
        Category::Healthy => CategoryStyle {
            icon_name: "utility:success",
            icon_variant: "success",
            accent_colour: "#2e844a",
            score_class: "slds-text-color_success slds-text-title_bold",
            level_class: LEVEL_BADGE,
        },
    }
}

pub fn account_detail_path(id: &AccountId) -> String {
    format!("/lightning/r/Account/{id}/view")
}

/// One table row of the active category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordRow {
    pub id: AccountId,
    pub name: String,
    pub owner_name: String,
    pub completeness_score: f64,
    pub level: &'static str,
    pub missing_fields: String,
    pub detail_path: String,
    pub score_class: &'static str,
    pub level_class: &'static str,
}

impl RecordRow {
    pub fn new(record: &Record, category: Category) -> Self {
        let style = category_style(category);
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            owner_name: record.owner_name.clone(),
            completeness_score: record.completeness_score,
            level: category.label(),
            missing_fields: record.missing_fields.join(", "),
            detail_path: account_detail_path(&record.id),
            score_class: style.score_class,
            level_class: style.level_class,
        }
    }
}
