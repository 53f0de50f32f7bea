use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }
    };
}

id_newtype!(AccountId);

/// Completeness tier assigned upstream. Never recomputed locally.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Critical,
    AtRisk,
    Healthy,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Critical, Category::AtRisk, Category::Healthy];

    /// Label used by the upstream scorecard and shown on the tab.
    pub fn label(self) -> &'static str {
        match self {
            Category::Critical => "Data Minim",
            Category::AtRisk => "Data Kurang",
            Category::Healthy => "Data Lengkap",
        }
    }

    /// Accepts the upstream label as well as the snake_case / CLI spelling.
    pub fn from_label(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(trimmed))
            .or_else(|| match trimmed.to_ascii_lowercase().replace('-', "_").as_str() {
                "critical" => Some(Category::Critical),
                "at_risk" | "atrisk" => Some(Category::AtRisk),
                "healthy" => Some(Category::Healthy),
                _ => None,
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    #[serde(alias = "Id")]
    pub id: AccountId,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "OwnerName", default)]
    pub owner_name: String,
    pub completeness_score: f64,
    #[serde(default)]
    pub missing_fields: Vec<String>,
}
