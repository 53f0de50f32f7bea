//! Holds the most recent scorecard snapshot, bucketed by category.

use std::{
    collections::{BTreeMap, HashMap},
    sync::Arc,
};

use chrono::{DateTime, Utc};
use shared::{
    domain::{Category, Record},
    protocol::ScorecardResponse,
};
use tracing::{error, info};

use crate::{
    error::{RefreshError, SnapshotError},
    ScorecardSource,
};

const SCORE_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// Validated, immutable set of records for every category.
#[derive(Debug, Clone)]
pub struct ScorecardSnapshot {
    buckets: BTreeMap<Category, Arc<[Record]>>,
}

impl Default for ScorecardSnapshot {
    fn default() -> Self {
        Self {
            buckets: Category::ALL
                .into_iter()
                .map(|category| (category, Arc::from(Vec::new())))
                .collect(),
        }
    }
}

impl ScorecardSnapshot {
    pub fn from_response(response: ScorecardResponse) -> Result<Self, SnapshotError> {
        let mut buckets: BTreeMap<Category, Vec<Record>> = BTreeMap::new();
        let mut seen = HashMap::new();

        for payload in response.categories {
            let category = Category::from_label(&payload.label).ok_or_else(|| {
                SnapshotError::UnknownCategory {
                    label: payload.label.clone(),
                }
            })?;
            if buckets.contains_key(&category) {
                return Err(SnapshotError::DuplicateCategory { category });
            }

            for record in &payload.records {
                if !record.completeness_score.is_finite() {
                    return Err(SnapshotError::NonFiniteScore {
                        id: record.id.clone(),
                    });
                }
                if !SCORE_RANGE.contains(&record.completeness_score) {
                    return Err(SnapshotError::ScoreOutOfRange {
                        id: record.id.clone(),
                        score: record.completeness_score,
                    });
                }
                if let Some(first) = seen.insert(record.id.clone(), category) {
                    if first != category {
                        return Err(SnapshotError::DuplicateRecord {
                            id: record.id.clone(),
                            first,
                            second: category,
                        });
                    }
                }
            }
            buckets.insert(category, payload.records);
        }

        let mut snapshot = Self::default();
        for (category, records) in buckets {
            snapshot.buckets.insert(category, records.into());
        }
        Ok(snapshot)
    }

    pub fn records_of(&self, category: Category) -> Arc<[Record]> {
        self.buckets
            .get(&category)
            .cloned()
            .unwrap_or_else(|| Arc::from(Vec::new()))
    }

    pub fn count_of(&self, category: Category) -> usize {
        self.buckets.get(&category).map_or(0, |records| records.len())
    }

    fn all_records(&self) -> impl Iterator<Item = &Record> {
        self.buckets.values().flat_map(|records| records.iter())
    }
}

#[derive(Debug, Default)]
pub struct DataStore {
    snapshot: ScorecardSnapshot,
    last_updated: Option<DateTime<Utc>>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches from `source` and swaps in the new snapshot. On any failure the
    /// previous snapshot is kept as-is.
    pub async fn refresh<S>(&mut self, source: &S) -> Result<(), RefreshError>
    where
        S: ScorecardSource + ?Sized,
    {
        let outcome = match source.fetch_scorecard().await {
            Ok(response) => ScorecardSnapshot::from_response(response).map_err(RefreshError::from),
            Err(err) => Err(RefreshError::from(err)),
        };
        self.apply(outcome)
    }

    /// Applies a completed fetch. The last completion applied wins.
    pub fn apply(
        &mut self,
        outcome: Result<ScorecardSnapshot, RefreshError>,
    ) -> Result<(), RefreshError> {
        match outcome {
            Ok(snapshot) => {
                self.snapshot = snapshot;
                self.last_updated = Some(Utc::now());
                info!(
                    critical = self.count_of(Category::Critical),
                    at_risk = self.count_of(Category::AtRisk),
                    healthy = self.count_of(Category::Healthy),
                    "scorecard snapshot replaced"
                );
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "scorecard refresh failed; keeping previous snapshot");
                Err(err)
            }
        }
    }

    pub fn count_of(&self, category: Category) -> usize {
        self.snapshot.count_of(category)
    }

    pub fn total_records(&self) -> usize {
        Category::ALL
            .into_iter()
            .map(|category| self.count_of(category))
            .sum()
    }

    /// Mean completeness score over every category; 0 when empty.
    pub fn average_score(&self) -> f64 {
        let total = self.total_records();
        if total == 0 {
            return 0.0;
        }
        let sum: f64 = self
            .snapshot
            .all_records()
            .map(|record| record.completeness_score)
            .sum();
        sum / total as f64
    }

    pub fn rounded_average_score(&self) -> i64 {
        self.average_score().round() as i64
    }

    pub fn records_of(&self, category: Category) -> Arc<[Record]> {
        self.snapshot.records_of(category)
    }

    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        self.last_updated
    }

    pub fn is_populated(&self) -> bool {
        self.last_updated.is_some()
    }
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
