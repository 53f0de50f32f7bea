use std::sync::Arc;

use shared::domain::{Category, Record};
use tracing::debug;

use crate::store::DataStore;

/// Tracks the active tab. Reads only from the store's current snapshot.
#[derive(Debug, Default, Clone)]
pub struct CategorySelector {
    active: Category,
}

impl CategorySelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Category {
        self.active
    }

    /// Makes `category` active and returns its full list. Re-selecting the
    /// active category only returns the list.
    pub fn select_category(&mut self, category: Category, store: &DataStore) -> Arc<[Record]> {
        if self.active != category {
            debug!(from = %self.active, to = %category, "switching active category");
            self.active = category;
        }
        let records = store.records_of(category);
        debug!(category = %category, records = records.len(), "category records");
        records
    }

    pub fn current(&self, store: &DataStore) -> Arc<[Record]> {
        store.records_of(self.active)
    }
}

#[cfg(test)]
#[path = "tests/selector_tests.rs"]
mod tests;
