//! Composes store, selector and paginator into the dashboard's display contract.

use std::num::NonZeroUsize;

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::domain::{AccountId, Category, Record};
use tracing::{debug, error, info};

use crate::{
    error::RefreshError,
    paginator::{PageWindow, Paginator},
    presentation::{category_style, CategoryStyle, RecordRow},
    selector::CategorySelector,
    store::DataStore,
    NotificationSink, ScorecardSource, Toast,
};

const SUGGESTIONS_TITLE: &str = "Saran Kelengkapan Data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationSummary {
    pub current_page: usize,
    pub total_pages: usize,
    pub start_record: usize,
    pub end_record: usize,
    pub total_records: usize,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub show_pagination: bool,
    pub label: String,
}

impl PaginationSummary {
    fn from_paginator<T>(paginator: &Paginator<T>) -> Self {
        let (start_record, end_record) = paginator.record_range_label();
        Self {
            current_page: paginator.current_page(),
            total_pages: paginator.total_pages(),
            start_record,
            end_record,
            total_records: paginator.total_records(),
            is_first_page: paginator.is_first_page(),
            is_last_page: paginator.is_last_page(),
            show_pagination: paginator.show_pagination(),
            label: paginator.page_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
    pub style: CategoryStyle,
}

/// Everything the rendering layer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScorecardView {
    pub active_category: Category,
    pub active_label: &'static str,
    pub rows: Vec<RecordRow>,
    pub pagination: PaginationSummary,
    pub categories: Vec<CategorySummary>,
    pub total_records: usize,
    pub average_score: i64,
    pub last_updated: Option<DateTime<Utc>>,
    pub is_loading: bool,
    pub error_message: Option<String>,
}

pub struct ScorecardController<S, N> {
    source: S,
    sink: N,
    store: DataStore,
    selector: CategorySelector,
    paginator: Paginator<Record>,
    last_error: Option<String>,
}

impl<S, N> ScorecardController<S, N>
where
    S: ScorecardSource,
    N: NotificationSink,
{
    pub fn new(source: S, sink: N, page_size: NonZeroUsize) -> Self {
        Self {
            source,
            sink,
            store: DataStore::new(),
            selector: CategorySelector::new(),
            paginator: Paginator::new(page_size),
            last_error: None,
        }
    }

    /// Refreshes the store. On success the active category is kept and its
    /// pagination restarts at page 1; on failure nothing changes except the
    /// error notification.
    pub async fn refresh(&mut self) -> Result<(), RefreshError> {
        match self.store.refresh(&self.source).await {
            Ok(()) => {
                self.last_error = None;
                let records = self.selector.current(&self.store);
                let window = self.paginator.set_data(records);
                info!(
                    category = %self.selector.active(),
                    total_pages = window.total_pages,
                    "scorecard refreshed"
                );
                Ok(())
            }
            Err(err) => {
                let message = err.user_message();
                self.last_error = Some(message.clone());
                self.sink.notify(Toast::error(message));
                Err(err)
            }
        }
    }

    pub fn select_category(&mut self, category: Category) -> PageWindow {
        let changed = self.selector.active() != category;
        let records = self.selector.select_category(category, &self.store);
        if changed {
            self.paginator.set_data(records)
        } else {
            self.paginator.window()
        }
    }

    pub fn next_page(&mut self) -> PageWindow {
        self.paginator.next()
    }

    pub fn previous_page(&mut self) -> PageWindow {
        self.paginator.previous()
    }

    pub fn go_to_page(&mut self, page: usize) -> PageWindow {
        self.paginator.go_to(page)
    }

    pub async fn request_suggestions(&self, account_id: &AccountId) {
        match self.source.completion_suggestions(account_id).await {
            Ok(suggestions) => {
                debug!(account = %account_id, "completion suggestions received");
                self.sink
                    .notify(Toast::sticky_info(SUGGESTIONS_TITLE, suggestions.missing_fields));
            }
            Err(err) => {
                error!(account = %account_id, error = %err, "error getting suggestions");
            }
        }
    }

    pub fn active_category(&self) -> Category {
        self.selector.active()
    }

    pub fn store(&self) -> &DataStore {
        &self.store
    }

    pub fn paginator(&self) -> &Paginator<Record> {
        &self.paginator
    }

    pub fn is_loading(&self) -> bool {
        !self.store.is_populated() && self.last_error.is_none()
    }

    pub fn view(&self) -> ScorecardView {
        let active = self.selector.active();
        ScorecardView {
            active_category: active,
            active_label: active.label(),
            rows: self
                .paginator
                .current_window()
                .iter()
                .map(|record| RecordRow::new(record, active))
                .collect(),
            pagination: PaginationSummary::from_paginator(&self.paginator),
            categories: Category::ALL
                .into_iter()
                .map(|category| CategorySummary {
                    category,
                    label: category.label(),
                    count: self.store.count_of(category),
                    style: category_style(category),
                })
                .collect(),
            total_records: self.store.total_records(),
            average_score: self.store.rounded_average_score(),
            last_updated: self.store.last_updated(),
            is_loading: self.is_loading(),
            error_message: self.last_error.clone(),
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
