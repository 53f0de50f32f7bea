//! Lead quality summary card: the average lead score plus a paged list of
//! poorly scored leads.

use std::{num::NonZeroUsize, sync::Arc};

use serde::Serialize;
use shared::protocol::{LeadQualitySummary, LeadRow};
use tracing::{debug, warn};

use crate::{health::QualityRating, FetchError, LeadSummarySource, PageWindow, Paginator};

/// Poor leads shown per page on the summary card.
pub const LEAD_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(size) => size,
    None => unreachable!(),
};

#[derive(Debug, Clone, Serialize)]
pub struct LeadSummaryView {
    pub is_loading: bool,
    pub error: Option<String>,
    pub average_score: Option<f64>,
    pub rating: Option<&'static str>,
    pub rows: Vec<LeadRow>,
    pub page_label: String,
    pub is_first_page: bool,
    pub is_last_page: bool,
    pub show_pagination: bool,
}

#[derive(Debug)]
pub struct LeadSummaryBoard {
    average_score: Option<f64>,
    paginator: Paginator<LeadRow>,
    error: Option<String>,
}

impl Default for LeadSummaryBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl LeadSummaryBoard {
    pub fn new() -> Self {
        Self {
            average_score: None,
            paginator: Paginator::new(LEAD_PAGE_SIZE),
            error: None,
        }
    }

    pub async fn refresh<S>(&mut self, source: &S) -> PageWindow
    where
        S: LeadSummarySource + ?Sized,
    {
        let result = source.fetch_lead_summary().await;
        self.apply(result)
    }

    /// Replaces the card contents. A failed fetch clears the previous summary
    /// so a stale average is never shown beside the error.
    pub fn apply(&mut self, result: Result<LeadQualitySummary, FetchError>) -> PageWindow {
        match result {
            Ok(summary) => {
                debug!(
                    average = summary.average_score,
                    poor_leads = summary.poor_leads.len(),
                    "lead summary loaded"
                );
                self.error = None;
                self.average_score = Some(summary.average_score);
                self.paginator.set_data(Arc::from(summary.poor_leads))
            }
            Err(err) => {
                warn!(error = %err, "lead summary fetch failed");
                self.error = Some(err.user_message());
                self.average_score = None;
                self.paginator.set_data(Arc::from(Vec::new()))
            }
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

    pub fn current_window(&self) -> &[LeadRow] {
        self.paginator.current_window()
    }

    pub fn average_score(&self) -> Option<f64> {
        self.average_score
    }

    pub fn rating(&self) -> Option<QualityRating> {
        self.average_score.map(QualityRating::from_score)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.average_score.is_none() && self.error.is_none()
    }

    pub fn is_first_page(&self) -> bool {
        self.paginator.is_first_page()
    }

    pub fn is_last_page(&self) -> bool {
        self.paginator.is_last_page()
    }

    pub fn page_label(&self) -> String {
        format!(
            "Halaman {} dari {}",
            self.paginator.current_page(),
            self.paginator.total_pages()
        )
    }

    pub fn view(&self) -> LeadSummaryView {
        LeadSummaryView {
            is_loading: self.is_loading(),
            error: self.error.clone(),
            average_score: self.average_score,
            rating: self.rating().map(QualityRating::label),
            rows: self.current_window().to_vec(),
            page_label: self.page_label(),
            is_first_page: self.is_first_page(),
            is_last_page: self.is_last_page(),
            show_pagination: self.paginator.show_pagination(),
        }
    }
}

#[cfg(test)]
#[path = "tests/lead_summary_tests.rs"]
mod tests;
