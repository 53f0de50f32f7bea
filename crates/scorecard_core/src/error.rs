use shared::{
    domain::{AccountId, Category},
    error::ApiError,
};
use thiserror::Error;

pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";

/// Failure reported by a [`crate::ScorecardSource`].
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("remote scorecard error: {0}")]
    Remote(#[from] ApiError),
    #[error("{0}")]
    Transport(String),
    #[error("malformed scorecard payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to read scorecard source: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// Message suitable for a toast: the remote body message when present,
    /// otherwise the error's own text, otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        let message = match self {
            FetchError::Remote(api) => api.body_message().unwrap_or_default().to_string(),
            FetchError::Transport(message) => message.trim().to_string(),
            other => other.to_string(),
        };
        if message.is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// The upstream payload could not be turned into a snapshot.
#[derive(Debug, Error, PartialEq)]
pub enum SnapshotError {
    #[error("unknown scorecard category label '{label}'")]
    UnknownCategory { label: String },
    #[error("category '{category}' delivered more than once")]
    DuplicateCategory { category: Category },
    #[error("record {id} appears in both '{first}' and '{second}'")]
    DuplicateRecord {
        id: AccountId,
        first: Category,
        second: Category,
    },
    #[error("record {id} has a non-finite completeness score")]
    NonFiniteScore { id: AccountId },
    #[error("record {id} has completeness score {score} outside 0..=100")]
    ScoreOutOfRange { id: AccountId, score: f64 },
}

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("error fetching data: {0}")]
    Fetch(#[from] FetchError),
    #[error("error processing data: {0}")]
    Processing(#[from] SnapshotError),
}

impl RefreshError {
    pub fn user_message(&self) -> String {
        match self {
            RefreshError::Fetch(err) => err.user_message(),
            RefreshError::Processing(err) => err.to_string(),
        }
    }
}
