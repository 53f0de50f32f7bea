use super::*;
use crate::{
    error::FetchError,
    test_support::{record, records, response, TestScorecardSource},
};
use shared::{
    domain::AccountId,
    error::{ApiError, ErrorCode},
    protocol::CategoryPayload,
};

#[test]
fn empty_store_averages_to_zero() {
    let store = DataStore::new();
    assert_eq!(store.average_score(), 0.0);
    assert_eq!(store.total_records(), 0);
    assert!(!store.is_populated());
    for category in Category::ALL {
        assert_eq!(store.count_of(category), 0);
        assert!(store.records_of(category).is_empty());
    }
}

#[tokio::test]
async fn average_spans_every_category() {
    let source = TestScorecardSource::ok(response(
        vec![record("a", 10.0)],
        Vec::new(),
        vec![record("b", 20.0)],
    ));
    let mut store = DataStore::new();
    store.refresh(&source).await.expect("refresh");

    assert_eq!(store.average_score(), 15.0);
    assert_eq!(store.rounded_average_score(), 15);
    assert!(store.last_updated().is_some());
}

#[tokio::test]
async fn records_keep_upstream_order() {
    let source = TestScorecardSource::ok(response(
        vec![record("z", 5.0), record("a", 1.0), record("m", 3.0)],
        Vec::new(),
        Vec::new(),
    ));
    let mut store = DataStore::new();
    store.refresh(&source).await.expect("refresh");

    let ids: Vec<_> = store
        .records_of(Category::Critical)
        .iter()
        .map(|record| record.id.as_str().to_string())
        .collect();
    assert_eq!(ids, ["z", "a", "m"]);
}

#[tokio::test]
async fn failed_refresh_keeps_previous_counts() {
    let source = TestScorecardSource::ok(response(
        records("c", 3, 20.0),
        records("r", 2, 50.0),
        records("h", 4, 90.0),
    ));
    let mut store = DataStore::new();
    store.refresh(&source).await.expect("first refresh");
    let before: Vec<_> = Category::ALL.map(|c| store.count_of(c)).to_vec();
    let stamped = store.last_updated();

    source.set_response(response(Vec::new(), Vec::new(), Vec::new()));
    source.fail_with(ErrorCode::Unavailable, "service down");
    let err = store.refresh(&source).await.expect_err("refresh should fail");

    assert!(matches!(err, RefreshError::Fetch(FetchError::Remote(_))));
    assert_eq!(Category::ALL.map(|c| store.count_of(c)).to_vec(), before);
    assert_eq!(store.last_updated(), stamped);
}

#[tokio::test]
async fn refresh_replaces_every_sequence_wholesale() {
    let source = TestScorecardSource::ok(response(
        records("c", 3, 20.0),
        records("r", 2, 50.0),
        Vec::new(),
    ));
    let mut store = DataStore::new();
    store.refresh(&source).await.expect("first refresh");

    source.set_response(response(Vec::new(), Vec::new(), records("h", 1, 95.0)));
    store.refresh(&source).await.expect("second refresh");

    assert_eq!(store.count_of(Category::Critical), 0);
    assert_eq!(store.count_of(Category::AtRisk), 0);
    assert_eq!(store.count_of(Category::Healthy), 1);
}

#[test]
fn apply_is_last_completion_wins() {
    let first = ScorecardSnapshot::from_response(response(records("c", 1, 10.0), Vec::new(), Vec::new()))
        .expect("first");
    let second = ScorecardSnapshot::from_response(response(Vec::new(), records("r", 2, 40.0), Vec::new()))
        .expect("second");

    let mut store = DataStore::new();
    store.apply(Ok(second)).expect("second completes first");
    store.apply(Ok(first)).expect("first completes last");

    assert_eq!(store.count_of(Category::Critical), 1);
    assert_eq!(store.count_of(Category::AtRisk), 0);
}

#[test]
fn snapshot_rejects_unknown_labels() {
    let payload = ScorecardResponse {
        categories: vec![CategoryPayload {
            label: "Data Sedang".to_string(),
            records: Vec::new(),
        }],
    };
    assert_eq!(
        ScorecardSnapshot::from_response(payload).expect_err("unknown label"),
        SnapshotError::UnknownCategory {
            label: "Data Sedang".to_string()
        }
    );
}

#[test]
fn snapshot_rejects_record_in_two_categories() {
    let payload = response(vec![record("dup", 10.0)], vec![record("dup", 50.0)], Vec::new());
    assert_eq!(
        ScorecardSnapshot::from_response(payload).expect_err("duplicate"),
        SnapshotError::DuplicateRecord {
            id: AccountId::new("dup"),
            first: Category::Critical,
            second: Category::AtRisk,
        }
    );
}

#[test]
fn snapshot_rejects_repeated_category_and_nan_scores() {
    let mut payload = response(Vec::new(), Vec::new(), Vec::new());
    payload.categories.push(CategoryPayload {
        label: "critical".to_string(),
        records: Vec::new(),
    });
    assert_eq!(
        ScorecardSnapshot::from_response(payload).expect_err("repeated"),
        SnapshotError::DuplicateCategory {
            category: Category::Critical
        }
    );

    let payload = response(vec![record("nan", f64::NAN)], Vec::new(), Vec::new());
    assert!(matches!(
        ScorecardSnapshot::from_response(payload),
        Err(SnapshotError::NonFiniteScore { .. })
    ));
}

#[test]
fn missing_categories_are_empty() {
    let payload = ScorecardResponse {
        categories: vec![CategoryPayload {
            label: "Data Lengkap".to_string(),
            records: records("h", 2, 99.0),
        }],
    };
    let snapshot = ScorecardSnapshot::from_response(payload).expect("snapshot");
    assert_eq!(snapshot.count_of(Category::Healthy), 2);
    assert_eq!(snapshot.count_of(Category::Critical), 0);
    assert!(snapshot.records_of(Category::AtRisk).is_empty());
}

#[test]
fn remote_error_message_prefers_body_then_fallback() {
    let with_body = FetchError::Remote(ApiError::new(ErrorCode::Internal, "Apex limit hit"));
    assert_eq!(with_body.user_message(), "Apex limit hit");

    let without_body = FetchError::Remote(ApiError::new(ErrorCode::Internal, "  "));
    assert_eq!(without_body.user_message(), crate::error::UNKNOWN_ERROR_MESSAGE);

    let transport = FetchError::Transport("connection reset".to_string());
    assert_eq!(transport.user_message(), "connection reset");

    let blank = FetchError::Transport(String::new());
    assert_eq!(blank.user_message(), crate::error::UNKNOWN_ERROR_MESSAGE);
}

#[test]
fn snapshot_rejects_scores_outside_percentage_range() {
    let payload = response(vec![record("hi", 150.0)], Vec::new(), Vec::new());
    assert_eq!(
        ScorecardSnapshot::from_response(payload).expect_err("above range"),
        SnapshotError::ScoreOutOfRange {
            id: AccountId::new("hi"),
            score: 150.0,
        }
    );

    let payload = response(Vec::new(), vec![record("lo", -20.0)], Vec::new());
    assert!(matches!(
        ScorecardSnapshot::from_response(payload),
        Err(SnapshotError::ScoreOutOfRange { .. })
    ));

    let payload = response(vec![record("zero", 0.0)], Vec::new(), vec![record("full", 100.0)]);
    assert!(ScorecardSnapshot::from_response(payload).is_ok());
}

#[tokio::test]
async fn out_of_range_refresh_keeps_previous_average() {
    let source = TestScorecardSource::ok(response(vec![record("a", 40.0)], Vec::new(), Vec::new()));
    let mut store = DataStore::new();
    store.refresh(&source).await.expect("refresh");

    source.set_response(response(vec![record("a", 40.0), record("b", 150.0)], Vec::new(), Vec::new()));
    let err = store.refresh(&source).await.expect_err("out of range");
    assert!(matches!(err, RefreshError::Processing(SnapshotError::ScoreOutOfRange { .. })));
    assert_eq!(store.average_score(), 40.0);
    assert_eq!(store.count_of(Category::Critical), 1);
}
