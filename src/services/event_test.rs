use super::*;
use crate::state::test_helpers::{seed_room, test_app_state};

#[tokio::test]
async fn append_returns_full_list_in_insertion_order() {
    let state = test_app_state();
    let rid = seed_room(&state, "LAB1").await;

    let first = append_event(&state, &rid, 25, 100).await.expect("append 25");
    assert_eq!(first.len(), 1);

    let second = append_event(&state, &rid, 50, 200).await.expect("append 50");
    assert_eq!(second.len(), 2);
    assert_eq!(second[0].event.threshold, 25);
    assert_eq!(second[1].event.threshold, 50);
}

#[tokio::test]
async fn append_assigns_unique_ids_and_stamps_fields() {
    let state = test_app_state();
    let rid = seed_room(&state, "LAB1").await;

    append_event(&state, &rid, 75, 300).await.expect("append");
    let events = append_event(&state, &rid, 75, 400).await.expect("append");

    assert_ne!(events[0].id, events[1].id);
    assert_eq!(events[1].event.timestamp, 400);
    assert!(!events[1].event.acknowledged);
}

#[tokio::test]
async fn append_rejects_unknown_threshold() {
    let state = test_app_state();
    let rid = seed_room(&state, "LAB1").await;

    let err = append_event(&state, &rid, 60, 1).await.expect_err("60 is not a threshold");
    assert!(matches!(err, EventError::BadThreshold(60)));

    let err = append_event(&state, &rid, -1, 1).await.expect_err("negative threshold");
    assert!(matches!(err, EventError::BadThreshold(-1)));
}

#[tokio::test]
async fn append_error_code_is_grepable() {
    use crate::frame::ErrorCode;
    assert_eq!(EventError::BadThreshold(42).error_code(), "E_BAD_THRESHOLD");
    assert!(!EventError::BadThreshold(42).retryable());
}
