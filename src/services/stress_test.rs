use super::*;
use crate::state::Sender;
use crate::state::test_helpers::{dummy_event, dummy_message, seed_room, test_app_state};

#[tokio::test]
async fn set_level_writes_level_and_timestamp() {
    let state = test_app_state();
    let rid = seed_room(&state, "LAB1").await;

    let (level, last_updated) = set_level(&state, &rid, 72, 1_700_000_000_000).await;

    assert_eq!(level, 72);
    assert_eq!(last_updated, 1_700_000_000_000);

    let rooms = state.rooms.read().await;
    let doc = &rooms.get(&rid).expect("room should exist").doc;
    assert_eq!(doc.stress_level, 72);
    assert_eq!(doc.last_updated, 1_700_000_000_000);
}

#[tokio::test]
async fn set_level_clamps_out_of_range_values() {
    let state = test_app_state();
    let rid = seed_room(&state, "LAB1").await;

    let (high, _) = set_level(&state, &rid, 250, 1).await;
    assert_eq!(high, 100);

    let (low, _) = set_level(&state, &rid, -40, 2).await;
    assert_eq!(low, 0);
}

#[tokio::test]
async fn set_level_preserves_events_and_chat() {
    let state = test_app_state();
    let rid = seed_room(&state, "LAB1").await;
    {
        let mut rooms = state.rooms.write().await;
        let room = rooms.get_mut(&rid).expect("room should exist");
        room.doc.events.push(dummy_event(25));
        room.doc.chat.push(dummy_message(Sender::Bot, "breathe with me", 5));
    }

    set_level(&state, &rid, 30, 10).await;

    let rooms = state.rooms.read().await;
    let doc = &rooms.get(&rid).expect("room should exist").doc;
    assert_eq!(doc.events.len(), 1);
    assert_eq!(doc.chat.len(), 1);
}

#[tokio::test]
async fn set_level_creates_missing_room() {
    let state = test_app_state();
    let rid = crate::state::test_helpers::room_id("FRESH");

    set_level(&state, &rid, 10, 1).await;

    let rooms = state.rooms.read().await;
    assert_eq!(rooms.get(&rid).expect("room should exist").doc.stress_level, 10);
}
