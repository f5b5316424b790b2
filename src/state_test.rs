use super::*;
use super::test_helpers::{dummy_event, dummy_message};

// =============================================================
// RoomId
// =============================================================

#[test]
fn room_id_normalizes_case_and_whitespace() {
    let id = RoomId::parse("  lab1 ").expect("should parse");
    assert_eq!(id.as_str(), "LAB1");
    assert_eq!(id.to_string(), "LAB1");
}

#[test]
fn room_id_equality_is_case_insensitive_via_normalization() {
    let a = RoomId::parse("lab1").expect("should parse");
    let b = RoomId::parse("LAB1").expect("should parse");
    assert_eq!(a, b);
}

#[test]
fn room_id_rejects_empty_and_oversized_and_symbols() {
    assert!(RoomId::parse("").is_err());
    assert!(RoomId::parse("   ").is_err());
    assert!(RoomId::parse("A".repeat(17).as_str()).is_err());
    assert!(RoomId::parse("LAB-1").is_err());
}

#[test]
fn room_id_serde_validates_on_deserialize() {
    let ok: RoomId = serde_json::from_str("\"lab1\"").expect("valid id");
    assert_eq!(ok.as_str(), "LAB1");

    let bad: Result<RoomId, _> = serde_json::from_str("\"no spaces\"");
    assert!(bad.is_err());
}

// =============================================================
// Document model
// =============================================================

#[test]
fn room_document_default_is_empty() {
    let doc = RoomDocument::default();
    assert_eq!(doc.stress_level, 0);
    assert_eq!(doc.last_updated, 0);
    assert!(doc.events.is_empty());
    assert!(doc.chat.is_empty());
}

#[test]
fn room_document_uses_store_field_names() {
    let doc = RoomDocument { stress_level: 42, last_updated: 1_700_000_000_000, events: Vec::new(), chat: Vec::new() };
    let json = serde_json::to_value(&doc).expect("serialize");

    assert_eq!(json["stressLevel"], 42);
    assert_eq!(json["lastUpdated"], 1_700_000_000_000_i64);
}

#[test]
fn stored_event_flattens_on_the_wire() {
    let stored = dummy_event(50);
    let json = serde_json::to_value(&stored).expect("serialize");

    assert_eq!(json["threshold"], 50);
    assert_eq!(json["acknowledged"], false);
    assert!(json.get("id").is_some());
    assert!(json.get("event").is_none());

    let restored: StoredEvent = serde_json::from_value(json).expect("deserialize");
    assert_eq!(restored.id, stored.id);
    assert_eq!(restored.event, stored.event);
}

#[test]
fn chat_sender_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Sender::User).expect("serialize"), "user");
    assert_eq!(serde_json::to_value(Sender::Bot).expect("serialize"), "bot");
}

#[test]
fn stored_message_round_trip() {
    let stored = dummy_message(Sender::Bot, "try a short walk", 12_345);
    let json = serde_json::to_string(&stored).expect("serialize");
    let restored: StoredMessage = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored.id, stored.id);
    assert_eq!(restored.message, stored.message);
}

// =============================================================
// Roles
// =============================================================

#[test]
fn client_role_parses_known_values() {
    assert_eq!(ClientRole::from_query("watch"), Some(ClientRole::Watch));
    assert_eq!(ClientRole::from_query("dashboard"), Some(ClientRole::Dashboard));
    assert_eq!(ClientRole::from_query("operator"), Some(ClientRole::Operator));
    assert_eq!(ClientRole::from_query("admin"), None);
}

#[test]
fn room_state_new_is_empty() {
    let room = RoomState::new();
    assert!(room.clients.is_empty());
    assert_eq!(room.doc.stress_level, 0);
}
