use super::*;
use crate::state::RoomId;
use crate::state::test_helpers::dummy_event;
use rand::SeedableRng;

#[test]
fn suggested_room_id_is_four_uppercase_alphanumerics() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    let suggestion = suggest_room_id(&mut rng);

    assert_eq!(suggestion.len(), 4);
    assert!(suggestion.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
}

#[test]
fn suggested_room_id_parses_as_valid_room_id() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(1);
    let suggestion = suggest_room_id(&mut rng);
    assert!(RoomId::parse(&suggestion).is_ok());
}

#[test]
fn set_level_clamps_to_scale() {
    let mut panel = OperatorState::new();
    assert_eq!(panel.set_level(80), 80);
    assert_eq!(panel.set_level(200), 100);
    assert_eq!(panel.stress_level, 100);
}

#[test]
fn event_log_shows_full_snapshot() {
    let mut panel = OperatorState::new();

    panel.apply_events(&[dummy_event(25)]);
    assert_eq!(panel.events.len(), 1);

    // Snapshots replace wholesale, including after a room reset.
    panel.apply_events(&[dummy_event(25), dummy_event(50)]);
    assert_eq!(panel.events.len(), 2);
    panel.apply_events(&[]);
    assert!(panel.events.is_empty());
}
