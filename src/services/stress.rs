//! Stress-level service — clamped partial update of the room document.
//!
//! DESIGN
//! ======
//! Mirrors the store's partial-field update: only `stress_level` and
//! `last_updated` change, events and chat are preserved. Out-of-range
//! writes clamp to 0-100 rather than erroring; the level is
//! last-writer-wins between the watch and the operator panel.

use crate::state::{AppState, RoomId};

/// Set the room's stress level. Returns the clamped level and the new
/// `last_updated` timestamp.
pub async fn set_level(state: &AppState, room_id: &RoomId, level: i64, now: i64) -> (u8, i64) {
    let clamped = u8::try_from(level.clamp(0, 100)).unwrap_or(0);

    let mut rooms = state.rooms.write().await;
    let room = rooms.entry(room_id.clone()).or_default();
    room.doc.stress_level = clamped;
    room.doc.last_updated = now;

    (clamped, now)
}

#[cfg(test)]
#[path = "stress_test.rs"]
mod tests;
