//! Room service — join/part, reset, and broadcast.
//!
//! DESIGN
//! ======
//! A room is created empty the first time anything touches it: an absent or
//! malformed document reads as "level 0, no events", never as an error.
//! Rooms are never evicted while the server runs — with no backing store,
//! eviction would silently destroy the session. `room:reset` is the
//! explicit fresh start and must run before a new operator session so the
//! dashboard never replays stale events.
//!
//! Broadcast reaches every connected room client; the writer's own copy of
//! a change comes back as the reply to its request, which together with the
//! peer broadcast gives the store's "echo to all subscribers" contract.

use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

use crate::frame::{Data, Frame, now_ms};
use crate::state::{AppState, ClientHandle, ClientRole, RoomDocument, RoomId};

// =============================================================================
// JOIN / PART
// =============================================================================

/// Join a room, creating it empty if it does not exist yet.
/// Returns the current document snapshot.
pub async fn join_room(
    state: &AppState,
    room_id: &RoomId,
    client_id: Uuid,
    role: ClientRole,
    tx: mpsc::Sender<Frame>,
) -> RoomDocument {
    let mut rooms = state.rooms.write().await;
    let room = rooms.entry(room_id.clone()).or_default();
    room.clients.insert(client_id, ClientHandle { role, tx });

    info!(%room_id, %client_id, ?role, clients = room.clients.len(), "client joined room");
    room.doc.clone()
}

/// Leave a room. The document stays in memory for late rejoining clients.
pub async fn part_room(state: &AppState, room_id: &RoomId, client_id: Uuid) {
    let mut rooms = state.rooms.write().await;
    let Some(room) = rooms.get_mut(room_id) else {
        return;
    };

    room.clients.remove(&client_id);
    info!(%room_id, %client_id, remaining = room.clients.len(), "client left room");
}

/// Whole-document read. An absent room reads as the empty document without
/// being created.
pub async fn snapshot(state: &AppState, room_id: &RoomId) -> RoomDocument {
    let rooms = state.rooms.read().await;
    rooms.get(room_id).map(|room| room.doc.clone()).unwrap_or_default()
}

// =============================================================================
// RESET
// =============================================================================

/// Overwrite the room document with a fresh one (level 0, no events, no
/// chat). Returns the new snapshot.
pub async fn reset_room(state: &AppState, room_id: &RoomId) -> RoomDocument {
    let mut rooms = state.rooms.write().await;
    let room = rooms.entry(room_id.clone()).or_default();

    room.doc = RoomDocument { stress_level: 0, last_updated: now_ms(), events: Vec::new(), chat: Vec::new() };
    info!(%room_id, "room reset");
    room.doc.clone()
}

// =============================================================================
// BROADCAST
// =============================================================================

/// Broadcast a frame to all clients in a room, optionally excluding one.
pub async fn broadcast(state: &AppState, room_id: &RoomId, frame: &Frame, exclude: Option<Uuid>) {
    let rooms = state.rooms.read().await;
    let Some(room) = rooms.get(room_id) else {
        return;
    };

    for (client_id, handle) in &room.clients {
        if exclude == Some(*client_id) {
            continue;
        }
        // Best-effort: if a client's channel is full, skip it.
        let _ = handle.tx.try_send(frame.clone());
    }
}

// =============================================================================
// SNAPSHOT PAYLOADS
// =============================================================================

/// Wrap a whole-document snapshot as frame data.
#[must_use]
pub fn doc_data(doc: &RoomDocument) -> Data {
    let mut data = Data::new();
    data.insert("room".into(), serde_json::to_value(doc).unwrap_or_default());
    data
}

#[cfg(test)]
#[path = "room_test.rs"]
mod tests;
