//! Threshold-event service — append-only event list with generated ids.
//!
//! DESIGN
//! ======
//! The watch appends one record per detected upward crossing; the store
//! assigns the id and the position at the end of the room's list, so vector
//! order is detection order. Consumers diff full-list snapshots against a
//! remembered count (`client::events::EventFeed`), which is why every
//! append broadcasts the whole list rather than a delta.

use uuid::Uuid;

use crate::frame::ErrorCode;
use crate::state::{AppState, RoomId, StoredEvent, THRESHOLDS, ThresholdEvent};

#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("unknown threshold: {0}")]
    BadThreshold(i64),
}

impl ErrorCode for EventError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BadThreshold(_) => "E_BAD_THRESHOLD",
        }
    }
}

/// Append a threshold event and return the full event list.
///
/// # Errors
///
/// Returns `EventError::BadThreshold` if `threshold` is not one of the
/// fixed alert thresholds.
pub async fn append_event(
    state: &AppState,
    room_id: &RoomId,
    threshold: i64,
    now: i64,
) -> Result<Vec<StoredEvent>, EventError> {
    let threshold = u8::try_from(threshold)
        .ok()
        .filter(|t| THRESHOLDS.contains(t))
        .ok_or(EventError::BadThreshold(threshold))?;

    let mut rooms = state.rooms.write().await;
    let room = rooms.entry(room_id.clone()).or_default();
    room.doc.events.push(StoredEvent {
        id: Uuid::new_v4(),
        event: ThresholdEvent { threshold, timestamp: now, acknowledged: false },
    });

    Ok(room.doc.events.clone())
}

#[cfg(test)]
#[path = "event_test.rs"]
mod tests;
