#[cfg(test)]
#[path = "operator_test.rs"]
mod operator_test;

use rand::Rng;

use crate::state::StoredEvent;

const ROOM_ID_SUGGESTION_LEN: usize = 4;
const ROOM_ID_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Suggest a short random room id for a fresh session.
pub fn suggest_room_id<R: Rng>(rng: &mut R) -> String {
    (0..ROOM_ID_SUGGESTION_LEN)
        .map(|_| char::from(ROOM_ID_CHARSET[rng.random_range(0..ROOM_ID_CHARSET.len())]))
        .collect()
}

/// Operator panel state: the slider level plus the full event log.
#[derive(Clone, Debug, Default)]
pub struct OperatorState {
    pub stress_level: u8,
    pub events: Vec<StoredEvent>,
}

impl OperatorState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slider write. Returns the clamped level to publish.
    pub fn set_level(&mut self, level: u8) -> u8 {
        self.stress_level = level.min(100);
        self.stress_level
    }

    /// The operator log shows every event, so snapshots replace wholesale.
    pub fn apply_events(&mut self, events: &[StoredEvent]) {
        self.events = events.to_vec();
    }
}
