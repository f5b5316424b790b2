#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use crate::state::{StoredEvent, ThresholdEvent};

/// Consumer side of event replication.
///
/// The store delivers the full event list on every change, including echoes
/// of snapshots already seen. The feed remembers how many entries it has
/// processed and yields exactly the unseen suffix, in store order.
#[derive(Clone, Debug, Default)]
pub struct EventFeed {
    last_seen: usize,
}

/// Result of applying one snapshot.
#[derive(Clone, Debug, Default)]
pub struct SnapshotDiff {
    /// Events not processed before, in store order.
    pub fresh: Vec<ThresholdEvent>,
    /// True when the list shrank: the room was reset upstream.
    pub reset: bool,
}

impl EventFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a full-list snapshot.
    ///
    /// Redelivery of an unchanged snapshot yields an empty diff. A shrink
    /// drops the remembered count to zero and treats the delivered list as
    /// entirely new growth, so events appended right after a room reset are
    /// not lost.
    pub fn apply_snapshot(&mut self, events: &[StoredEvent]) -> SnapshotDiff {
        let reset = events.len() < self.last_seen;
        if reset {
            self.last_seen = 0;
        }

        let fresh = events[self.last_seen..].iter().map(|e| e.event).collect();
        self.last_seen = events.len();
        SnapshotDiff { fresh, reset }
    }

    /// Number of events processed so far.
    #[must_use]
    pub fn seen(&self) -> usize {
        self.last_seen
    }
}
