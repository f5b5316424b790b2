#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::client::activities;

/// How long a toast stays on screen without user action.
pub const TOAST_TTL_MS: i64 = 5_000;

/// A transient, time-boxed notification card.
///
/// Several may coexist, but the presentation layer renders only the most
/// recently created one.
#[derive(Clone, Debug)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub threshold: u8,
    pub suggested_activity: &'static str,
    pub created_at: i64,
}

/// Session-lifetime record of a notification and its resolution.
///
/// `was_snoozed` and `activity_performed` are independent and monotonic:
/// once true, never reset.
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    pub id: u64,
    pub message: String,
    pub threshold: u8,
    pub timestamp: i64,
    pub suggested_activity: &'static str,
    pub was_snoozed: bool,
    pub activity_performed: bool,
    /// The activity eventually completed for this notification, if any.
    pub chosen_activity: Option<&'static str>,
}

/// Dashboard-local notification lifecycle: toasts plus permanent history.
///
/// Each observed threshold event maps to exactly one history entry and at
/// most one live toast, sharing a locally unique increasing id.
#[derive(Clone, Debug, Default)]
pub struct NotificationCenter {
    toasts: Vec<Toast>,
    history: Vec<HistoryEntry>,
    next_id: u64,
}

impl NotificationCenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the `Fired` state for a newly observed event: show a toast and
    /// record a history entry. Returns the shared id.
    pub fn fire(&mut self, threshold: u8, now: i64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        let message = format!("Stress level reached {threshold}%!");
        let suggested = activities::suggested_for(threshold).name;

        self.toasts.push(Toast {
            id,
            message: message.clone(),
            threshold,
            suggested_activity: suggested,
            created_at: now,
        });
        self.history.push(HistoryEntry {
            id,
            message,
            threshold,
            timestamp: now,
            suggested_activity: suggested,
            was_snoozed: false,
            activity_performed: false,
            chosen_activity: None,
        });
        id
    }

    /// The toast currently rendered: the most recently created live one.
    #[must_use]
    pub fn visible_toast(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    /// All live toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// All history entries, oldest first.
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Look up a history entry by notification id.
    #[must_use]
    pub fn entry(&self, id: u64) -> Option<&HistoryEntry> {
        self.history.iter().find(|e| e.id == id)
    }

    /// Snooze from the toast: flag the history entry and drop the toast.
    /// The entry stays visitable and re-actionable later.
    pub fn snooze(&mut self, id: u64) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };
        entry.was_snoozed = true;
        self.remove_toast(id);
        true
    }

    /// Remove a toast without touching its history entry (the "act" path).
    /// A no-op when the toast is already gone.
    pub fn dismiss_toast(&mut self, id: u64) -> bool {
        self.remove_toast(id)
    }

    /// Timer-driven expiry. A late call after snooze/act is a no-op; the
    /// history entry persists with both flags unchanged.
    pub fn expire(&mut self, id: u64) -> bool {
        self.remove_toast(id)
    }

    /// Mark the bound activity completed on the entry.
    pub fn mark_completed(&mut self, id: u64, activity: &'static str) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };
        entry.activity_performed = true;
        entry.chosen_activity = Some(activity);
        true
    }

    fn entry_mut(&mut self, id: u64) -> Option<&mut HistoryEntry> {
        self.history.iter_mut().find(|e| e.id == id)
    }

    fn remove_toast(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }
}
