#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::client::chat::ChatState;
use crate::client::events::EventFeed;
use crate::client::notifications::NotificationCenter;
use crate::client::stats::SessionStats;
use crate::state::{RoomId, StoredEvent};

/// Views reachable on the phone dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Activities,
    ActivityDetail,
    ActivityInstruction,
    History,
    DailyStats,
    Chat,
    Settings,
}

/// Session-wide dashboard state.
///
/// Every view and notification transition goes through a method here;
/// nothing is ambient. The whole struct is dropped on logout.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub room_id: Option<RoomId>,
    pub view: View,
    pub stress_level: u8,
    pub selected_activity: Option<&'static str>,
    /// Notification id the next activity selection is bound to. While set,
    /// selecting any activity routes into the instruction flow.
    pub pending_notification: Option<u64>,
    /// Activity awaiting a rating after "Done" on the instruction flow.
    pub rating_prompt: Option<&'static str>,
    pub notifications: NotificationCenter,
    pub feed: EventFeed,
    pub chat: ChatState,
    pub stats: SessionStats,
}

impl DashboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a room session.
    pub fn connect(&mut self, room_id: RoomId) {
        self.room_id = Some(room_id);
        self.view = View::Home;
    }

    /// Drop the whole session: toasts, history, stats, binding.
    pub fn logout(&mut self) {
        *self = Self::new();
    }

    pub fn navigate(&mut self, view: View) {
        self.view = view;
    }

    /// Replicated stress-level update. Idempotent under redelivery.
    pub fn apply_level(&mut self, level: u8) {
        self.stress_level = level.min(100);
    }

    /// Apply an event-list snapshot; fires one notification per fresh
    /// event. Returns the fired ids so the host can schedule toast expiry.
    pub fn apply_events(&mut self, events: &[StoredEvent], now: i64) -> Vec<u64> {
        let diff = self.feed.apply_snapshot(events);
        diff.fresh
            .iter()
            .map(|e| self.notifications.fire(e.threshold, now))
            .collect()
    }

    /// Context-sensitive selection: with a bound notification the selection
    /// routes into the instruction flow, otherwise to the plain detail view.
    pub fn select_activity(&mut self, name: &'static str) {
        self.selected_activity = Some(name);
        self.view = if self.pending_notification.is_some() {
            View::ActivityInstruction
        } else {
            View::ActivityDetail
        };
    }

    /// Snooze a live toast. Its history entry stays actionable.
    pub fn snooze(&mut self, toast_id: u64) {
        self.notifications.snooze(toast_id);
    }

    /// "Do Activity": bind the notification and jump into the instruction
    /// flow pre-seeded with its suggested activity. Works from the live
    /// toast and from history alike.
    pub fn do_activity(&mut self, id: u64) {
        let Some(entry) = self.notifications.entry(id) else {
            return;
        };
        let suggested = entry.suggested_activity;
        self.notifications.dismiss_toast(id);
        self.pending_notification = Some(id);
        self.selected_activity = Some(suggested);
        self.view = View::ActivityInstruction;
    }

    /// "Choose other" from history: bind the notification and open the full
    /// activity list; the eventual selection follows the bound routing.
    pub fn choose_other(&mut self, id: u64) {
        if self.notifications.entry(id).is_none() {
            return;
        }
        self.notifications.dismiss_toast(id);
        self.pending_notification = Some(id);
        self.view = View::Activities;
    }

    /// "Done" on the instruction flow: mark the bound entry performed,
    /// count the completion, and open the rating prompt.
    pub fn finish_activity(&mut self) {
        let Some(name) = self.selected_activity else {
            return;
        };
        if let Some(id) = self.pending_notification {
            self.notifications.mark_completed(id, name);
        }
        self.stats.increment(name);
        self.rating_prompt = Some(name);
    }

    /// Blend the submitted rating, then close out the notification.
    pub fn submit_rating(&mut self, value: f32) {
        if let Some(name) = self.rating_prompt.take() {
            self.stats.rate(name, value);
        }
        self.close_notification();
    }

    /// Skip leaves the average untouched but still closes out.
    pub fn skip_rating(&mut self) {
        self.rating_prompt = None;
        self.close_notification();
    }

    /// Timer-driven toast expiry; a stray late call is a no-op.
    pub fn expire_toast(&mut self, id: u64) {
        self.notifications.expire(id);
    }

    fn close_notification(&mut self) {
        self.pending_notification = None;
        self.selected_activity = None;
        self.view = View::Home;
    }
}
