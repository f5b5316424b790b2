#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::state::{Sender, StoredMessage};

/// Chat panel state for the dashboard.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Messages in display order: timestamp ascending.
    pub messages: Vec<StoredMessage>,
    /// True while the last message is the user's — input is held until the
    /// bot replies.
    pub waiting_for_reply: bool,
    /// Activity the next outgoing message is about, if any.
    pub activity_context: Option<&'static str>,
}

impl ChatState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a full chat snapshot. Display order is timestamp ascending
    /// regardless of store id order; the sort is stable, so same-timestamp
    /// messages keep store order.
    pub fn apply_snapshot(&mut self, mut messages: Vec<StoredMessage>) {
        messages.sort_by_key(|m| m.message.timestamp);
        self.waiting_for_reply = messages
            .last()
            .is_some_and(|m| m.message.sender == Sender::User);
        self.messages = messages;
    }

    pub fn set_context(&mut self, activity: &'static str) {
        self.activity_context = Some(activity);
    }

    pub fn clear_context(&mut self) {
        self.activity_context = None;
    }

    /// Prepare outgoing text. Empty input or an in-flight reply suppresses
    /// the send; an activity context is prefixed as `@<name>: ` and
    /// consumed.
    pub fn compose(&mut self, input: &str) -> Option<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() || self.waiting_for_reply {
            return None;
        }

        let text = match self.activity_context.take() {
            Some(activity) => format!("@{activity}: {trimmed}"),
            None => trimmed.to_owned(),
        };
        self.waiting_for_reply = true;
        Some(text)
    }
}
