//! Chat service — append-only room chat.
//!
//! DESIGN
//! ======
//! The sender is derived from the connection role: the operator panel
//! writes `bot` replies, every other surface writes `user` messages. The
//! list is stored in insertion order; clients re-sort by timestamp for
//! display (`client::chat::ChatState`).

use uuid::Uuid;

use crate::frame::ErrorCode;
use crate::state::{AppState, ChatMessage, ClientRole, RoomId, Sender, StoredMessage};

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message text required")]
    EmptyText,
}

impl ErrorCode for ChatError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyText => "E_EMPTY_TEXT",
        }
    }
}

/// Append a chat message and return the full chat list.
///
/// # Errors
///
/// Returns `ChatError::EmptyText` if the trimmed text is empty.
pub async fn append_message(
    state: &AppState,
    room_id: &RoomId,
    role: ClientRole,
    text: &str,
    now: i64,
) -> Result<Vec<StoredMessage>, ChatError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ChatError::EmptyText);
    }

    let sender = match role {
        ClientRole::Operator => Sender::Bot,
        ClientRole::Dashboard | ClientRole::Watch => Sender::User,
    };

    let mut rooms = state.rooms.write().await;
    let room = rooms.entry(room_id.clone()).or_default();
    room.doc.chat.push(StoredMessage {
        id: Uuid::new_v4(),
        message: ChatMessage { sender, text: text.to_owned(), timestamp: now },
    });

    Ok(room.doc.chat.clone())
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
