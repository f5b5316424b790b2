//! Shared application state and the room document model.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds a map of live rooms. Each room owns its document (stress level,
//! threshold events, chat) plus the connected clients. There is no backing
//! database: a room lives exactly as long as the server process, and
//! `room:reset` is the explicit fresh-start operation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{RwLock, mpsc};
use uuid::Uuid;

use crate::frame::Frame;

/// The fixed ascending alert thresholds a stress level can cross.
pub const THRESHOLDS: [u8; 4] = [25, 50, 75, 100];

// =============================================================================
// ROOM ID
// =============================================================================

/// Short caller-supplied room key. Case-insensitive: normalized to uppercase
/// on parse. No collision protection by design.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RoomId(String);

#[derive(Debug, thiserror::Error)]
#[error("room id must be 1-16 alphanumeric characters")]
pub struct RoomIdError;

impl crate::frame::ErrorCode for RoomIdError {
    fn error_code(&self) -> &'static str {
        "E_ROOM_ID"
    }
}

impl RoomId {
    /// Parse and normalize a raw room id.
    ///
    /// # Errors
    ///
    /// Returns `RoomIdError` if the trimmed input is empty, longer than 16
    /// characters, or contains non-alphanumeric characters.
    pub fn parse(raw: &str) -> Result<Self, RoomIdError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.len() > 16 {
            return Err(RoomIdError);
        }
        if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(RoomIdError);
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RoomId {
    type Error = RoomIdError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl From<RoomId> for String {
    fn from(id: RoomId) -> Self {
        id.0
    }
}

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// ROOM DOCUMENT
// =============================================================================

/// An upward threshold crossing, immutable once appended.
///
/// `acknowledged` is written false at creation and never read again; it is
/// kept on the wire for schema compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdEvent {
    pub threshold: u8,
    pub timestamp: i64,
    pub acknowledged: bool,
}

/// A threshold event plus its store-assigned id. Vector position within
/// `RoomDocument::events` is insertion order is detection order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEvent {
    pub id: Uuid,
    #[serde(flatten)]
    pub event: ThresholdEvent,
}

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A chat message, immutable once appended. Presentation order is by
/// `timestamp` ascending regardless of store-assigned id order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    pub timestamp: i64,
}

/// A chat message plus its store-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: Uuid,
    #[serde(flatten)]
    pub message: ChatMessage,
}

/// The shared per-room document. Every field is last-writer-wins; the two
/// lists are append-only until a room reset drops them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDocument {
    pub stress_level: u8,
    pub last_updated: i64,
    #[serde(default)]
    pub events: Vec<StoredEvent>,
    #[serde(default)]
    pub chat: Vec<StoredMessage>,
}

// =============================================================================
// ROOM STATE
// =============================================================================

/// Which surface a connection belongs to. Decides the chat sender for
/// `chat:send`; writes are otherwise unrestricted (each surface only issues
/// the writes its page exposes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientRole {
    Watch,
    Dashboard,
    Operator,
}

impl ClientRole {
    /// Parse the `role` query parameter on WS upgrade.
    #[must_use]
    pub fn from_query(raw: &str) -> Option<Self> {
        match raw {
            "watch" => Some(Self::Watch),
            "dashboard" => Some(Self::Dashboard),
            "operator" => Some(Self::Operator),
            _ => None,
        }
    }
}

/// A connected client: its surface role and the sender for outgoing frames.
#[derive(Debug, Clone)]
pub struct ClientHandle {
    pub role: ClientRole,
    pub tx: mpsc::Sender<Frame>,
}

/// Per-room live state: the document plus connected clients.
#[derive(Debug, Default)]
pub struct RoomState {
    pub doc: RoomDocument,
    /// Connected clients: `client_id` -> handle.
    pub clients: HashMap<Uuid, ClientHandle>,
}

impl RoomState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the room map is Arc-wrapped.
#[derive(Clone, Default)]
pub struct AppState {
    pub rooms: Arc<RwLock<HashMap<RoomId, RoomState>>>,
}

impl AppState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
