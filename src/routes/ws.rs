//! WebSocket handler — bidirectional frame relay.
//!
//! DESIGN
//! ======
//! On upgrade, generates a client ID and enters a `select!` loop:
//! - Incoming client frames → parse + dispatch by syscall prefix
//! - Broadcast frames from room peers → forward to client
//!
//! Handler functions are pure business logic — they validate, mutate state,
//! and return an `Outcome`. The dispatch layer owns all outbound concerns:
//! reply to sender and broadcast to peers.
//!
//! LIFECYCLE
//! =========
//! 1. Upgrade → send `session:connected` with `client_id` and role
//! 2. Client sends frames → dispatch → handler returns Outcome
//! 3. Dispatch applies Outcome (reply / broadcast / both)
//! 4. Close → broadcast `room:part` → cleanup

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::frame::{Data, Frame, Status, now_ms};
use crate::services;
use crate::state::{AppState, ClientRole, RoomId};

const DEFAULT_CLIENT_CHANNEL_CAPACITY: usize = 256;

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// OUTCOME
// =============================================================================

/// Result returned by handler functions. The dispatch layer uses this to
/// decide who receives what — handlers never send frames directly.
enum Outcome {
    /// Send done+data to sender AND broadcast the same data to room peers.
    /// Sender's copy carries `parent_id` for correlation; together they are
    /// the store's echo-to-all-subscribers contract.
    Broadcast(Data),
    /// Send done+data to sender only.
    Reply(Data),
    /// Reply to sender with one payload, broadcast different data to peers.
    ReplyAndBroadcast { reply: Data, broadcast: Data },
}

// =============================================================================
// UPGRADE
// =============================================================================

pub async fn handle_ws(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
    ws: WebSocketUpgrade,
) -> Response {
    let Some(role) = params
        .get("role")
        .and_then(|raw| ClientRole::from_query(raw))
    else {
        return (StatusCode::BAD_REQUEST, "role required: watch, dashboard, or operator").into_response();
    };

    ws.on_upgrade(move |socket| run_ws(socket, state, role))
}

// =============================================================================
// CONNECTION
// =============================================================================

async fn run_ws(mut socket: WebSocket, state: AppState, role: ClientRole) {
    let client_id = Uuid::new_v4();

    // Per-connection channel for receiving broadcast frames from peers.
    let capacity = env_parse("CLIENT_CHANNEL_CAPACITY", DEFAULT_CLIENT_CHANNEL_CAPACITY);
    let (client_tx, mut client_rx) = mpsc::channel::<Frame>(capacity);

    let welcome = Frame::request("session:connected", Data::new())
        .with_data("client_id", client_id.to_string())
        .with_data("role", serde_json::json!(role));
    if send_frame(&mut socket, &welcome).await.is_err() {
        return;
    }

    info!(%client_id, ?role, "ws: client connected");

    // Track which room this client has joined.
    let mut current_room: Option<RoomId> = None;

    loop {
        tokio::select! {
            msg = socket.recv() => {
                let Some(msg) = msg else { break };
                let Ok(msg) = msg else { break };
                match msg {
                    Message::Text(text) => {
                        dispatch_frame(&state, &mut socket, &mut current_room, client_id, role, &client_tx, &text).await;
                    }
                    Message::Close(_) => break,
                    _ => {}
                }
            }
            Some(frame) = client_rx.recv() => {
                if send_frame(&mut socket, &frame).await.is_err() {
                    break;
                }
            }
        }
    }

    // Broadcast room:part to peers BEFORE cleanup.
    if let Some(room_id) = current_room {
        let part = Frame::request("room:part", Data::new())
            .with_data("client_id", client_id.to_string())
            .with_data("role", serde_json::json!(role))
            .with_room_id(room_id.clone());
        services::room::broadcast(&state, &room_id, &part, Some(client_id)).await;

        services::room::part_room(&state, &room_id, client_id).await;
    }
    info!(%client_id, "ws: client disconnected");
}

// =============================================================================
// FRAME DISPATCH
// =============================================================================

/// Parse an incoming JSON frame, dispatch to handler, apply outcome.
async fn dispatch_frame(
    state: &AppState,
    socket: &mut WebSocket,
    current_room: &mut Option<RoomId>,
    client_id: Uuid,
    role: ClientRole,
    client_tx: &mpsc::Sender<Frame>,
    text: &str,
) {
    let sender_frames = process_inbound_text(state, current_room, client_id, role, client_tx, text).await;
    for frame in sender_frames {
        let _ = send_frame(socket, &frame).await;
    }
}

/// Parse and process one inbound text frame and return frames for the sender.
///
/// This keeps the websocket transport concerns separate from frame handling,
/// so tests can exercise dispatch and broadcast behavior end-to-end.
async fn process_inbound_text(
    state: &AppState,
    current_room: &mut Option<RoomId>,
    client_id: Uuid,
    role: ClientRole,
    client_tx: &mpsc::Sender<Frame>,
    text: &str,
) -> Vec<Frame> {
    let req: Frame = match serde_json::from_str(text) {
        Ok(r) => r,
        Err(e) => {
            warn!(%client_id, error = %e, "ws: invalid inbound frame");
            let err = Frame::request("gateway:error", Data::new()).with_data("message", format!("invalid json: {e}"));
            return vec![err];
        }
    };

    let prefix = req.prefix();
    info!(%client_id, id = %req.id, syscall = %req.syscall, status = ?req.status, "ws: recv frame");

    // Dispatch to handler — returns Outcome or error Frame.
    let result = match prefix {
        "room" => handle_room(state, current_room, client_id, role, client_tx, &req).await,
        "stress" => handle_stress(state, current_room.as_ref(), &req).await,
        "event" => handle_event(state, current_room.as_ref(), &req).await,
        "chat" => handle_chat(state, current_room.as_ref(), role, &req).await,
        _ => Err(req.error(format!("unknown prefix: {prefix}"))),
    };

    // Apply outcome — the dispatch layer owns all outbound logic.
    let room_id = current_room.clone();
    match result {
        Ok(Outcome::Broadcast(data)) => {
            let sender_frame = req.done_with(data);
            // Peers get a copy without parent_id (they didn't originate the request).
            let mut peer_frame = sender_frame.clone();
            peer_frame.id = Uuid::new_v4();
            peer_frame.parent_id = None;
            if let Some(rid) = &room_id {
                services::room::broadcast(state, rid, &peer_frame, Some(client_id)).await;
            }
            vec![sender_frame]
        }
        Ok(Outcome::Reply(data)) => {
            vec![req.done_with(data)]
        }
        Ok(Outcome::ReplyAndBroadcast { reply, broadcast }) => {
            let sender_frame = req.done_with(reply);
            if let Some(rid) = &room_id {
                let notif = Frame::request(&req.syscall, broadcast).with_room_id(rid.clone());
                services::room::broadcast(state, rid, &notif, Some(client_id)).await;
            }
            vec![sender_frame]
        }
        Err(err_frame) => {
            vec![err_frame]
        }
    }
}

// =============================================================================
// ROOM HANDLERS
// =============================================================================

async fn handle_room(
    state: &AppState,
    current_room: &mut Option<RoomId>,
    client_id: Uuid,
    role: ClientRole,
    client_tx: &mpsc::Sender<Frame>,
    req: &Frame,
) -> Result<Outcome, Frame> {
    let op = req.syscall.split_once(':').map_or("", |(_, op)| op);

    match op {
        "join" => {
            let room_id = match &req.room_id {
                Some(rid) => rid.clone(),
                None => {
                    let Some(raw) = req.data.get("room_id").and_then(|v| v.as_str()) else {
                        return Err(req.error("room_id required"));
                    };
                    match RoomId::parse(raw) {
                        Ok(rid) => rid,
                        Err(e) => return Err(req.error_from(&e)),
                    }
                }
            };

            // Part current room if already joined.
            if let Some(old_room) = current_room.take() {
                services::room::part_room(state, &old_room, client_id).await;
            }

            let doc = services::room::join_room(state, &room_id, client_id, role, client_tx.clone()).await;
            *current_room = Some(room_id);

            let reply = services::room::doc_data(&doc);

            let mut broadcast = Data::new();
            broadcast.insert("client_id".into(), serde_json::json!(client_id));
            broadcast.insert("role".into(), serde_json::json!(role));

            Ok(Outcome::ReplyAndBroadcast { reply, broadcast })
        }
        "get" => {
            let Some(room_id) = current_room.as_ref() else {
                return Err(req.error("must join a room first"));
            };
            let doc = services::room::snapshot(state, room_id).await;
            Ok(Outcome::Reply(services::room::doc_data(&doc)))
        }
        "reset" => {
            let Some(room_id) = current_room.as_ref() else {
                return Err(req.error("must join a room first"));
            };
            let doc = services::room::reset_room(state, room_id).await;
            Ok(Outcome::Broadcast(services::room::doc_data(&doc)))
        }
        _ => Err(req.error(format!("unknown room op: {op}"))),
    }
}

// =============================================================================
// STRESS HANDLERS
// =============================================================================

async fn handle_stress(state: &AppState, current_room: Option<&RoomId>, req: &Frame) -> Result<Outcome, Frame> {
    let Some(room_id) = current_room else {
        return Err(req.error("must join a room first"));
    };

    let op = req.syscall.split_once(':').map_or("", |(_, op)| op);

    match op {
        "set" => {
            let Some(level) = req.data.get("level").and_then(serde_json::Value::as_i64) else {
                return Err(req.error("level required"));
            };

            let (level, last_updated) = services::stress::set_level(state, room_id, level, now_ms()).await;

            let mut data = Data::new();
            data.insert("stressLevel".into(), serde_json::json!(level));
            data.insert("lastUpdated".into(), serde_json::json!(last_updated));
            Ok(Outcome::Broadcast(data))
        }
        _ => Err(req.error(format!("unknown stress op: {op}"))),
    }
}

// =============================================================================
// EVENT HANDLERS
// =============================================================================

async fn handle_event(state: &AppState, current_room: Option<&RoomId>, req: &Frame) -> Result<Outcome, Frame> {
    let Some(room_id) = current_room else {
        return Err(req.error("must join a room first"));
    };

    let op = req.syscall.split_once(':').map_or("", |(_, op)| op);

    match op {
        "append" => {
            let Some(threshold) = req.data.get("threshold").and_then(serde_json::Value::as_i64) else {
                return Err(req.error("threshold required"));
            };

            match services::event::append_event(state, room_id, threshold, now_ms()).await {
                Ok(events) => {
                    let mut data = Data::new();
                    data.insert("events".into(), serde_json::to_value(&events).unwrap_or_default());
                    Ok(Outcome::Broadcast(data))
                }
                Err(e) => Err(req.error_from(&e)),
            }
        }
        _ => Err(req.error(format!("unknown event op: {op}"))),
    }
}

// =============================================================================
// CHAT HANDLERS
// =============================================================================

async fn handle_chat(
    state: &AppState,
    current_room: Option<&RoomId>,
    role: ClientRole,
    req: &Frame,
) -> Result<Outcome, Frame> {
    let Some(room_id) = current_room else {
        return Err(req.error("must join a room first"));
    };

    let op = req.syscall.split_once(':').map_or("", |(_, op)| op);

    match op {
        "send" => {
            let text = req.data.get("text").and_then(|v| v.as_str()).unwrap_or("");

            match services::chat::append_message(state, room_id, role, text, now_ms()).await {
                Ok(messages) => {
                    let mut data = Data::new();
                    data.insert("messages".into(), serde_json::to_value(&messages).unwrap_or_default());
                    Ok(Outcome::Broadcast(data))
                }
                Err(e) => Err(req.error_from(&e)),
            }
        }
        _ => Err(req.error(format!("unknown chat op: {op}"))),
    }
}

// =============================================================================
// HELPERS
// =============================================================================

async fn send_frame(socket: &mut WebSocket, frame: &Frame) -> Result<(), ()> {
    let json = match serde_json::to_string(frame) {
        Ok(j) => j,
        Err(e) => {
            warn!(error = %e, "ws: failed to serialize frame");
            return Err(());
        }
    };
    if frame.status == Status::Error {
        let code = frame
            .data
            .get("code")
            .and_then(|v| v.as_str())
            .unwrap_or("-");
        let message = frame
            .data
            .get("message")
            .and_then(|v| v.as_str())
            .unwrap_or("-");
        warn!(id = %frame.id, syscall = %frame.syscall, code, message, "ws: send frame status=Error");
    } else {
        info!(id = %frame.id, syscall = %frame.syscall, status = ?frame.status, "ws: send frame");
    }
    socket
        .send(Message::Text(json.into()))
        .await
        .map_err(|_| ())
}

#[cfg(test)]
#[path = "ws_test.rs"]
mod tests;
