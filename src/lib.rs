//! ActiveColour — a room-synchronized stress-companion prototype.
//!
//! ARCHITECTURE
//! ============
//! Three surfaces (phone dashboard, watch simulator, operator panel) share a
//! room document through the relay server in this crate. The server keeps
//! every room in memory and re-broadcasts the full value of a field to all
//! connected room clients — including the writer — whenever it changes.
//!
//! The `client` module holds the state models each surface runs: threshold
//! detection with hysteresis on the watch, the count-suffix event feed and
//! the toast/history notification lifecycle on the dashboard, and the
//! activity catalog with per-session usage stats. They are plain data
//! types with transition methods; rendering is out of scope.

pub mod client;
pub mod frame;
pub mod routes;
pub mod services;
pub mod state;
