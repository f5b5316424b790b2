//! Room-store services: the mutations and broadcasts behind each syscall.

pub mod chat;
pub mod event;
pub mod room;
pub mod stress;
