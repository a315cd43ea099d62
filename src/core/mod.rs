//! Core engine components
//!
//! Conversation storage and the turn-by-turn chat engine built on it.

mod chat;
mod memory;

pub use chat::ChatEngine;
pub use memory::{ConversationStore, Session};
