//! In-memory conversation storage
//!
//! Conversations live for the lifetime of the process. Each conversation id
//! maps to an append-only sequence of events plus a turn lock, so a turn on
//! one conversation never blocks a turn on another.
//!
//! A turn is written through a [`Session`]: events appended during the turn
//! are buffered and only reach the stored sequence when the session is
//! committed. A session dropped without commit leaves the history untouched.
//! Readers only take the event lock for the length of a copy, so history
//! stays available while a turn waits on the joke API.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::conversation::Event;

#[derive(Debug, Default)]
struct Conversation {
    /// Held by a session for its whole turn; turns on one id run one at a time
    turn: Arc<Mutex<()>>,
    events: RwLock<Vec<Event>>,
}

/// Process-wide conversation store
#[derive(Debug, Clone, Default)]
pub struct ConversationStore {
    conversations: Arc<Mutex<HashMap<String, Arc<Conversation>>>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a turn on a conversation, creating it if it has never been seen.
    ///
    /// Waits for any other turn on the same id to finish first.
    pub async fn begin(&self, conversation_id: &str) -> Session {
        let conversation = {
            let mut conversations = self.conversations.lock().await;
            conversations
                .entry(conversation_id.to_string())
                .or_default()
                .clone()
        };

        let turn = conversation.turn.clone().lock_owned().await;
        let stored = conversation.events.read().await.len();
        tracing::debug!(conversation_id, stored, "conversation session opened");

        Session {
            conversation_id: conversation_id.to_string(),
            conversation,
            stored,
            pending: Vec::new(),
            _turn: turn,
        }
    }

    /// Snapshot of all events in a conversation, oldest first.
    ///
    /// Unknown ids yield an empty history and are not created.
    pub async fn history(&self, conversation_id: &str) -> Vec<Event> {
        let conversation = self.conversations.lock().await.get(conversation_id).cloned();

        match conversation {
            Some(conversation) => conversation.events.read().await.clone(),
            None => Vec::new(),
        }
    }

    /// Number of conversations with at least one stored event
    pub async fn len(&self) -> usize {
        let conversations = self.conversations.lock().await;

        let mut count = 0;
        for conversation in conversations.values() {
            if !conversation.events.read().await.is_empty() {
                count += 1;
            }
        }
        count
    }
}

/// One turn's view of a conversation
#[derive(Debug)]
pub struct Session {
    conversation_id: String,
    conversation: Arc<Conversation>,
    /// Stored events when the turn began; stable while `_turn` is held
    stored: usize,
    pending: Vec<Event>,
    _turn: OwnedMutexGuard<()>,
}

impl Session {
    pub fn conversation_id(&self) -> &str {
        &self.conversation_id
    }

    pub fn append_user(&mut self, message: impl Into<String>) {
        self.pending.push(Event::user(message));
    }

    pub fn append_bot(&mut self, message: impl Into<String>) {
        self.pending.push(Event::bot(message));
    }

    /// Total events in the conversation, including this turn's
    pub fn len(&self) -> usize {
        self.stored + self.pending.len()
    }

    /// True when the conversation held nothing before this turn's user message.
    ///
    /// Must be checked after the user event has been appended.
    pub fn is_first_turn(&self) -> bool {
        self.len() <= 1
    }

    /// Events appended during this turn, in order
    pub fn new_events(&self) -> &[Event] {
        &self.pending
    }

    /// Persist this turn's events and return them.
    pub async fn commit(mut self) -> Vec<Event> {
        let new_events = std::mem::take(&mut self.pending);

        let total = {
            let mut events = self.conversation.events.write().await;
            events.extend(new_events.iter().cloned());
            events.len()
        };

        tracing::debug!(
            conversation_id = %self.conversation_id,
            added = new_events.len(),
            total,
            "conversation session committed"
        );

        new_events
    }
}
