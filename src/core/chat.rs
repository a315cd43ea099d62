//! Chat engine
//!
//! Runs one conversational turn:
//! 1. Opens a session on the user's conversation
//! 2. Lets the selected bot record the user message and its replies
//! 3. Commits the turn to the store
//! 4. Returns the bot replies added during the turn
//!
//! If the bot fails (the joke API is unreachable or misbehaves) the session
//! is dropped and nothing from the turn is stored.

use std::sync::Arc;

use crate::bots::Bot;
use crate::conversation::Event;
use crate::jokes::{JokeError, JokeSource};

use super::memory::ConversationStore;

/// Errors from the chat engine
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("Joke source error: {0}")]
    Jokes(#[from] JokeError),
}

/// The core chat engine
pub struct ChatEngine {
    store: ConversationStore,
    jokes: Arc<dyn JokeSource>,
}

impl ChatEngine {
    pub fn new(store: ConversationStore, jokes: Arc<dyn JokeSource>) -> Self {
        Self { store, jokes }
    }

    /// Handle a user message and return the bot's replies, oldest first
    pub async fn send_message(
        &self,
        conversation_id: &str,
        text: &str,
        bot_type: Option<&str>,
    ) -> Result<Vec<String>, ChatError> {
        let bot = Bot::from_name(bot_type);
        tracing::info!(conversation_id, bot = bot.name(), "handling user message");

        let mut session = self.store.begin(conversation_id).await;
        bot.handle(text, &mut session, self.jokes.as_ref()).await?;

        let replies = session
            .commit()
            .await
            .into_iter()
            .filter(Event::is_bot)
            .map(|event| event.message)
            .collect();

        Ok(replies)
    }

    /// Full history of a conversation; empty if it was never used
    pub async fn history(&self, conversation_id: &str) -> Vec<Event> {
        self.store.history(conversation_id).await
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }
}
