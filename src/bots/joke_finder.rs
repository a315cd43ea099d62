//! Bot that searches for jokes about the user's message

use std::ops::RangeInclusive;

use crate::core::Session;
use crate::jokes::{JokeError, JokeSource};

/// Query lengths, in characters, the joke search accepts
pub const QUERY_LENGTH: RangeInclusive<usize> = 3..=120;

pub const INVALID_INPUT: &str =
    "You have an invalid input, please try again. Size must be between 3 and 120.";
pub const NOT_FOUND: &str = "Sorry! No jokes found. Try another word.";

pub fn welcome(topic: &str) -> String {
    format!("Welcome! Let me find you jokes about {}", topic)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JokeFinderBot;

impl JokeFinderBot {
    pub async fn handle(
        &self,
        message: &str,
        session: &mut Session,
        jokes: &dyn JokeSource,
    ) -> Result<(), JokeError> {
        session.append_user(message);

        if session.is_first_turn() {
            session.append_bot(welcome(message));
        }

        if !QUERY_LENGTH.contains(&message.chars().count()) {
            tracing::debug!(
                conversation_id = session.conversation_id(),
                "rejected joke search query by length"
            );
            session.append_bot(INVALID_INPUT);
            return Ok(());
        }

        let found = jokes.search(message).await?;
        if found.is_empty() {
            session.append_bot(NOT_FOUND);
            return Ok(());
        }

        for joke in found {
            session.append_bot(joke);
        }

        Ok(())
    }
}
