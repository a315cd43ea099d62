//! Bot that answers every message with a random joke

use crate::core::Session;
use crate::jokes::{JokeError, JokeSource};

pub const WELCOME: &str = "Welcome! Let me tell you a joke.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomJokeBot;

impl RandomJokeBot {
    pub async fn handle(
        &self,
        message: &str,
        session: &mut Session,
        jokes: &dyn JokeSource,
    ) -> Result<(), JokeError> {
        session.append_user(message);

        if session.is_first_turn() {
            session.append_bot(WELCOME);
        }

        let joke = jokes.random().await?;
        session.append_bot(joke);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Event;
    use crate::core::ConversationStore;
    use crate::jokes::testing::StubJokes;

    #[tokio::test]
    async fn test_first_turn_welcomes() {
        let store = ConversationStore::new();
        let jokes = StubJokes::new("a joke", &[]);

        let mut session = store.begin("fresh").await;
        RandomJokeBot.handle("Hello", &mut session, &jokes).await.unwrap();

        assert_eq!(
            session.new_events(),
            &[Event::user("Hello"), Event::bot(WELCOME), Event::bot("a joke")]
        );
        assert_eq!(jokes.random_calls(), 1);
    }

    #[tokio::test]
    async fn test_later_turns_skip_welcome() {
        let store = ConversationStore::new();
        let jokes = StubJokes::new("a joke", &[]);

        let mut session = store.begin("regular").await;
        RandomJokeBot.handle("Hello", &mut session, &jokes).await.unwrap();
        session.commit().await;

        let mut session = store.begin("regular").await;
        RandomJokeBot.handle("More", &mut session, &jokes).await.unwrap();

        assert_eq!(
            session.new_events(),
            &[Event::user("More"), Event::bot("a joke")]
        );
    }

    #[tokio::test]
    async fn test_joke_failure_propagates() {
        let store = ConversationStore::new();
        let jokes = StubJokes::failing();

        let mut session = store.begin("broken").await;
        let result = RandomJokeBot.handle("Hello", &mut session, &jokes).await;

        assert!(result.is_err());
    }
}
