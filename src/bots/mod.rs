//! Bot strategies
//!
//! A bot takes the user's message for one turn, records it in the session,
//! and appends its replies. Which bot answers is chosen per request by name.

mod joke_finder;
mod random_joke;

pub use joke_finder::JokeFinderBot;
pub use random_joke::RandomJokeBot;

use crate::core::Session;
use crate::jokes::{JokeError, JokeSource};

/// Selector value that picks [`JokeFinderBot`]
pub const JOKE_FINDER: &str = "jokeFinder";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bot {
    RandomJoke(RandomJokeBot),
    JokeFinder(JokeFinderBot),
}

impl Bot {
    /// Pick a bot by name. Anything other than `"jokeFinder"`, including no
    /// name at all, gets the random joke bot.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some(JOKE_FINDER) => Bot::JokeFinder(JokeFinderBot),
            _ => Bot::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Bot::RandomJoke(_) => "randomJoke",
            Bot::JokeFinder(_) => JOKE_FINDER,
        }
    }

    pub async fn handle(
        &self,
        message: &str,
        session: &mut Session,
        jokes: &dyn JokeSource,
    ) -> Result<(), JokeError> {
        match self {
            Bot::RandomJoke(b) => b.handle(message, session, jokes).await,
            Bot::JokeFinder(b) => b.handle(message, session, jokes).await,
        }
    }
}

impl Default for Bot {
    fn default() -> Self {
        Bot::RandomJoke(RandomJokeBot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Bot::from_name(Some("jokeFinder")), Bot::JokeFinder(JokeFinderBot));
        assert_eq!(Bot::from_name(None), Bot::RandomJoke(RandomJokeBot));
        assert_eq!(Bot::from_name(Some("")), Bot::RandomJoke(RandomJokeBot));
        // Selectors are case sensitive
        assert_eq!(Bot::from_name(Some("jokefinder")), Bot::RandomJoke(RandomJokeBot));
        assert_eq!(Bot::from_name(Some("unknown")), Bot::default());
    }
}
