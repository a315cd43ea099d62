//! Joke API integrations

mod chuck_norris;

use async_trait::async_trait;
use thiserror::Error;

pub use chuck_norris::{ChuckNorrisClient, DEFAULT_BASE_URL};

#[derive(Debug, Error)]
pub enum JokeError {
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// A source of jokes the bots can draw from
#[async_trait]
pub trait JokeSource: Send + Sync {
    /// A single random joke
    async fn random(&self) -> Result<String, JokeError>;

    /// Jokes matching `query`, in the order the source returns them
    async fn search(&self, query: &str) -> Result<Vec<String>, JokeError>;
}
