//! Chuck Norris joke API client
//!
//! Talks to `api.chucknorris.io` (or any server exposing the same routes):
//! - `GET /jokes/random` returns `{"value": "..."}`
//! - `GET /jokes/search?query=...` returns `{"total": n, "result": [{"value": "..."}]}`
//!
//! The search endpoint rejects queries shorter than 3 or longer than 120
//! characters, so callers validate before searching.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;

use super::{JokeError, JokeSource};

pub const DEFAULT_BASE_URL: &str = "https://api.chucknorris.io";

pub struct ChuckNorrisClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct JokeResponse {
    value: String,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    result: Vec<JokeResponse>,
}

impl ChuckNorrisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Build a client whose requests give up after `timeout`
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, JokeError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn check(response: Response) -> Result<Response, JokeError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(JokeError::InvalidResponse(format!("{}: {}", status, body)));
        }
        Ok(response)
    }
}

#[async_trait]
impl JokeSource for ChuckNorrisClient {
    async fn random(&self) -> Result<String, JokeError> {
        let response = self
            .client
            .get(format!("{}/jokes/random", self.base_url))
            .send()
            .await?;

        let joke: JokeResponse = Self::check(response).await?.json().await?;
        Ok(joke.value)
    }

    async fn search(&self, query: &str) -> Result<Vec<String>, JokeError> {
        let response = self
            .client
            .get(format!("{}/jokes/search", self.base_url))
            .query(&[("query", query)])
            .send()
            .await?;

        let found: SearchResponse = Self::check(response).await?.json().await?;
        tracing::debug!(query, found = found.result.len(), "joke search finished");

        Ok(found.result.into_iter().map(|j| j.value).collect())
    }
}
