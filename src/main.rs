//! Jokebot - conversational joke bot API
//!
//! Accepts user messages per conversation, answers with jokes from a
//! joke API, and keeps each conversation's history in memory.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod bots;
mod config;
mod conversation;
mod core;
mod jokes;
mod routes;

use crate::config::Config;
use crate::core::{ChatEngine, ConversationStore};
use crate::jokes::{ChuckNorrisClient, JokeSource};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub chat_engine: Arc<ChatEngine>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jokebot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    let jokes: Arc<dyn JokeSource> = match config.joke_api_timeout() {
        Some(timeout) => Arc::new(ChuckNorrisClient::with_timeout(&config.joke_api_url, timeout)?),
        None => Arc::new(ChuckNorrisClient::new(&config.joke_api_url)),
    };
    tracing::info!("Using joke API at {}", config.joke_api_url);

    let state = AppState {
        chat_engine: Arc::new(ChatEngine::new(ConversationStore::new(), jokes)),
    };

    let app = Router::new()
        .merge(routes::router())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    tracing::info!("Jokebot API running at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
