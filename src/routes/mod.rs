//! API routes

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};

use crate::conversation::Event;
use crate::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    conversations: usize,
}

#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageParams {
    /// Bot selector; `jokeFinder` or anything else for the random joke bot
    pub bot_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        conversations: state.chat_engine.store().len().await,
    })
}

async fn send_message(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
    Query(params): Query<MessageParams>,
    Json(request): Json<MessageRequest>,
) -> Result<Json<Vec<String>>, ApiError> {
    state
        .chat_engine
        .send_message(&conversation_id, &request.text, params.bot_type.as_deref())
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(%conversation_id, "message handling failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
        })
}

async fn history(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> (StatusCode, Json<Vec<Event>>) {
    let events = state.chat_engine.history(&conversation_id).await;

    if events.is_empty() {
        (StatusCode::NOT_FOUND, Json(events))
    } else {
        (StatusCode::OK, Json(events))
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/user/:id/message", get(history).post(send_message))
}
