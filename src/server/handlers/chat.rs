use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::error;

use crate::server::{config::AppState, services::gateway::Message};

/// Gate used by the chatbot app; static configuration, not negotiated.
const CHAT_GATE: &str = "f6cc6bd9-4ec1-4ac2-8912-81a085255c35";

pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let messages = match parse_messages(&body) {
        Some(messages) => messages,
        None => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Messages array is required" })),
            ))
        }
    };

    let start = Instant::now();

    let result = state
        .gateway
        .chat(CHAT_GATE, &messages)
        .await
        .map_err(|e| {
            error!("Chat error: {} (messages: {})", e, messages.len());
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
        })?;

    let latency = start.elapsed().as_millis() as u64;

    Ok(Json(json!({
        "content": result.content,
        "model": result.model,
        "cost": result.cost,
        "latency": latency,
    })))
}

fn parse_messages(body: &Value) -> Option<Vec<Message>> {
    let items = body.get("messages")?.as_array()?;

    let mut messages = Vec::with_capacity(items.len());
    for item in items {
        messages.push(Message {
            role: item.get("role")?.as_str()?.to_string(),
            content: item.get("content")?.as_str()?.to_string(),
        });
    }
    Some(messages)
}
