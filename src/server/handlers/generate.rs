use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::error;

use crate::server::{
    config::AppState,
    handlers::truncate,
    services::gateway::Message,
};

/// Content generation: the caller picks the gate, unlike the fixed-gate
/// endpoints. `gate` is the canonical identifier field.
pub async fn generate(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let gate = body
        .get("gate")
        .and_then(Value::as_str)
        .filter(|g| !g.is_empty());
    let prompt = body
        .get("prompt")
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty());

    let (gate, prompt) = match (gate, prompt) {
        (Some(gate), Some(prompt)) => (gate, prompt),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Gate and prompt are required" })),
            ))
        }
    };

    let messages = [Message {
        role: "user".to_string(),
        content: prompt.to_string(),
    }];

    let result = state.gateway.chat(gate, &messages).await.map_err(|e| {
        error!(
            "Generation error: {} (gate: {}, prompt: {})",
            e,
            gate,
            truncate(prompt, 100)
        );
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": e.to_string() })),
        )
    })?;

    Ok(Json(json!({ "content": result.content })))
}
