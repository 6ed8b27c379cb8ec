use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::error;

use crate::server::{config::AppState, handlers::truncate};

/// Gate used by the image generator app.
const IMAGE_GATE: &str = "e7f12750-c6dc-4138-a221-5ca071aaa6f0";

pub async fn generate_image(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let prompt = match body
        .get("prompt")
        .and_then(Value::as_str)
        .filter(|p| !p.is_empty())
    {
        Some(prompt) => prompt,
        None => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Prompt is required" })),
            ))
        }
    };

    let start = Instant::now();

    // An upstream result with no images surfaces here as an error, so a
    // 200 always carries a usable image URL.
    let result = state
        .gateway
        .image(IMAGE_GATE, prompt)
        .await
        .map_err(|e| {
            error!("Image error: {} (prompt: {})", e, truncate(prompt, 100));
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
