use std::time::Instant;

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use tracing::error;

use crate::server::{config::AppState, services::gateway::Message};

/// Gate used by the recipe generator app.
const RECIPE_GATE: &str = "f5ee5c20-8ab7-4119-8beb-3a6d70d9fb5d";

pub async fn recipe(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let grocery_list = match parse_grocery_list(&body) {
        Some(list) => list,
        None => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Invalid request",
                    "message": "groceryList must be a non-empty array of strings",
                })),
            ))
        }
    };

    let messages = [Message {
        role: "user".to_string(),
        content: format!(
            "Generate a delicious recipe using these ingredients: {}. \
             The recipe should be practical, easy to follow, and make \
             the best use of these ingredients.",
            grocery_list.join(", ")
        ),
    }];

    let start = Instant::now();

    let result = state
        .gateway
        .chat(RECIPE_GATE, &messages)
        .await
        .map_err(|e| {
            error!(
                "Error generating recipe: {} (ingredients: {})",
                e,
                grocery_list.len()
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Recipe generation failed",
                    "message": e.to_string(),
                })),
            )
        })?;

    let latency = start.elapsed().as_millis() as u64;

    Ok(Json(json!({
        "recipe": result.content,
        "metadata": {
            "model": result.model,
            "cost": result.cost,
            "latency": format!("{}ms", latency),
            "ingredients": grocery_list,
        }
    })))
}

/// Requires a present, non-empty array of strings; anything else is a
/// validation failure.
fn parse_grocery_list(body: &Value) -> Option<Vec<String>> {
    let items = body.get("groceryList")?.as_array()?;
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect()
}
