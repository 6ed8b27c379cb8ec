use axum::Json;
use serde_json::json;

use crate::server::config::SERVICE_NAME;

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}
