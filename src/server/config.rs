use std::sync::Arc;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::health_check;
use crate::server::{
    handlers::{chat::chat, generate::generate, image::generate_image, recipe::recipe},
    services::gateway::Gateway,
};

pub const SERVICE_NAME: &str = "layer-apps";

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn Gateway>,
}

pub fn configure_app(gateway: Arc<dyn Gateway>) -> Router {
    app_router(AppState { gateway })
}

async fn log_request(request: Request, next: Next) -> Response {
    info!("{} {}", request.method(), request.uri().path());
    next.run(request).await
}

fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/chat", post(chat))
        .route("/api/generate", post(generate))
        .route("/api/image", post(generate_image))
        .route("/recipe", post(recipe))
        .layer(middleware::from_fn(log_request))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
