use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use layer_apps::configure_app;
use layer_apps::services::gateway::Gateway;
use layer_apps::services::layer::{LayerConfig, LayerService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // A missing API key is fatal: refuse to serve traffic without one.
    let config = LayerConfig::from_env()?;
    let gateway: Arc<dyn Gateway> = Arc::new(LayerService::new(config)?);

    let app = configure_app(gateway);

    // Get port from environment variable or use default
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
