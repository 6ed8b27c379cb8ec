pub mod types;

use async_trait::async_trait;
use thiserror::Error;

pub use self::types::{GatewayMetadata, GenerationResult, Message};

/// Failures raised at the gateway adapter boundary.
///
/// Every upstream failure shape collapses into one of these variants,
/// each carrying a human-readable message, so handlers never have to
/// probe an opaque error value.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("gateway request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("gateway returned {status}: {message}")]
    Api { status: u16, message: String },
    #[error("unexpected gateway response: {0}")]
    InvalidResponse(String),
    #[error("gateway returned no images")]
    EmptyImageResult,
}

#[async_trait]
pub trait Gateway: Send + Sync {
    fn metadata(&self) -> GatewayMetadata;

    async fn chat(
        &self,
        gate: &str,
        messages: &[Message],
    ) -> Result<GenerationResult, GatewayError>;

    async fn image(&self, gate: &str, prompt: &str) -> Result<GenerationResult, GatewayError>;
}
