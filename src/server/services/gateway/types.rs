use serde::{Deserialize, Serialize};

/// Metadata describing a gateway's capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayMetadata {
    /// Name of the gateway provider
    pub name: String,
    /// Default API endpoint used when no override is configured
    pub default_endpoint: String,
    /// Generation kinds the gateway supports (e.g. "chat", "image")
    pub supported_kinds: Vec<String>,
}

/// Common message type sent to the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

/// Normalized result of a generation call.
///
/// `content` is the generated text for chat calls, or the first image
/// URL for image calls. Latency is measured by the caller, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub content: String,
    pub model: String,
    pub cost: f64,
}
