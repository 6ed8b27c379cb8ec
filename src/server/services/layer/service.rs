use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::server::services::gateway::{
    Gateway, GatewayError, GatewayMetadata, GenerationResult, Message,
};

use super::types::{CompleteData, CompleteRequest, CompleteResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.layer.ai/v1";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct LayerConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl LayerConfig {
    /// Reads `LAYER_API_KEY` (required), `LAYER_API_URL` and
    /// `LAYER_TIMEOUT_SECS` (optional) from the environment.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("LAYER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow!("LAYER_API_KEY environment variable is required"))?;

        let base_url =
            std::env::var("LAYER_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout = std::env::var("LAYER_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            api_key,
            base_url,
            timeout,
        })
    }
}

/// Client for the Layer AI-routing gateway.
///
/// Holds only immutable configuration, so one instance is shared across
/// all in-flight requests without locking. Each operation makes exactly
/// one outbound request; no retry, no caching.
#[derive(Debug, Clone)]
pub struct LayerService {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LayerService {
    pub fn new(config: LayerConfig) -> Result<Self, GatewayError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url,
        })
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    async fn complete(
        &self,
        request: &CompleteRequest<'_>,
    ) -> Result<CompleteResponse, GatewayError> {
        debug!("Calling gate {} ({})", request.gate, request.kind);

        let response = self
            .client
            .post(format!("{}/complete", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await?;
            warn!("Layer API error ({}): {}", status, message);
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<CompleteResponse>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl Gateway for LayerService {
    fn metadata(&self) -> GatewayMetadata {
        GatewayMetadata {
            name: "Layer".to_string(),
            default_endpoint: DEFAULT_BASE_URL.to_string(),
            supported_kinds: vec!["chat".to_string(), "image".to_string()],
        }
    }

    async fn chat(
        &self,
        gate: &str,
        messages: &[Message],
    ) -> Result<GenerationResult, GatewayError> {
        let response = self
            .complete(&CompleteRequest {
                gate,
                kind: "chat",
                data: CompleteData {
                    messages: Some(messages),
                    prompt: None,
                },
            })
            .await?;

        let content = response
            .content
            .ok_or_else(|| GatewayError::InvalidResponse("no content in response".to_string()))?;

        Ok(GenerationResult {
            content,
            model: response.model,
            cost: response.cost,
        })
    }

    async fn image(&self, gate: &str, prompt: &str) -> Result<GenerationResult, GatewayError> {
        let response = self
            .complete(&CompleteRequest {
                gate,
                kind: "image",
                data: CompleteData {
                    messages: None,
                    prompt: Some(prompt),
                },
            })
            .await?;

        // An empty image list is a failure, never a success with no content.
        let first = response
            .images
            .as_deref()
            .and_then(|images| images.first())
            .ok_or(GatewayError::EmptyImageResult)?;

        Ok(GenerationResult {
            content: first.url.clone(),
            model: response.model,
            cost: response.cost,
        })
    }
}
