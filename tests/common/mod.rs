#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use layer_apps::services::gateway::{
    Gateway, GatewayError, GatewayMetadata, GenerationResult, Message,
};

enum MockBehavior {
    Succeed(GenerationResult),
    Fail(String),
    EmptyImages,
}

/// Scripted gateway for endpoint tests; counts invocations so tests can
/// assert the adapter was never called on validation failures.
pub struct MockGateway {
    calls: AtomicUsize,
    behavior: MockBehavior,
}

impl MockGateway {
    pub fn succeeding(content: &str, model: &str, cost: f64) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            behavior: MockBehavior::Succeed(GenerationResult {
                content: content.to_string(),
                model: model.to_string(),
                cost,
            }),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            behavior: MockBehavior::Fail(message.to_string()),
        }
    }

    pub fn empty_images() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            behavior: MockBehavior::EmptyImages,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self) -> Result<GenerationResult, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            MockBehavior::Succeed(result) => Ok(result.clone()),
            MockBehavior::Fail(message) => Err(GatewayError::Api {
                status: 502,
                message: message.clone(),
            }),
            MockBehavior::EmptyImages => Err(GatewayError::EmptyImageResult),
        }
    }
}

#[async_trait]
impl Gateway for MockGateway {
    fn metadata(&self) -> GatewayMetadata {
        GatewayMetadata {
            name: "Mock".to_string(),
            default_endpoint: "http://localhost".to_string(),
            supported_kinds: vec!["chat".to_string(), "image".to_string()],
        }
    }

    async fn chat(
        &self,
        _gate: &str,
        _messages: &[Message],
    ) -> Result<GenerationResult, GatewayError> {
        self.respond()
    }

    async fn image(&self, _gate: &str, _prompt: &str) -> Result<GenerationResult, GatewayError> {
        self.respond()
    }
}
