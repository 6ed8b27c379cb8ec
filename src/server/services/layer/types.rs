use serde::{Deserialize, Serialize};

use crate::server::services::gateway::Message;

/// Request envelope for the gateway's `/complete` endpoint.
#[derive(Debug, Serialize)]
pub struct CompleteRequest<'a> {
    pub gate: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub data: CompleteData<'a>,
}

/// Payload section; exactly one field is populated per generation kind.
#[derive(Debug, Serialize)]
pub struct CompleteData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messages: Option<&'a [Message]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct CompleteResponse {
    pub content: Option<String>,
    pub model: String,
    #[serde(default)]
    pub cost: f64,
    pub images: Option<Vec<ImageDescriptor>>,
}

#[derive(Debug, Deserialize)]
pub struct ImageDescriptor {
    pub url: String,
}
