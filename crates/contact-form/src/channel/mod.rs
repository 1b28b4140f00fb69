//! Submission channels
//!
//! The channel is the opaque collaborator that delivers a validated payload
//! (in production a hosted form service reached over HTTP).

use crate::error::TransportError;
use crate::payload::SubmissionPayload;
use async_trait::async_trait;
use serde_json::Value as JsonValue;

pub mod http;
pub mod memory;

pub use http::HttpChannel;
pub use memory::MemoryChannel;

/// Status and raw body returned by the endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelResponse {
    pub status: u16,
    pub body: String,
}

impl ChannelResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Any 2xx status is an acceptance, whatever the body says
    pub fn is_accepted(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body parsed as JSON, if it is JSON
    pub fn json(&self) -> Option<JsonValue> {
        serde_json::from_str(&self.body).ok()
    }

    /// `error` or `message` from a JSON body
    pub fn error_detail(&self) -> Option<String> {
        let json = self.json()?;
        ["error", "message"]
            .iter()
            .find_map(|key| json.get(*key).and_then(JsonValue::as_str))
            .map(str::to_string)
    }
}

/// Trait for submission transports
#[async_trait]
pub trait SubmissionChannel: Send + Sync {
    /// Deliver a payload; `Err` only when no response was obtained
    async fn send(&self, payload: &SubmissionPayload) -> Result<ChannelResponse, TransportError>;

    /// Get channel name
    fn name(&self) -> &'static str;
}
