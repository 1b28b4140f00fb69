//! In-memory channel for tests and dry runs

use crate::channel::{ChannelResponse, SubmissionChannel};
use crate::error::TransportError;
use crate::payload::SubmissionPayload;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory channel
///
/// Records every payload it is handed and replies with queued outcomes,
/// falling back to `200 {"ok":true}` once the queue is empty.
#[derive(Clone, Default)]
pub struct MemoryChannel {
    replies: Arc<Mutex<VecDeque<Result<ChannelResponse, TransportError>>>>,
    sent: Arc<Mutex<Vec<SubmissionPayload>>>,
}

impl MemoryChannel {
    /// Create a channel that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response
    pub async fn respond_with(&self, status: u16, body: impl Into<String>) {
        self.replies
            .lock()
            .await
            .push_back(Ok(ChannelResponse::new(status, body)));
    }

    /// Queue a transport failure
    pub async fn fail_with(&self, err: TransportError) {
        self.replies.lock().await.push_back(Err(err));
    }

    /// Payloads received so far
    pub async fn sent(&self) -> Vec<SubmissionPayload> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl SubmissionChannel for MemoryChannel {
    async fn send(&self, payload: &SubmissionPayload) -> Result<ChannelResponse, TransportError> {
        self.sent.lock().await.push(payload.clone());
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Ok(ChannelResponse::new(200, r#"{"ok":true}"#)))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
