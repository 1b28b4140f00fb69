// File: src/error.rs
// Purpose: Submission failures

use std::time::Duration;
use thiserror::Error;

/// The request never produced a response
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("no submission endpoint configured")]
    MissingEndpoint,

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("request to {endpoint} failed: {reason}")]
    Connection { endpoint: String, reason: String },
}

/// Why a validated submission did not go through
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-2xx status
    #[error("submission rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl SubmitError {
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::Rejected { status, .. } => Some(*status),
            SubmitError::Transport(_) => None,
        }
    }
}
