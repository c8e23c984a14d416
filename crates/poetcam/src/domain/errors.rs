//! Domain Errors
//!
//! Error taxonomy for poem generation.

use thiserror::Error;

/// Errors surfaced by poem generation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoetryError {
    /// Client-correctable: missing, empty, oversized or wrong-type image
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The generation service rejected the request or returned unusable output
    #[error("{}", upstream_message(.status, .message))]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    /// The generation service could not be reached
    #[error("Generation service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

fn upstream_message(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("Generation service error ({code}): {message}"),
        None => format!("Generation service error: {message}"),
    }
}

impl PoetryError {
    pub fn invalid_input<T: Into<String>>(message: T) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn upstream<T: Into<String>>(status: Option<u16>, message: T) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Whether the caller can fix this by changing the request
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
