//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod gemini;

// Re-exports
pub use gemini::{GeminiConfig, GeminiGateway};
