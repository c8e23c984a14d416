//! Poetry DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Multipart form accepted by `POST /generate-poetry`
#[derive(Debug, Deserialize, ToSchema)]
#[allow(dead_code)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePoetryForm {
    /// Photo to write about (jpeg, png or gif)
    #[schema(value_type = String, format = Binary)]
    pub image: Vec<u8>,
    /// Theme to weave into the poem
    pub keyword: Option<String>,
    /// Poet whose style to imitate
    pub poet_style: Option<String>,
    /// Desired length, e.g. "10-16 lines" (default) or "8-12"
    pub poem_length: Option<String>,
    /// Free-text extra instructions
    pub instructions: Option<String>,
}

/// Generated poem, unprocessed (attribution line included)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PoemResponse {
    pub poem: String,
}

/// Error body returned for 4xx/5xx responses
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
