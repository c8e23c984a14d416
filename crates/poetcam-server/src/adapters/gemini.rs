//! Gemini Poem Gateway
//!
//! Sends the composed prompt plus the inline image to Gemini's
//! `generateContent` endpoint using reqwest.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use poetcam::{ComposedPrompt, ImagePayload, PoemGateway, PoetryError};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Credential and model selection for the Gemini API
#[derive(Clone)]
pub struct GeminiConfig {
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point at a different host (tests use a local fake)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Gemini implementation of PoemGateway
#[derive(Clone)]
pub struct GeminiGateway {
    client: Client,
    config: GeminiConfig,
}

impl GeminiGateway {
    /// No request timeout is set; the platform's network defaults apply.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{model}:generateContent",
            self.config.base_url,
            model = self.config.model
        )
    }
}

#[async_trait]
impl PoemGateway for GeminiGateway {
    async fn generate(
        &self,
        image: &ImagePayload,
        prompt: &ComposedPrompt,
    ) -> Result<String, PoetryError> {
        let format = image.validate()?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![
                    Part::text(prompt.as_str()),
                    Part::inline_data(format.mime_type(), STANDARD.encode(image.data())),
                ],
            }],
        };

        tracing::info!(
            "Requesting poem from Gemini ({}) - {} image, {} bytes",
            self.config.model,
            format,
            image.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            let err = map_http_error(status, body);
            tracing::warn!("Gemini rejected request: {}", err);
            return Err(err);
        }

        let payload: Value = response.json().await.map_err(|err| {
            PoetryError::upstream(
                None,
                format!("Malformed response: {}", err.without_url()),
            )
        })?;

        extract_text(&payload).ok_or_else(|| {
            let reason = payload
                .get("promptFeedback")
                .and_then(|f| f.get("blockReason"))
                .and_then(|r| r.as_str());
            match reason {
                Some(reason) => PoetryError::upstream(None, format!("Response blocked: {reason}")),
                None => PoetryError::upstream(None, "Response contained no text"),
            }
        })
    }

    fn provider_name(&self) -> &str {
        "google"
    }

    fn model_id(&self) -> &str {
        &self.config.model
    }
}

// ============================================
// Request Types
// ============================================

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Part<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData<'a>>,
}

impl<'a> Part<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            text: Some(text),
            inline_data: None,
        }
    }

    fn inline_data(mime_type: &'a str, data: String) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData { mime_type, data }),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

// ============================================
// Helper Functions
// ============================================

/// Concatenated text parts of the first candidate
fn extract_text(root: &Value) -> Option<String> {
    let parts = root
        .get("candidates")?
        .as_array()?
        .first()?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

fn map_transport_error(err: reqwest::Error) -> PoetryError {
    let err = err.without_url();
    if err.is_builder() {
        return PoetryError::Internal(format!("Failed to build request: {err}"));
    }
    tracing::warn!("Gemini unreachable: {}", err);
    PoetryError::UpstreamUnavailable(err.to_string())
}

fn map_http_error(status: StatusCode, body: String) -> PoetryError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or(body);

    let message = if status == StatusCode::TOO_MANY_REQUESTS {
        format!("Rate limited: {message}")
    } else {
        message
    };

    PoetryError::upstream(Some(status.as_u16()), message)
}
