//! Poetry Camera API Client

use anyhow::{bail, Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use poetcam::{CreativeParameters, ImageFormat};

/// API Client for the Poetry Camera server
pub struct PoetryClient {
    client: Client,
    base_url: String,
}

// ============================================
// API Response Types
// ============================================

#[derive(Debug, Deserialize)]
pub struct PoemResponse {
    pub poem: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: Option<String>,
}

impl PoetryClient {
    /// Create a new API client
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Test connection with health check
    pub async fn health(&self) -> Result<bool> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }

    /// Upload an image and return the raw poem text
    pub async fn generate_poem(
        &self,
        image: Vec<u8>,
        file_name: &str,
        params: &CreativeParameters,
    ) -> Result<String> {
        let format = ImageFormat::from_file_name(file_name)
            .with_context(|| format!("Not a jpeg, png or gif file: {}", file_name))?;

        let image_part = Part::bytes(image)
            .file_name(file_name.to_string())
            .mime_str(format.mime_type())
            .context("Failed to build image upload")?;

        let mut form = Form::new().part("image", image_part);
        for (name, value) in [
            ("keyword", params.keyword()),
            ("poetStyle", params.poet_style()),
            ("poemLength", params.length_constraint()),
            ("instructions", params.instructions()),
        ] {
            if let Some(value) = value {
                form = form.text(name, value.to_string());
            }
        }

        let url = format!("{}/generate-poetry", self.base_url);
        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to connect to Poetry Camera API")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            match serde_json::from_str::<ErrorResponse>(&body) {
                Ok(ErrorResponse {
                    error,
                    details: Some(details),
                }) => bail!("API error ({}): {} - {}", status, error, details),
                Ok(ErrorResponse { error, .. }) => bail!("API error ({}): {}", status, error),
                Err(_) => bail!("API error ({}): {}", status, body),
            }
        }

        let poem: PoemResponse = resp.json().await.context("Failed to parse response")?;

        Ok(poem.poem)
    }
}
