//! Poetry Application Service (Use Case)
//!
//! Composes the prompt and hands image + prompt to the gateway.

use std::sync::Arc;
use std::time::Instant;

use poetcam::{compose, CreativeParameters, ImagePayload, PoemGateway, PoetryError};

/// Application service for poem generation
pub struct PoetryService {
    gateway: Arc<dyn PoemGateway>,
}

impl PoetryService {
    pub fn new(gateway: Arc<dyn PoemGateway>) -> Self {
        Self { gateway }
    }

    /// Write a poem about `image`. The image is dropped when this returns.
    pub async fn create_poem(
        &self,
        image: ImagePayload,
        params: &CreativeParameters,
    ) -> Result<String, PoetryError> {
        let prompt = compose(params);
        tracing::debug!(
            "Composed prompt ({} chars) keyword={:?} style={:?} length={:?}",
            prompt.as_str().len(),
            params.keyword(),
            params.poet_style(),
            params.length_constraint()
        );

        let started = Instant::now();
        let result = self.gateway.generate(&image, &prompt).await;

        match &result {
            Ok(text) => tracing::info!(
                "Poem generated by {}/{} in {:?} ({} chars)",
                self.gateway.provider_name(),
                self.gateway.model_id(),
                started.elapsed(),
                text.len()
            ),
            Err(err) if err.is_client_error() => {
                tracing::info!("Rejected image: {}", err)
            }
            Err(err) => tracing::error!(
                "Poem generation failed after {:?}: {}",
                started.elapsed(),
                err
            ),
        }

        result
    }
}
