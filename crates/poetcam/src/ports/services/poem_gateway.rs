//! Poem Gateway Port
//!
//! Abstract interface to the multimodal model that writes the poem.
//! Implementations live in the infrastructure layer (e.g. the Gemini adapter
//! in `poetcam-server`).

use async_trait::async_trait;

use crate::domain::entities::{ComposedPrompt, ImagePayload};
use crate::domain::errors::PoetryError;

/// Generation Gateway
///
/// One call to `generate` is one outbound request to the model. Implementations
/// must reject an empty or non-image payload with `PoetryError::InvalidInput`
/// before touching the network, and must not retry on their own.
///
/// # Example
///
/// ```rust,ignore
/// use poetcam::ports::PoemGateway;
///
/// struct GeminiGateway { /* ... */ }
///
/// #[async_trait]
/// impl PoemGateway for GeminiGateway {
///     async fn generate(&self, image: &ImagePayload, prompt: &ComposedPrompt)
///         -> Result<String, PoetryError> {
///         image.validate()?;
///         // Call the vision model
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait PoemGateway: Send + Sync {
    /// Send the image and prompt, returning the model's raw text
    async fn generate(
        &self,
        image: &ImagePayload,
        prompt: &ComposedPrompt,
    ) -> Result<String, PoetryError>;

    /// Provider name (e.g., "google")
    fn provider_name(&self) -> &str;

    /// Model ID being used
    fn model_id(&self) -> &str;
}
