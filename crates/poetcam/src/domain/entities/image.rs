//! ImagePayload - The photo a poem is written about
//!
//! Lives only for the duration of one request and is never persisted.

use bytes::Bytes;

use crate::domain::errors::PoetryError;
use crate::domain::value_objects::ImageFormat;

/// Raw image bytes plus the MIME type the uploader declared
#[derive(Debug, Clone)]
pub struct ImagePayload {
    data: Bytes,
    mime_type: String,
}

impl ImagePayload {
    pub fn new(data: impl Into<Bytes>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Check the payload is non-empty and of an accepted image type
    pub fn validate(&self) -> Result<ImageFormat, PoetryError> {
        if self.data.is_empty() {
            return Err(PoetryError::invalid_input("Image payload is empty"));
        }

        ImageFormat::from_mime(&self.mime_type).ok_or_else(|| {
            PoetryError::invalid_input(format!(
                "Unsupported image type '{}' (expected jpeg, png or gif)",
                self.mime_type
            ))
        })
    }
}
