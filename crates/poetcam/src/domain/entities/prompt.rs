//! ComposedPrompt - The instruction sent alongside the image

use serde::Serialize;

/// Immutable prompt text, built once per request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ComposedPrompt(String);

impl ComposedPrompt {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ComposedPrompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ComposedPrompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
