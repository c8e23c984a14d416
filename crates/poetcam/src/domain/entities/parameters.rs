//! CreativeParameters - Optional user steering for the poem

use serde::{Deserialize, Serialize};

/// Optional creative input; a missing or blank field drops its constraint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreativeParameters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(default, alias = "poetStyle", skip_serializing_if = "Option::is_none")]
    pub poet_style: Option<String>,
    #[serde(
        default,
        alias = "poemLength",
        alias = "lengthConstraint",
        skip_serializing_if = "Option::is_none"
    )]
    pub length_constraint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl CreativeParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_poet_style(mut self, style: impl Into<String>) -> Self {
        self.poet_style = Some(style.into());
        self
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length_constraint = Some(length.into());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    pub fn keyword(&self) -> Option<&str> {
        present(&self.keyword)
    }

    pub fn poet_style(&self) -> Option<&str> {
        present(&self.poet_style)
    }

    pub fn length_constraint(&self) -> Option<&str> {
        present(&self.length_constraint)
    }

    pub fn instructions(&self) -> Option<&str> {
        present(&self.instructions)
    }
}

/// Trimmed value, or None when absent or blank
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
