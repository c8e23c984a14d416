//! ParsedPoem - Poem body separated from its pen-name line

use serde::{Deserialize, Serialize};

/// Author shown when the text carries no attribution line
pub const FALLBACK_AUTHOR: &str = "Anonymous";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPoem {
    pub body: String,
    pub author: String,
}

impl ParsedPoem {
    pub fn new(body: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            author: author.into(),
        }
    }

    pub fn unattributed(body: impl Into<String>) -> Self {
        Self::new(body, FALLBACK_AUTHOR)
    }

    pub fn is_attributed(&self) -> bool {
        self.author != FALLBACK_AUTHOR
    }
}
