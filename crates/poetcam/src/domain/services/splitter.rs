//! Response Splitter
//!
//! Separates the generated poem from the trailing pen-name line the model is
//! asked to append (`— Luna Verse`). Hyphen, em-dash and tilde all count as the
//! attribution marker, and an optional `by` may precede the name.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::{ParsedPoem, FALLBACK_AUTHOR};

static ATTRIBUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-—~]\s*(?:((?i:by))\b)?\s*([A-Za-z\s.]+)$")
        .expect("attribution pattern is valid")
});

/// A trailing attribution found in poem text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution<'a> {
    /// Byte offset where the marker starts
    pub start: usize,
    /// The whole matched marker, dash included
    pub marker: &'a str,
    /// The `by` token, when present
    pub by: Option<&'a str>,
    /// The name capture, untrimmed
    pub name: &'a str,
}

impl Attribution<'_> {
    /// Name capture if non-blank, else the marker without its dash
    pub fn author(&self) -> Option<String> {
        let name = self.name.trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }

        let stripped: String = self
            .marker
            .chars()
            .filter(|c| !matches!(c, '-' | '—' | '~'))
            .collect();
        let stripped = stripped.trim();
        (!stripped.is_empty()).then(|| stripped.to_string())
    }
}

/// Find the attribution anchored at the end of `text`, if any
pub fn find_attribution(text: &str) -> Option<Attribution<'_>> {
    let caps = ATTRIBUTION.captures(text)?;
    let whole = caps.get(0)?;
    Some(Attribution {
        start: whole.start(),
        marker: whole.as_str(),
        by: caps.get(1).map(|m| m.as_str()),
        name: caps.get(2).map(|m| m.as_str()).unwrap_or_default(),
    })
}

/// Split generated text into poem body and author
///
/// Only the trailing attribution is cut. A signature line the model repeated
/// directly above it (same name, on a line of its own) is dropped as well.
/// Once the body no longer ends with a marker, splitting it again returns it
/// unchanged.
pub fn split(text: &str) -> ParsedPoem {
    let Some(found) = find_attribution(text) else {
        return ParsedPoem::unattributed(text.trim());
    };

    let mut body = text[..found.start].trim();
    let Some(author) = found.author() else {
        return ParsedPoem::new(body, FALLBACK_AUTHOR);
    };

    while let Some(start) = repeated_signature(body, &author) {
        body = body[..start].trim();
    }

    ParsedPoem::new(body, author)
}

/// Start of a final line that is nothing but a marker and `author`
fn repeated_signature(body: &str, author: &str) -> Option<usize> {
    let inner = find_attribution(body)?;
    let own_line = inner.start == 0 || body[..inner.start].ends_with('\n');
    let same_name = inner
        .author()
        .is_some_and(|name| name.eq_ignore_ascii_case(author));
    (own_line && same_name).then_some(inner.start)
}
