//! Prompt Composer
//!
//! Renders the instruction sent to the vision model. Clause order is fixed:
//! preamble, length target, keyword, style, free-text instructions, and the
//! closing format directive.

use crate::domain::entities::{ComposedPrompt, CreativeParameters};

/// Length target used when the caller gives none
pub const DEFAULT_LENGTH: &str = "10-16 lines";

const PREAMBLE: &str = "You are an accomplished literary poet. \
Study this image closely and write an original, evocative poem inspired by what you see. \
Let the poem reflect the mood, colors, subjects, and emotional tone of the image, \
using vivid imagery and fresh metaphors tied to what is visible in the picture. \
Structure it in clear stanzas with line breaks.";

const CLOSING: &str = "Respond with the poem only, in exactly this format:\n\
<poem>\n\
— <PoetName>\n\
where <PoetName> is an evocative pen name that suits the poem's style. \
Do not add a title, explanations, or any other commentary.";

/// Build the prompt for one request
pub fn compose(params: &CreativeParameters) -> ComposedPrompt {
    let length = params
        .length_constraint()
        .map(normalize_length)
        .unwrap_or_else(|| DEFAULT_LENGTH.to_string());

    let mut prompt = String::from(PREAMBLE);
    prompt.push_str(&format!("\n\nThe poem should be {length} long."));

    if let Some(keyword) = params.keyword() {
        prompt.push_str(&format!(
            "\nWeave the theme \"{keyword}\" naturally into the poem."
        ));
    }

    if let Some(style) = params.poet_style() {
        prompt.push_str(&format!(
            "\nWrite in the style of {style}, echoing their voice, form, and imagery."
        ));
    }

    if let Some(instructions) = params.instructions() {
        prompt.push_str(&format!("\nAdditional instructions: {instructions}"));
    }

    prompt.push_str("\n\n");
    prompt.push_str(CLOSING);

    ComposedPrompt::new(prompt)
}

/// "12" or "8-12" read as line counts; anything else is used as written
fn normalize_length(length: &str) -> String {
    let is_count = length
        .chars()
        .all(|c| c.is_ascii_digit() || c == '-' || c == '–' || c.is_whitespace())
        && length.chars().any(|c| c.is_ascii_digit());

    if is_count {
        format!("{length} lines")
    } else {
        length.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_only() {
        let prompt = compose(&CreativeParameters::default());
        let text = prompt.as_str();

        assert!(text.starts_with("You are an accomplished literary poet."));
        assert!(text.contains("The poem should be 10-16 lines long."));
        assert!(!text.contains("Weave the theme"));
        assert!(!text.contains("in the style of"));
        assert!(!text.contains("Additional instructions"));
        assert!(text.ends_with("any other commentary."));
        assert!(text.contains("<poem>\n— <PoetName>"));
    }

    #[test]
    fn test_keyword_is_embedded_verbatim() {
        let params = CreativeParameters::new().with_keyword("midnight harbor");
        let prompt = compose(&params);
        assert!(prompt.as_str().contains("midnight harbor"));
    }

    #[test]
    fn test_clause_order() {
        let params = CreativeParameters::new()
            .with_instructions("Make it rhyme")
            .with_poet_style("Pablo Neruda")
            .with_keyword("autumn")
            .with_length("4 stanzas");
        let text = compose(&params).into_string();

        let length = text.find("4 stanzas").unwrap();
        let keyword = text.find("autumn").unwrap();
        let style = text.find("Pablo Neruda").unwrap();
        let extra = text.find("Make it rhyme").unwrap();
        let closing = text.find("Respond with the poem only").unwrap();

        assert!(length < keyword);
        assert!(keyword < style);
        assert!(style < extra);
        assert!(extra < closing);
    }

    #[test]
    fn test_blank_fields_are_omitted() {
        let params = CreativeParameters::new()
            .with_keyword("  ")
            .with_poet_style("")
            .with_length(" ")
            .with_instructions("\n");
        assert_eq!(compose(&params), compose(&CreativeParameters::default()));
    }

    #[test]
    fn test_numeric_length_reads_as_lines() {
        assert_eq!(normalize_length("12"), "12 lines");
        assert_eq!(normalize_length("8-12"), "8-12 lines");
        assert_eq!(normalize_length("8 - 12"), "8 - 12 lines");
        assert_eq!(normalize_length("three short stanzas"), "three short stanzas");
        assert_eq!(normalize_length("10-16 lines"), "10-16 lines");
    }

    #[test]
    fn test_deterministic() {
        let params = CreativeParameters::new().with_keyword("fog").with_length("6");
        assert_eq!(compose(&params), compose(&params));
    }
}
