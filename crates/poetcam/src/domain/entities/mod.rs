//! Domain Entities
//!
//! - ImagePayload: the uploaded photo, request-scoped
//! - CreativeParameters: optional keyword/style/length/instructions
//! - ComposedPrompt: the instruction sent with the image
//! - ParsedPoem: poem body and author split from the generated text

mod image;
mod parameters;
mod poem;
mod prompt;

pub use image::*;
pub use parameters::*;
pub use poem::*;
pub use prompt::*;
