//! Poetry Camera Domain Library
//!
//! Core types for turning a photo into a poem.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: ImagePayload, CreativeParameters, ComposedPrompt, ParsedPoem
//!   - `value_objects/`: ImageFormat whitelist
//!   - `services/`: Prompt Composer and Response Splitter
//!   - `errors/`: PoetryError taxonomy
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `services/`: PoemGateway, the Generation Gateway
//!
//! # Usage
//!
//! ```rust
//! use poetcam::{compose, split, CreativeParameters};
//!
//! let prompt = compose(&CreativeParameters::new().with_keyword("harbor"));
//! assert!(prompt.as_str().contains("harbor"));
//!
//! let poem = split("Boats asleep on silver water\n\n— Tidewell");
//! assert_eq!(poem.author, "Tidewell");
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    compose, split, ComposedPrompt, CreativeParameters, ImageFormat, ImagePayload, ParsedPoem,
    PoetryError, FALLBACK_AUTHOR,
};
pub use domain::services::DEFAULT_LENGTH;
pub use ports::PoemGateway;
