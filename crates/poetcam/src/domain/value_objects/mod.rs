//! Value Objects
//!
//! Immutable domain values.

mod image_format;

pub use image_format::*;
