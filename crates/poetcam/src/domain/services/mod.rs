//! Domain Services
//!
//! Pure functions over domain entities: prompt composition and
//! attribution splitting.

pub mod composer;
pub mod splitter;

pub use composer::{compose, DEFAULT_LENGTH};
pub use splitter::{find_attribution, split, Attribution};
