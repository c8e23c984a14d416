//! Poetry Camera HTTP Models
//!
//! - Poetry: upload form, poem and error bodies
//! - Info: API description

mod info;
mod poetry;

pub use info::*;
pub use poetry::*;
