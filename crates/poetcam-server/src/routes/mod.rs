//! Poetry Camera API Routes
//!
//! - /generate-poetry - Image upload to poem (Gemini)
//! - /api - API description
//! - /swagger-ui - OpenAPI documentation

pub mod info;
pub mod poetry;
pub mod swagger;
