//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{ApiEndpoints, ApiInfo, ErrorResponse, GeneratePoetryForm, PoemResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Poetry endpoints
        super::poetry::generate_poetry,
        // Info endpoints
        super::info::api_info,
    ),
    info(
        title = "Poetry Camera API",
        version = "0.1.0",
        description = "Upload a photo, receive a poem about it.\n\nThe poem ends with a `— Pen Name` attribution line.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Poetry", description = "Poetry - Image to poem generation via Gemini"),
        (name = "Info", description = "Info - API description"),
    ),
    components(
        schemas(
            // Poetry
            GeneratePoetryForm,
            PoemResponse,
            ErrorResponse,
            // Info
            ApiInfo,
            ApiEndpoints,
        )
    ),
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_poetry_endpoint() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/generate-poetry"));
        assert!(doc.paths.paths.contains_key("/api"));
    }
}
