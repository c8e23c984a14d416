//! Poetry Routes - Image upload to poem

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use bytes::Bytes;

use poetcam::{CreativeParameters, ImageFormat, ImagePayload, PoetryError};

use crate::models::{ErrorResponse, GeneratePoetryForm, PoemResponse};
use crate::AppState;

/// Headroom for the text fields and multipart framing around the image
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Generate a poem from an uploaded image
///
/// POST /generate-poetry (multipart/form-data)
#[utoipa::path(
    post,
    path = "/generate-poetry",
    request_body(
        content = GeneratePoetryForm,
        content_type = "multipart/form-data"
    ),
    responses(
        (status = 200, description = "Poem generated", body = PoemResponse),
        (status = 400, description = "Missing, oversized or non-image upload", body = ErrorResponse),
        (status = 405, description = "Method not allowed", body = ErrorResponse),
        (status = 500, description = "Generation failed", body = ErrorResponse)
    ),
    tag = "Poetry"
)]
pub async fn generate_poetry(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PoemResponse>, ApiError> {
    tracing::info!("Processing incoming request to generate-poetry endpoint");

    let mut upload: Option<Upload> = None;
    let mut params = CreativeParameters::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;
                upload = Some(Upload {
                    file_name,
                    content_type,
                    data,
                });
            }
            "keyword" => params.keyword = Some(field.text().await.map_err(multipart_error)?),
            "poetStyle" | "poet_style" => {
                params.poet_style = Some(field.text().await.map_err(multipart_error)?)
            }
            "poemLength" | "poem_length" | "lengthConstraint" => {
                params.length_constraint = Some(field.text().await.map_err(multipart_error)?)
            }
            "instructions" => {
                params.instructions = Some(field.text().await.map_err(multipart_error)?)
            }
            other => tracing::debug!("Ignoring unknown form field '{}'", other),
        }
    }

    let Some(upload) = upload else {
        tracing::info!("No image file found in request");
        return Err(bad_request("No image provided"));
    };

    if upload.data.len() > state.max_upload_bytes {
        return Err(bad_request(format!(
            "Image too large (max {} bytes)",
            state.max_upload_bytes
        )));
    }

    let format = upload
        .format()
        .ok_or_else(|| bad_request("Only image files are allowed!"))?;

    tracing::info!(
        "Image received successfully, size: {} bytes ({})",
        upload.data.len(),
        format
    );

    let image = ImagePayload::new(upload.data, format.mime_type());
    let poem = state
        .poetry_service
        .create_poem(image, &params)
        .await
        .map_err(poetry_error)?;

    Ok(Json(PoemResponse { poem }))
}

/// CORS preflight without an Origin header still gets a 200
async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> ApiError {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
}

// ============================================
// Helpers
// ============================================

struct Upload {
    file_name: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

impl Upload {
    /// Declared content type first, then the file name extension
    fn format(&self) -> Option<ImageFormat> {
        self.content_type
            .as_deref()
            .and_then(ImageFormat::from_mime)
            .or_else(|| self.file_name.as_deref().and_then(ImageFormat::from_file_name))
    }
}

fn bad_request(message: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::new(message)),
    )
}

fn multipart_error(err: MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return bad_request("Image too large");
    }
    tracing::info!("Malformed upload: {}", err.body_text());
    bad_request(format!("Malformed upload: {}", err.body_text()))
}

fn poetry_error(err: PoetryError) -> ApiError {
    match err {
        PoetryError::InvalidInput(message) => bad_request(message),
        other => {
            tracing::error!("Error generating poetry: {}", other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to generate poetry").with_details(other.to_string())),
            )
        }
    }
}

fn body_limit(max_upload_bytes: usize) -> usize {
    max_upload_bytes.saturating_add(FORM_OVERHEAD_BYTES)
}

pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route(
            "/generate-poetry",
            post(generate_poetry)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(DefaultBodyLimit::max(body_limit(max_upload_bytes)))
}
