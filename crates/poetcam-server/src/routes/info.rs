//! Info Routes - API description

use axum::{routing::get, Json, Router};

use crate::models::{ApiEndpoints, ApiInfo};
use crate::AppState;

/// Describe the API
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "API information", body = ApiInfo)
    ),
    tag = "Info"
)]
pub async fn api_info() -> Json<ApiInfo> {
    Json(ApiInfo {
        name: "Poetry Camera API".to_string(),
        endpoints: ApiEndpoints {
            generate_poetry: "/generate-poetry".to_string(),
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/api", get(api_info))
}
