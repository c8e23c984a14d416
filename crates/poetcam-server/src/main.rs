use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod models;
mod routes;

#[cfg(test)]
mod test_support;

use adapters::GeminiGateway;
use application::PoetryService;
use config::ServerConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub poetry_service: Arc<PoetryService>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(poetry_service: Arc<PoetryService>, max_upload_bytes: usize) -> Self {
        Self {
            poetry_service,
            max_upload_bytes,
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Poetry Camera API is running - point, shoot, rhyme".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router with CORS and request tracing
pub fn build_router(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::info::router())
        .merge(routes::poetry::router(state.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📷 Poetry Camera API initializing...");

    let config = ServerConfig::from_lookup(|key| secrets.get(key)).map_err(|e| {
        tracing::error!("❌ Invalid configuration: {}", e);
        shuttle_runtime::Error::Custom(e.into())
    })?;

    tracing::info!(
        "🔐 Gemini configured (model: {}, upload limit: {} bytes)",
        config.gemini.model(),
        config.max_upload_bytes
    );

    let gateway = Arc::new(GeminiGateway::new(config.gemini.clone()));
    let poetry_service = Arc::new(PoetryService::new(gateway));
    let state = AppState::new(poetry_service, config.max_upload_bytes);

    let router = build_router(state);

    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Poetry Camera API ready - POST /generate-poetry");

    Ok(router.into())
}
