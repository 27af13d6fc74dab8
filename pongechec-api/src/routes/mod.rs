//! REST API Routes Module
//!
//! Route handlers and router assembly for the configuration service:
//! - Configuration CRUD under /api/configurations
//! - Health check endpoints under /health
//! - OpenAPI spec at /openapi.json (Swagger UI behind the `swagger-ui`
//!   feature)
//! - CORS headers on every outgoing response

pub mod configuration;
pub mod health;

use axum::{response::IntoResponse, routing::get, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::db::DbClient;
use crate::middleware::cors_middleware;
use crate::openapi::ApiDoc;
use crate::service::ConfigurationService;
use crate::state::AppState;

/// Handler for /openapi.json endpoint.
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Create the complete API router.
///
/// Wiring is constructor-style, assembled once at process start: the
/// resource layer holds the service, the service holds the storage client.
///
/// # Middleware Order (outer to inner)
/// 1. CORS (outermost) - annotates every response, including unmatched routes
/// 2. Request tracing
/// 3. Handlers
pub fn create_api_router(db: DbClient) -> Router {
    let service = ConfigurationService::new(db.clone());
    let state = AppState { service };

    let api_routes = Router::new()
        .nest("/configurations", configuration::create_router())
        .with_state(state);

    let router = Router::new()
        .nest("/api", api_routes)
        // Health checks live outside the API base path
        .nest("/health", health::create_router(db))
        // OpenAPI spec
        .route("/openapi.json", get(openapi_json));

    // Add Swagger UI if the swagger-ui feature is enabled
    #[cfg(feature = "swagger-ui")]
    let router = router.merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url("/openapi.json", ApiDoc::openapi()),
    );

    router
        .layer(TraceLayer::new_for_http())
        .layer(axum::middleware::from_fn(cors_middleware))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbConfig;

    #[test]
    fn test_router_assembles_without_database() {
        // Pool connections are lazy; building the full router must not
        // require a running PostgreSQL.
        let db = DbClient::from_config(&DbConfig::default()).expect("pool");
        let _router = create_api_router(db);
    }
}
