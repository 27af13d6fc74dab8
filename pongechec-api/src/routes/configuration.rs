//! Configuration REST API Routes
//!
//! This module implements Axum route handlers for the five configuration
//! operations. Validation happens here, before the service is reached;
//! not-found conditions are explicit absent-result checks, never caught
//! storage errors.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use pongechec_core::{ConfigurationId, GameConfiguration};

use crate::{
    error::{ApiError, ApiResult, ErrorBody},
    service::ConfigurationService,
    state::AppState,
    types::SaveConfigurationRequest,
};

// ============================================================================
// ROUTE HANDLERS
// ============================================================================

/// GET /api/configurations - List all configurations
#[utoipa::path(
    get,
    path = "/api/configurations",
    tag = "Configurations",
    responses(
        (status = 200, description = "All configurations, most recent first", body = Vec<GameConfiguration>),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn list_configurations(
    State(service): State<ConfigurationService>,
) -> ApiResult<impl IntoResponse> {
    let configurations = service.list().await?;
    Ok(Json(configurations))
}

/// GET /api/configurations/{id} - Get configuration by ID
#[utoipa::path(
    get,
    path = "/api/configurations/{id}",
    tag = "Configurations",
    params(
        ("id" = i64, Path, description = "Configuration ID")
    ),
    responses(
        (status = 200, description = "Configuration details", body = GameConfiguration),
        (status = 404, description = "Configuration not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn get_configuration(
    State(service): State<ConfigurationService>,
    Path(id): Path<ConfigurationId>,
) -> ApiResult<impl IntoResponse> {
    let configuration = service
        .get(id)
        .await?
        .ok_or_else(ApiError::configuration_not_found)?;
    Ok(Json(configuration))
}

/// POST /api/configurations - Create a new configuration
#[utoipa::path(
    post,
    path = "/api/configurations",
    tag = "Configurations",
    request_body = SaveConfigurationRequest,
    responses(
        (status = 201, description = "Configuration created", body = GameConfiguration),
        (status = 400, description = "Name is missing or blank", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn create_configuration(
    State(service): State<ConfigurationService>,
    Json(req): Json<SaveConfigurationRequest>,
) -> ApiResult<impl IntoResponse> {
    if req.name.trim().is_empty() {
        return Err(ApiError::missing_field("Name"));
    }

    let created = service.create(&req).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/configurations/{id} - Replace an existing configuration
#[utoipa::path(
    put,
    path = "/api/configurations/{id}",
    tag = "Configurations",
    params(
        ("id" = i64, Path, description = "Configuration ID")
    ),
    request_body = SaveConfigurationRequest,
    responses(
        (status = 200, description = "Configuration updated, creation time preserved", body = GameConfiguration),
        (status = 404, description = "Configuration not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn update_configuration(
    State(service): State<ConfigurationService>,
    Path(id): Path<ConfigurationId>,
    Json(req): Json<SaveConfigurationRequest>,
) -> ApiResult<impl IntoResponse> {
    let updated = service
        .update(id, &req)
        .await?
        .ok_or_else(ApiError::configuration_not_found)?;
    Ok(Json(updated))
}

/// DELETE /api/configurations/{id} - Delete a configuration
#[utoipa::path(
    delete,
    path = "/api/configurations/{id}",
    tag = "Configurations",
    params(
        ("id" = i64, Path, description = "Configuration ID")
    ),
    responses(
        (status = 204, description = "Configuration deleted"),
        (status = 404, description = "Configuration not found", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn delete_configuration(
    State(service): State<ConfigurationService>,
    Path(id): Path<ConfigurationId>,
) -> ApiResult<StatusCode> {
    service
        .get(id)
        .await?
        .ok_or_else(ApiError::configuration_not_found)?;

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// ROUTER SETUP
// ============================================================================

/// Create the configuration routes router.
pub fn create_router() -> axum::Router<AppState> {
    axum::Router::new()
        .route("/", axum::routing::get(list_configurations))
        .route("/", axum::routing::post(create_configuration))
        .route("/:id", axum::routing::get(get_configuration))
        .route("/:id", axum::routing::put(update_configuration))
        .route("/:id", axum::routing::delete(delete_configuration))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_blank_names_fail_validation() {
        for name in ["", "   ", "\t\n"] {
            let req = SaveConfigurationRequest {
                name: name.to_string(),
                ..Default::default()
            };
            assert!(req.name.trim().is_empty());
        }
    }

    #[test]
    fn test_name_validation_error_shape() {
        let err = ApiError::missing_field("Name");
        assert_eq!(err.code, ErrorCode::MissingField);
        assert_eq!(err.message, "Name is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_shape() {
        let err = ApiError::configuration_not_found();
        assert_eq!(err.message, "Configuration not found");
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }
}
