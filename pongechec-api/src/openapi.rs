//! OpenAPI Specification for the Configuration API
//!
//! Uses utoipa to generate the OpenAPI document from Rust types and route
//! annotations.

use utoipa::OpenApi;

use crate::error::ErrorBody;
use crate::routes::{configuration, health};
use crate::types::SaveConfigurationRequest;

use pongechec_core::GameConfiguration;

/// OpenAPI document for the pongechec configuration API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pongechec Configuration API",
        version = "0.1.0",
        description = "CRUD service for named presets of paddle-chess gameplay parameters",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local Development")
    ),
    tags(
        (name = "Configurations", description = "Gameplay configuration presets"),
        (name = "Health", description = "Liveness and readiness probes")
    ),
    paths(
        // === Configuration Routes ===
        configuration::list_configurations,
        configuration::get_configuration,
        configuration::create_configuration,
        configuration::update_configuration,
        configuration::delete_configuration,

        // === Health Routes ===
        health::ping,
        health::liveness,
        health::readiness,
    ),
    components(schemas(
        GameConfiguration,
        SaveConfigurationRequest,
        ErrorBody,
        health::HealthResponse,
        health::HealthStatus,
        health::HealthDetails,
    ))
)]
pub struct ApiDoc;
