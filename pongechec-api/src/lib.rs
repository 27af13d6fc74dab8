//! Pongechec Configuration API - REST API Layer
//!
//! This crate exposes CRUD for game-configuration records over HTTP JSON
//! (Axum), backed by PostgreSQL. Requests flow resource layer -> service ->
//! storage; every response passes through the CORS middleware on the way
//! out.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod state;
pub mod telemetry;
pub mod types;

// Re-export commonly used types
pub use config::ApiConfig;
pub use db::{DbClient, DbConfig};
pub use error::{ApiError, ApiResult, ErrorBody, ErrorCode};
pub use middleware::cors_middleware;
pub use openapi::ApiDoc;
pub use routes::create_api_router;
pub use service::ConfigurationService;
pub use state::AppState;
pub use types::SaveConfigurationRequest;
