//! Pongechec API Server Entry Point
//!
//! Bootstraps configuration, ensures the backing table exists, and starts
//! the Axum HTTP server.

use pongechec_api::{create_api_router, telemetry, ApiConfig, ApiError, ApiResult, DbClient, DbConfig};

#[tokio::main]
async fn main() -> ApiResult<()> {
    telemetry::init_tracing();

    let db_config = DbConfig::from_env();
    let db = DbClient::from_config(&db_config)?;
    db.init_schema().await?;

    let api_config = ApiConfig::from_env();
    let app = create_api_router(db);

    let addr = api_config.bind_addr()?;
    tracing::info!(%addr, "Starting pongechec configuration API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
