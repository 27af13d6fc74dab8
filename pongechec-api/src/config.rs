//! API Configuration Module
//!
//! Server-level settings loaded from environment variables with sensible
//! defaults for development.

use std::net::SocketAddr;

use crate::error::{ApiError, ApiResult};

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Interface to bind, e.g. "0.0.0.0" or "127.0.0.1".
    pub bind: String,
    /// TCP port to listen on.
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `PONGECHEC_API_BIND`: Interface to bind (default: "0.0.0.0")
    /// - `PORT` or `PONGECHEC_API_PORT`: Listen port (default: 8080)
    pub fn from_env() -> Self {
        let bind =
            std::env::var("PONGECHEC_API_BIND").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = std::env::var("PORT")
            .ok()
            .or_else(|| std::env::var("PONGECHEC_API_PORT").ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        Self { bind, port }
    }

    /// Resolve the configured bind address.
    pub fn bind_addr(&self) -> ApiResult<SocketAddr> {
        let addr = format!("{}:{}", self.bind, self.port);
        addr.parse::<SocketAddr>()
            .map_err(|e| ApiError::invalid_input(format!("Invalid bind address {}: {}", addr, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_bind_addr_resolves() {
        let config = ApiConfig::default();
        let addr = config.bind_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_bind_addr_rejects_garbage() {
        let config = ApiConfig {
            bind: "not-an-interface".to_string(),
            port: 8080,
        };
        assert!(config.bind_addr().is_err());
    }
}
