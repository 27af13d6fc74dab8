//! Shared application state for Axum routers.

use axum::extract::FromRef;

use crate::service::ConfigurationService;

/// Application-wide state shared across all configuration routes.
///
/// Assembled once at process start: the state holds the service, the
/// service holds the storage client, the storage client holds the pool.
#[derive(Clone)]
pub struct AppState {
    pub service: ConfigurationService,
}

impl FromRef<AppState> for ConfigurationService {
    fn from_ref(state: &AppState) -> Self {
        state.service.clone()
    }
}
