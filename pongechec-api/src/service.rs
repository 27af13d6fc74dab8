//! Configuration Service
//!
//! Thin orchestration between the resource layer and storage. Every
//! operation delegates to the DbClient; the one added rule is that update
//! reattaches the stored record's `created_at`, so creation time survives
//! whatever the caller sent.

use pongechec_core::{ConfigurationId, GameConfiguration};

use crate::db::DbClient;
use crate::error::ApiResult;
use crate::types::SaveConfigurationRequest;

/// Business-logic facade over the storage layer.
#[derive(Clone)]
pub struct ConfigurationService {
    db: DbClient,
}

impl ConfigurationService {
    /// Create a new service backed by the given database client.
    pub fn new(db: DbClient) -> Self {
        Self { db }
    }

    /// Create a new configuration.
    pub async fn create(&self, req: &SaveConfigurationRequest) -> ApiResult<GameConfiguration> {
        self.db.configuration_create(req).await
    }

    /// Get a configuration by id.
    pub async fn get(&self, id: ConfigurationId) -> ApiResult<Option<GameConfiguration>> {
        self.db.configuration_get(id).await
    }

    /// List all configurations, most recently created first.
    pub async fn list(&self) -> ApiResult<Vec<GameConfiguration>> {
        self.db.configuration_list().await
    }

    /// Replace an existing configuration, preserving its creation time.
    ///
    /// Returns `None` if the id is unknown. The stored record's
    /// `created_at` is fetched and written back, never the caller's.
    pub async fn update(
        &self,
        id: ConfigurationId,
        req: &SaveConfigurationRequest,
    ) -> ApiResult<Option<GameConfiguration>> {
        let existing = match self.db.configuration_get(id).await? {
            Some(existing) => existing,
            None => return Ok(None),
        };

        let updated = self
            .db
            .configuration_update(id, req, existing.created_at)
            .await?;
        Ok(Some(updated))
    }

    /// Delete a configuration; a no-op if the id is absent.
    pub async fn delete(&self, id: ConfigurationId) -> ApiResult<()> {
        self.db.configuration_delete(id).await
    }

    /// Find the first configuration with exactly the given name.
    pub async fn find_by_name(&self, name: &str) -> ApiResult<Option<GameConfiguration>> {
        self.db.configuration_find_by_name(name).await
    }
}
