//! Database Connection Pool Module
//!
//! This module provides PostgreSQL connection pooling using deadpool-postgres
//! and the storage operations for configuration records. All SQL lives here,
//! as explicit parameterized statements with named-column row mapping - no
//! reflection, no query builder.

use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::{NoTls, Row};

use pongechec_core::{defaults, ConfigurationId, GameConfiguration, Timestamp};

use crate::error::{ApiError, ApiResult};
use crate::types::SaveConfigurationRequest;

/// Column list shared by every SELECT/RETURNING statement, in the order
/// the table declares them.
const COLUMNS: &str = "id, name, ball_speed, ball_damage, board_width, starting_player, \
     roi_lives, reine_lives, fou_lives, tour_lives, chevalier_lives, pion_lives, \
     roi_points, reine_points, fou_points, tour_points, chevalier_points, pion_points, \
     created_at";

// ============================================================================
// CONNECTION POOL CONFIGURATION
// ============================================================================

/// Database connection pool configuration.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL host
    pub host: String,
    /// PostgreSQL port
    pub port: u16,
    /// Database name
    pub dbname: String,
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
    /// Maximum pool size
    pub max_size: usize,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            dbname: "pongechec".to_string(),
            user: "postgres".to_string(),
            password: "".to_string(),
            max_size: 16,
        }
    }
}

impl DbConfig {
    /// Create a new database configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("PONGECHEC_DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: std::env::var("PONGECHEC_DB_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5432),
            dbname: std::env::var("PONGECHEC_DB_NAME")
                .unwrap_or_else(|_| "pongechec".to_string()),
            user: std::env::var("PONGECHEC_DB_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            password: std::env::var("PONGECHEC_DB_PASSWORD").unwrap_or_default(),
            max_size: std::env::var("PONGECHEC_DB_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(16),
        }
    }

    /// Create a connection pool from this configuration.
    ///
    /// Connections are established lazily, on first use.
    pub fn create_pool(&self) -> ApiResult<Pool> {
        let mut cfg = Config::new();
        cfg.host = Some(self.host.clone());
        cfg.port = Some(self.port);
        cfg.dbname = Some(self.dbname.clone());
        cfg.user = Some(self.user.clone());
        cfg.password = Some(self.password.clone());
        cfg.pool = Some(PoolConfig::new(self.max_size));

        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| ApiError::database_error(format!("Failed to create pool: {}", e)))?;

        Ok(pool)
    }
}

// ============================================================================
// DATABASE CLIENT WRAPPER
// ============================================================================

/// Database client that wraps a connection pool and provides the storage
/// operations for configuration records.
#[derive(Clone)]
pub struct DbClient {
    pool: Pool,
}

impl DbClient {
    /// Create a new database client with the given pool.
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    /// Create a new database client from configuration.
    pub fn from_config(config: &DbConfig) -> ApiResult<Self> {
        let pool = config.create_pool()?;
        Ok(Self::new(pool))
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> ApiResult<deadpool_postgres::Object> {
        self.pool.get().await.map_err(ApiError::from)
    }

    // ========================================================================
    // SCHEMA
    // ========================================================================

    /// Create the `game_configurations` table if it does not exist.
    ///
    /// Idempotent; run once at startup. Column defaults mirror
    /// `pongechec_core::defaults` so rows inserted outside the API still
    /// carry the canonical values.
    pub async fn init_schema(&self) -> ApiResult<()> {
        let conn = self.get_conn().await?;

        let ddl = format!(
            "CREATE TABLE IF NOT EXISTS game_configurations (\
                 id BIGSERIAL PRIMARY KEY, \
                 name VARCHAR(100) NOT NULL, \
                 ball_speed INTEGER NOT NULL DEFAULT {}, \
                 ball_damage INTEGER NOT NULL DEFAULT {}, \
                 board_width INTEGER NOT NULL DEFAULT {}, \
                 starting_player INTEGER NOT NULL DEFAULT {}, \
                 roi_lives INTEGER NOT NULL DEFAULT {}, \
                 reine_lives INTEGER NOT NULL DEFAULT {}, \
                 fou_lives INTEGER NOT NULL DEFAULT {}, \
                 tour_lives INTEGER NOT NULL DEFAULT {}, \
                 chevalier_lives INTEGER NOT NULL DEFAULT {}, \
                 pion_lives INTEGER NOT NULL DEFAULT {}, \
                 roi_points INTEGER NOT NULL DEFAULT {}, \
                 reine_points INTEGER NOT NULL DEFAULT {}, \
                 fou_points INTEGER NOT NULL DEFAULT {}, \
                 tour_points INTEGER NOT NULL DEFAULT {}, \
                 chevalier_points INTEGER NOT NULL DEFAULT {}, \
                 pion_points INTEGER NOT NULL DEFAULT {}, \
                 created_at TIMESTAMPTZ NOT NULL DEFAULT now()\
             )",
            defaults::BALL_SPEED,
            defaults::BALL_DAMAGE,
            defaults::BOARD_WIDTH,
            defaults::STARTING_PLAYER,
            defaults::ROI_LIVES,
            defaults::REINE_LIVES,
            defaults::FOU_LIVES,
            defaults::TOUR_LIVES,
            defaults::CHEVALIER_LIVES,
            defaults::PION_LIVES,
            defaults::ROI_POINTS,
            defaults::REINE_POINTS,
            defaults::FOU_POINTS,
            defaults::TOUR_POINTS,
            defaults::CHEVALIER_POINTS,
            defaults::PION_POINTS,
        );

        conn.batch_execute(&ddl).await?;
        Ok(())
    }

    /// Round-trip a trivial query to verify pool connectivity.
    pub async fn health_check(&self) -> ApiResult<()> {
        let conn = self.get_conn().await?;
        conn.query_one("SELECT 1", &[]).await?;
        Ok(())
    }

    // ========================================================================
    // CONFIGURATION OPERATIONS
    // ========================================================================

    /// Insert a new configuration; storage assigns `id` and `created_at`.
    pub async fn configuration_create(
        &self,
        req: &SaveConfigurationRequest,
    ) -> ApiResult<GameConfiguration> {
        let conn = self.get_conn().await?;

        let stmt = format!(
            "INSERT INTO game_configurations (\
                 name, ball_speed, ball_damage, board_width, starting_player, \
                 roi_lives, reine_lives, fou_lives, tour_lives, chevalier_lives, pion_lives, \
                 roi_points, reine_points, fou_points, tour_points, chevalier_points, pion_points\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17) \
             RETURNING {}",
            COLUMNS
        );

        let row = conn
            .query_one(
                stmt.as_str(),
                &[
                    &req.name,
                    &req.ball_speed,
                    &req.ball_damage,
                    &req.board_width,
                    &req.starting_player,
                    &req.roi_lives,
                    &req.reine_lives,
                    &req.fou_lives,
                    &req.tour_lives,
                    &req.chevalier_lives,
                    &req.pion_lives,
                    &req.roi_points,
                    &req.reine_points,
                    &req.fou_points,
                    &req.tour_points,
                    &req.chevalier_points,
                    &req.pion_points,
                ],
            )
            .await?;

        Ok(row_to_configuration(&row))
    }

    /// Get a configuration by id; absent ids yield `None`, never an error.
    pub async fn configuration_get(
        &self,
        id: ConfigurationId,
    ) -> ApiResult<Option<GameConfiguration>> {
        let conn = self.get_conn().await?;

        let stmt = format!("SELECT {} FROM game_configurations WHERE id = $1", COLUMNS);
        let row = conn.query_opt(stmt.as_str(), &[&id]).await?;

        Ok(row.map(|r| row_to_configuration(&r)))
    }

    /// List all configurations, most recently created first.
    pub async fn configuration_list(&self) -> ApiResult<Vec<GameConfiguration>> {
        let conn = self.get_conn().await?;

        let stmt = format!(
            "SELECT {} FROM game_configurations ORDER BY created_at DESC, id DESC",
            COLUMNS
        );
        let rows = conn.query(stmt.as_str(), &[]).await?;

        Ok(rows.iter().map(row_to_configuration).collect())
    }

    /// Full replace of every column except `id` and `created_at`; the
    /// passed `created_at` is written back verbatim.
    pub async fn configuration_update(
        &self,
        id: ConfigurationId,
        req: &SaveConfigurationRequest,
        created_at: Timestamp,
    ) -> ApiResult<GameConfiguration> {
        let conn = self.get_conn().await?;

        let stmt = format!(
            "UPDATE game_configurations SET \
                 name = $2, ball_speed = $3, ball_damage = $4, board_width = $5, \
                 starting_player = $6, roi_lives = $7, reine_lives = $8, fou_lives = $9, \
                 tour_lives = $10, chevalier_lives = $11, pion_lives = $12, roi_points = $13, \
                 reine_points = $14, fou_points = $15, tour_points = $16, \
                 chevalier_points = $17, pion_points = $18, created_at = $19 \
             WHERE id = $1 RETURNING {}",
            COLUMNS
        );

        let row = conn
            .query_opt(
                stmt.as_str(),
                &[
                    &id,
                    &req.name,
                    &req.ball_speed,
                    &req.ball_damage,
                    &req.board_width,
                    &req.starting_player,
                    &req.roi_lives,
                    &req.reine_lives,
                    &req.fou_lives,
                    &req.tour_lives,
                    &req.chevalier_lives,
                    &req.pion_lives,
                    &req.roi_points,
                    &req.reine_points,
                    &req.fou_points,
                    &req.tour_points,
                    &req.chevalier_points,
                    &req.pion_points,
                    &created_at,
                ],
            )
            .await?;

        row.map(|r| row_to_configuration(&r)).ok_or_else(|| {
            ApiError::database_error(format!("Configuration {} no longer exists", id))
        })
    }

    /// Delete a configuration; a no-op if the id is absent.
    pub async fn configuration_delete(&self, id: ConfigurationId) -> ApiResult<()> {
        let conn = self.get_conn().await?;

        conn.execute("DELETE FROM game_configurations WHERE id = $1", &[&id])
            .await?;
        Ok(())
    }

    /// Find the first configuration with exactly the given name.
    pub async fn configuration_find_by_name(
        &self,
        name: &str,
    ) -> ApiResult<Option<GameConfiguration>> {
        let conn = self.get_conn().await?;

        let stmt = format!(
            "SELECT {} FROM game_configurations WHERE name = $1 ORDER BY id LIMIT 1",
            COLUMNS
        );
        let row = conn.query_opt(stmt.as_str(), &[&name]).await?;

        Ok(row.map(|r| row_to_configuration(&r)))
    }
}

// ============================================================================
// ROW MAPPING
// ============================================================================

/// Map a `game_configurations` row to the record, by column name.
fn row_to_configuration(row: &Row) -> GameConfiguration {
    GameConfiguration {
        id: row.get("id"),
        name: row.get("name"),
        ball_speed: row.get("ball_speed"),
        ball_damage: row.get("ball_damage"),
        board_width: row.get("board_width"),
        starting_player: row.get("starting_player"),
        roi_lives: row.get("roi_lives"),
        reine_lives: row.get("reine_lives"),
        fou_lives: row.get("fou_lives"),
        tour_lives: row.get("tour_lives"),
        chevalier_lives: row.get("chevalier_lives"),
        pion_lives: row.get("pion_lives"),
        roi_points: row.get("roi_points"),
        reine_points: row.get("reine_points"),
        fou_points: row.get("fou_points"),
        tour_points: row.get("tour_points"),
        chevalier_points: row.get("chevalier_points"),
        pion_points: row.get("pion_points"),
        created_at: row.get("created_at"),
    }
}
