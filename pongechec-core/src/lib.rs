//! Pongechec Core - Configuration Record Types
//!
//! Pure data structures with no behavior. The API crate depends on this.
//! This crate contains ONLY data types - no business logic, no I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// IDENTITY TYPES
// ============================================================================

/// Row identifier assigned by storage (BIGSERIAL primary key).
pub type ConfigurationId = i64;

/// Timestamp type using UTC timezone.
pub type Timestamp = DateTime<Utc>;

// ============================================================================
// GAMEPLAY DEFAULTS
// ============================================================================

/// Canonical default values for gameplay parameters.
///
/// These are the values a configuration takes for any field the client
/// omits, and the column defaults of the backing table.
pub mod defaults {
    pub const BALL_SPEED: i32 = 3;
    pub const BALL_DAMAGE: i32 = 1;
    pub const BOARD_WIDTH: i32 = 8;
    pub const STARTING_PLAYER: i32 = 1;

    // Piece lives
    pub const ROI_LIVES: i32 = 3;
    pub const REINE_LIVES: i32 = 2;
    pub const FOU_LIVES: i32 = 2;
    pub const TOUR_LIVES: i32 = 2;
    pub const CHEVALIER_LIVES: i32 = 2;
    pub const PION_LIVES: i32 = 1;

    // Piece points
    pub const ROI_POINTS: i32 = 100;
    pub const REINE_POINTS: i32 = 50;
    pub const FOU_POINTS: i32 = 30;
    pub const TOUR_POINTS: i32 = 30;
    pub const CHEVALIER_POINTS: i32 = 30;
    pub const PION_POINTS: i32 = 10;
}

// ============================================================================
// CONFIGURATION RECORD
// ============================================================================

/// A named preset of gameplay parameters for a paddle-chess match.
///
/// `id` and `created_at` are assigned by storage at insertion and are
/// immutable for the life of the record; everything else is replaceable
/// through an update. Wire representation uses camelCase keys
/// (`ballSpeed`, `roiLives`, `createdAt`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct GameConfiguration {
    pub id: ConfigurationId,
    /// Preset name, non-blank, at most 100 characters.
    pub name: String,
    pub ball_speed: i32,
    pub ball_damage: i32,
    pub board_width: i32,
    pub starting_player: i32,
    pub roi_lives: i32,
    pub reine_lives: i32,
    pub fou_lives: i32,
    pub tour_lives: i32,
    pub chevalier_lives: i32,
    pub pion_lives: i32,
    pub roi_points: i32,
    pub reine_points: i32,
    pub fou_points: i32,
    pub tour_points: i32,
    pub chevalier_points: i32,
    pub pion_points: i32,
    #[cfg_attr(feature = "openapi", schema(value_type = String, format = "date-time"))]
    pub created_at: Timestamp,
}
